use std::rc::Rc;

use crate::config::ScenarioConfig;
use crate::observer::MessagesToFileObserver;
use crate::stock_monitor::StockMonitor;
use crate::traits::{Observer, Subject};

/// Runs the fixed demo sequence: subscribe everyone, first price, drop the
/// first named observer, second price. Registry errors are ignored.
pub fn run_scenario<F>(config: &ScenarioConfig, mut make_observer: F) -> StockMonitor
where
    F: FnMut(&str) -> Rc<dyn Observer>,
{
    let mut stock_monitor = StockMonitor::new(&config.ticker);

    let mut subscriptions = Vec::with_capacity(config.observers.len());
    for name in &config.observers {
        match stock_monitor.subscribe(make_observer(name)) {
            Ok(id) => subscriptions.push(id),
            Err(e) => tracing::debug!(observer = %name, error = %e, "Subscribe ignored"),
        }
    }
    if let Some(path) = &config.message_log {
        let file_observer: Rc<dyn Observer> =
            Rc::new(MessagesToFileObserver::new("message log", path));
        if let Err(e) = stock_monitor.subscribe(file_observer) {
            tracing::debug!(error = %e, "Subscribe ignored");
        }
    }

    stock_monitor.set_price(config.first_price);

    if let Some(first) = subscriptions.first() {
        if let Err(e) = stock_monitor.unsubscribe(*first) {
            tracing::debug!(observer = %first, error = %e, "Unsubscribe ignored");
        }
    }

    stock_monitor.set_price(config.second_price);
    stock_monitor
}
