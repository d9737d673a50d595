use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stock_observer::config::{load_config, ScenarioConfig};
use stock_observer::scenario::run_scenario;
use stock_observer::{Observer, StockObserver};

#[derive(Parser, Debug)]
#[command(name = "stock_observer", about = "Stock price observer demo")]
struct Cli {
    /// TOML scenario file; built-in APPL scenario when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the observer output only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ScenarioConfig::default(),
    };

    tracing::info!(
        ticker = %config.ticker,
        observers = config.observers.len(),
        message_log = ?config.message_log,
        "Scenario loaded"
    );

    let stock_monitor = run_scenario(&config, |name| -> Rc<dyn Observer> {
        Rc::new(StockObserver::new(name))
    });

    tracing::info!(
        final_state = %stock_monitor,
        remaining = stock_monitor.len(),
        "Scenario complete"
    );
    Ok(())
}
