//! Shared observers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use stock_observer::{Observer, StockObserver};

pub type Journal = Rc<RefCell<Vec<String>>>;

/// Records the exact line a console `StockObserver` would print.
pub struct RecordingObserver {
    inner: StockObserver,
    journal: Journal,
}

impl Observer for RecordingObserver {
    fn update(&self, message: &str) {
        self.journal.borrow_mut().push(self.inner.format_update(message));
    }
}

pub fn recording_observer(name: &str, journal: &Journal) -> Rc<dyn Observer> {
    Rc::new(RecordingObserver { inner: StockObserver::new(name), journal: Rc::clone(journal) })
}

pub fn temp_path(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("stock_observer_{}_{}", tag, std::process::id()))
}
