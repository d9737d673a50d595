//! Observer pattern around a stock price.
//!
//! A [`StockMonitor`] keeps an ordered registry of [`Observer`]s and pushes a
//! formatted snapshot (`Stock Monitor: APPL $500.00`) to each of them, in
//! subscription order, every time its price is set.

pub mod config;
pub mod error;
pub mod scenario;
pub mod stock_monitor;

// Traits for pattern Observer
pub mod traits;

// Concrete observers
pub mod observer;

pub use error::SubjectError;
pub use observer::{MessagesToFileObserver, StockObserver};
pub use stock_monitor::StockMonitor;
pub use traits::{Observer, ObserverId, Subject};
