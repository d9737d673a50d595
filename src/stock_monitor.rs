use std::fmt;
use std::rc::Rc;

use crate::error::SubjectError;
use crate::traits::{Observer, ObserverId, Subject};

// Compare allocations only, vtables may differ for the same object.
fn same_observer(a: &Rc<dyn Observer>, b: &Rc<dyn Observer>) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

/// Concrete subject: a ticker whose price changes are pushed to every subscriber.
pub struct StockMonitor {
    ticker: String,
    price: f64,
    observers: Vec<(ObserverId, Rc<dyn Observer>)>,
    next_id: u64,
}

impl StockMonitor {
    pub fn new(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            price: 0.0,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn contains(&self, observer: &Rc<dyn Observer>) -> bool {
        self.observers.iter().any(|(_, o)| same_observer(o, observer))
    }

    /// Sets the price and notifies every observer before returning. No validation.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.notify();
    }

    /// Removes a subscription by observer identity rather than by handle.
    pub fn unsubscribe_observer(
        &mut self,
        observer: &Rc<dyn Observer>,
    ) -> Result<ObserverId, SubjectError> {
        let position = self
            .observers
            .iter()
            .position(|(_, o)| same_observer(o, observer))
            .ok_or(SubjectError::ObserverNotFound)?;
        let (id, _) = self.observers.remove(position);
        tracing::debug!(
            ticker = %self.ticker,
            observer = %id,
            remaining = self.observers.len(),
            "Observer unsubscribed"
        );
        Ok(id)
    }
}

impl Subject for StockMonitor {
    fn subscribe(&mut self, observer: Rc<dyn Observer>) -> Result<ObserverId, SubjectError> {
        if self.contains(&observer) {
            return Err(SubjectError::DuplicateObserver);
        }
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        tracing::debug!(
            ticker = %self.ticker,
            observer = %id,
            total = self.observers.len(),
            "Observer subscribed"
        );
        Ok(id)
    }

    fn unsubscribe(&mut self, id: ObserverId) -> Result<Rc<dyn Observer>, SubjectError> {
        let position = self
            .observers
            .iter()
            .position(|(registered, _)| *registered == id)
            .ok_or(SubjectError::ObserverNotFound)?;
        let (_, observer) = self.observers.remove(position);
        tracing::debug!(
            ticker = %self.ticker,
            observer = %id,
            remaining = self.observers.len(),
            "Observer unsubscribed"
        );
        Ok(observer)
    }

    fn notify(&self) -> usize {
        let message = self.to_string();
        for (id, observer) in self.observers.iter() {
            tracing::trace!(observer = %id, "Delivering update");
            observer.update(&message);
        }
        tracing::debug!(
            ticker = %self.ticker,
            delivered = self.observers.len(),
            "Notification pass complete"
        );
        self.observers.len()
    }
}

impl fmt::Display for StockMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Signed infinities render as +Inf / -Inf, NaN as NaN
        if self.price.is_infinite() {
            let sign = if self.price > 0.0 { '+' } else { '-' };
            write!(f, "Stock Monitor: {} ${}Inf", self.ticker, sign)
        } else {
            write!(f, "Stock Monitor: {} ${:.2}", self.ticker, self.price)
        }
    }
}
