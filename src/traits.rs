use std::fmt;
use std::rc::Rc;

use crate::error::SubjectError;

/// Opaque handle for one subscription. Never reused by the subject that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub(crate) u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub trait Observer {
    fn update(&self, message: &str);
}

pub trait Subject {
    fn subscribe(&mut self, observer: Rc<dyn Observer>) -> Result<ObserverId, SubjectError>;
    fn unsubscribe(&mut self, id: ObserverId) -> Result<Rc<dyn Observer>, SubjectError>;
    fn notify(&self) -> usize;
}
