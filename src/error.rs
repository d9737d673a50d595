use thiserror::Error;

/// Registry failures reported by a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubjectError {
    /// The same observer is already subscribed
    #[error("observer already exists")]
    DuplicateObserver,

    /// Nothing registered under the given observer or handle
    #[error("observer not found")]
    ObserverNotFound,
}
