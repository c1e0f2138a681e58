use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error that can be returned by [`crate::Cursor`] methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An element was requested from a cursor that has nothing left to produce.
    #[error("no element at position {position}, sequence length is {len}")]
    OutOfRange { position: usize, len: usize },
}
