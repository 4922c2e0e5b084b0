use thiserror::Error;

/// Errors that can occur when building or mutating a Dictionary.
///
/// A missing key is not an error: lookups return `None` and deletes return
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Storage for the row array, a row's entries, or a key copy could not be
    /// acquired.
    #[error("allocation failure")]
    AllocationFailure,
    /// The configured default row count is invalid (must be greater than 0).
    #[error("default row count must be greater than 0")]
    InvalidDefaultRowCount,
    /// The configured initial row capacity is invalid (must be greater than 0).
    #[error("initial row capacity must be greater than 0")]
    InvalidRowCapacity,
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::AllocationFailure
    }
}
