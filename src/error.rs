use thiserror::Error;

/// Errors raised by [`crate::SparseArray`] construction and reshaping.
///
/// Allocation failure is not modeled here: the crate relies on `Vec`/`Box`
/// allocation, which aborts the process on the global allocator rather than
/// returning a `Result`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SparseArrayError {
    /// `nx`, `ny`, or `nz` was not strictly positive.
    #[error("array shape must be positive, got ({nx}, {ny}, {nz})")]
    InvalidShape { nx: usize, ny: usize, nz: usize },
    /// Block edge length was not greater than 1.
    #[error("block size must be greater than 1, got {0}")]
    InvalidBlockSize(usize),
}
