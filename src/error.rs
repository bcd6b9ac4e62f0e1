use thiserror::Error;

/// Failure reported by a value's cleanup in [`Dispose::dispose`](crate::Dispose::dispose).
#[cfg(not(feature = "std"))]
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum DisposeError {
    /// Cleanup failed for a value-specific reason
    #[error("Dispose failed: {reason}")]
    Failed {
        /// Description of why the cleanup failed
        reason: &'static str,
    },
}

/// Failure reported by a value's cleanup in [`Dispose::dispose`](crate::Dispose::dispose).
#[cfg(feature = "std")]
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum DisposeError {
    /// Cleanup failed for a value-specific reason
    #[error("Dispose failed: {reason}")]
    Failed {
        /// Description of why the cleanup failed
        reason: &'static str,
    },
    /// Cleanup hit an I/O error, for example while flushing a writer
    #[error("Dispose failed: {context}: {kind}")]
    Io {
        /// What the value was doing when the error happened
        context: &'static str,
        /// Kind of the underlying `std::io::Error`
        kind: std::io::ErrorKind,
    },
}

impl DisposeError {
    #[must_use]
    pub const fn new(reason: &'static str) -> Self {
        Self::Failed { reason }
    }

    /// Keeps the kind of an I/O error raised during cleanup.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn io(context: &'static str, error: &std::io::Error) -> Self {
        Self::Io {
            context,
            kind: error.kind(),
        }
    }
}

/// Error types for `TinyMap` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TinyMapError {
    /// Some values failed to dispose during `try_reset`. The map is empty anyway.
    #[error("Reset incomplete: {failed} of {attempted} disposals failed, first: {first}")]
    ResetIncomplete {
        /// Number of `dispose` calls that returned an error
        failed: usize,
        /// Number of `dispose` calls made
        attempted: usize,
        /// Error of the first failing value, in insertion order
        first: DisposeError,
    },
}
