//! Error types for the sibexec library.
//!
//! This module provides the error hierarchy for path joining and symlink
//! resolution, using `thiserror` for ergonomic error handling. Every error
//! carries its originating cause in the value itself; there is no global
//! error side channel.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a sibexec error.
///
/// # Examples
///
/// ```
/// use sibexec::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("/opt/app/lib/tool-real"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sibexec library.
///
/// This enum encompasses all failure conditions of path joining and
/// symlink-chain resolution. All of them are terminal for the launcher:
/// there is no retry or local recovery anywhere in the system.
#[derive(Debug, Error)]
pub enum Error {
    /// An input or derived path exceeds the maximum representable length.
    #[error("path too long: {} (limit {limit} bytes)", path.display())]
    PathTooLong {
        /// The path that does not fit.
        path: PathBuf,
        /// The capacity limit in bytes, including the terminator byte.
        limit: usize,
    },

    /// A join would overflow the destination capacity.
    ///
    /// Surfaced as [`Error::PathTooLong`] by the resolver; callers of the
    /// join primitive see it directly.
    #[error("joined path would need {required} bytes, capacity is {capacity}")]
    CapacityExceeded {
        /// The exact byte length the joined path would need, terminator
        /// included.
        required: usize,
        /// The capacity that was available.
        capacity: usize,
    },

    /// Symlink resolution exceeded the configured hop limit.
    #[error("too many levels of symbolic links: {} (limit {limit})", path.display())]
    TooManySymlinks {
        /// The path at which the limit was hit.
        path: PathBuf,
        /// The configured hop limit.
        limit: usize,
    },

    /// Reading a symlink failed for a reason other than "not a symlink".
    #[error("error reading {}: {source}", path.display())]
    Resolution {
        /// The path whose link target could not be read.
        path: PathBuf,
        /// The underlying I/O error (permission, missing file, ...).
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Check if the error indicates a path-length failure.
    ///
    /// Both [`Error::PathTooLong`] and [`Error::CapacityExceeded`] count:
    /// they are the same condition observed at different layers.
    ///
    /// # Examples
    ///
    /// ```
    /// use sibexec::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathTooLong { path: PathBuf::from("/long"), limit: 8 };
    /// assert!(err.is_too_long());
    /// ```
    #[must_use]
    pub fn is_too_long(&self) -> bool {
        matches!(
            self,
            Self::PathTooLong { .. } | Self::CapacityExceeded { .. }
        )
    }

    /// Check if the error came from the underlying symlink read.
    ///
    /// # Examples
    ///
    /// ```
    /// use sibexec::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::Resolution {
    ///     path: PathBuf::from("/gone"),
    ///     source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    /// };
    /// assert!(err.is_resolution());
    /// ```
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }
}
