//! Path arithmetic for locating a script's real file and its siblings.
//!
//! This module owns the two algorithms the launcher is built on:
//!
//! - **Joining** ([`join`]): splicing a relative fragment onto the
//!   directory of an absolute path under a fixed capacity, or replacing
//!   the path outright when the fragment is absolute.
//! - **Resolution** ([`resolve`]): iteratively chasing a symlink chain,
//!   one readlink at a time, until a non-link entry is reached.
//!
//! Both operate on owned values. Nothing in this module mutates its
//! inputs, keeps static scratch storage, or returns views into shared
//! buffers, so the components compose safely and can be tested in
//! parallel.
//!
//! # Capacity model
//!
//! Lengths are measured in bytes. A path of byte length `L` needs `L + 1`
//! bytes of capacity: the extra byte is the NUL terminator the exec
//! boundary appends when the path crosses into the kernel. Every join and
//! every resolution step checks this bound before constructing anything,
//! so an overflowing operation fails cleanly with no partial result.
//!
//! # Examples
//!
//! ```
//! use sibexec::path::{join, MAX_PATH_LEN};
//! use std::path::Path;
//!
//! let base = Path::new("/opt/app/lib/tool-real");
//! let joined = join::join(base, Path::new("python"), MAX_PATH_LEN).unwrap();
//! assert_eq!(joined, Path::new("/opt/app/lib/python"));
//! ```

pub mod join;
pub mod resolve;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolve::LinkResolver;

/// Maximum representable path length in bytes.
///
/// This is the conventional platform path limit. It includes room for the
/// terminating NUL byte, so the longest representable path has
/// `MAX_PATH_LEN - 1` bytes of content.
pub const MAX_PATH_LEN: usize = 4096;
