#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sibexec
//!
//! A library for resolving a script's real location through a chain of
//! symlinks and locating a sibling interpreter stored next to that real
//! file.
//!
//! A script installed as `/opt/app/lib/tool-real` and exposed as the
//! symlink `/opt/app/bin/tool` cannot find an interpreter shipped beside
//! the real file by looking next to the symlink. This library follows the
//! link chain to the real file and splices the interpreter name onto the
//! resolved directory, all under a fixed path-length budget.
//!
//! ## Core Types
//!
//! - [`LinkResolver`]: iterative symlink-chain resolution
//! - [`path::join`]: capacity-bounded path joining
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use sibexec::path::{join, MAX_PATH_LEN};
//! use std::path::Path;
//!
//! // Attach an interpreter name to a resolved script's directory.
//! let script = Path::new("/opt/app/lib/tool-real");
//! let interp = join::join(script, Path::new("python"), MAX_PATH_LEN).unwrap();
//! assert_eq!(interp, Path::new("/opt/app/lib/python"));
//! ```

pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{LinkResolver, MAX_PATH_LEN};
