//! Iterative symlink-chain resolution.
//!
//! The resolver chases one readlink at a time: an absolute target replaces
//! the working path, a relative target is joined against the current
//! link's directory, and the first entry that is not a symlink ends the
//! chain. Intermediate directory components are deliberately left alone;
//! this is a single-component chase, not a full realpath.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::join::join;
use crate::path::MAX_PATH_LEN;

/// Default hop limit, matching the nested-symlink ceiling most kernels
/// enforce for full path lookups.
const DEFAULT_MAX_HOPS: usize = 40;

/// Resolves a symlink chain to the first non-link entry.
///
/// The working path is an owned value local to each [`resolve`] call, so a
/// resolver can be shared, reused, or exercised from parallel tests
/// without any cross-call state.
///
/// # Examples
///
/// ```no_run
/// use sibexec::LinkResolver;
/// use std::path::Path;
///
/// let resolver = LinkResolver::new();
/// let real = resolver.resolve(Path::new("/opt/app/bin/tool")).unwrap();
/// assert!(!real.is_symlink());
/// ```
///
/// [`resolve`]: LinkResolver::resolve
#[derive(Debug, Clone)]
pub struct LinkResolver {
    /// Path capacity in bytes, terminator included.
    capacity: usize,
    /// Maximum number of links to follow before giving up.
    max_hops: usize,
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self {
            capacity: MAX_PATH_LEN,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }
}

impl LinkResolver {
    /// Create a new resolver with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use sibexec::LinkResolver;
    ///
    /// let resolver = LinkResolver::new();
    /// assert_eq!(resolver.capacity(), sibexec::MAX_PATH_LEN);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the path capacity in bytes (terminator included).
    ///
    /// # Examples
    ///
    /// ```
    /// use sibexec::LinkResolver;
    ///
    /// let resolver = LinkResolver::new().with_capacity(256);
    /// assert_eq!(resolver.capacity(), 256);
    /// ```
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Configure the maximum number of links followed per resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use sibexec::LinkResolver;
    ///
    /// let resolver = LinkResolver::new().with_max_hops(8);
    /// assert_eq!(resolver.max_hops(), 8);
    /// ```
    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Returns the configured path capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the configured hop limit.
    #[must_use]
    pub const fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Follow `path`'s symlink chain until a non-link entry is reached.
    ///
    /// On success the returned path is not a symlink, per one final
    /// readlink check. Parent components are not canonicalized and `.`/
    /// `..` segments are preserved as written in the link targets.
    ///
    /// # Errors
    ///
    /// - [`Error::PathTooLong`] if the input or any derived path exceeds
    ///   the configured capacity.
    /// - [`Error::TooManySymlinks`] if the chain is longer than the
    ///   configured hop limit (which is how a link cycle surfaces).
    /// - [`Error::Resolution`] if a readlink fails for any reason other
    ///   than the entry not being a symlink.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        self.check_fits(path)?;

        let mut current = path.to_path_buf();
        let mut hops = 0;

        loop {
            match fs::read_link(&current) {
                Ok(target) => {
                    hops += 1;
                    if hops > self.max_hops {
                        return Err(Error::TooManySymlinks {
                            path: current,
                            limit: self.max_hops,
                        });
                    }

                    current = if target.is_absolute() {
                        self.check_fits(&target)?;
                        target
                    } else {
                        match join(&current, &target, self.capacity) {
                            Ok(joined) => joined,
                            Err(Error::CapacityExceeded { .. }) => {
                                return Err(Error::PathTooLong {
                                    path: current,
                                    limit: self.capacity,
                                });
                            }
                            Err(e) => return Err(e),
                        }
                    };
                }
                // EINVAL: the entry exists but is not a symlink, which
                // ends the chain.
                Err(e) if e.kind() == ErrorKind::InvalidInput => return Ok(current),
                Err(e) => {
                    return Err(Error::Resolution {
                        path: current,
                        source: e,
                    })
                }
            }
        }
    }

    fn check_fits(&self, path: &Path) -> Result<()> {
        let len = path.as_os_str().len();
        if len + 1 > self.capacity {
            return Err(Error::PathTooLong {
                path: path.to_path_buf(),
                limit: self.capacity,
            });
        }
        Ok(())
    }
}
