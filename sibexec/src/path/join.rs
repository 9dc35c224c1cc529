//! Capacity-bounded path joining.
//!
//! The joiner combines the directory of an absolute base path with a
//! relative fragment, or takes the fragment verbatim when it is absolute.
//! The exact final length is computed before any construction, so a
//! capacity failure leaves nothing half-written behind.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extract the directory component of a path.
///
/// This is a pure function over the path's bytes: it never touches the
/// filesystem, never mutates its argument, and always returns an owned
/// value. Semantics follow POSIX `dirname`: trailing separators are
/// ignored, the final segment is stripped, a separator-free path yields
/// `.`, and the directory of a root-level entry is `/`.
///
/// # Examples
///
/// ```
/// use sibexec::path::join::dir_name;
/// use std::path::Path;
///
/// assert_eq!(dir_name(Path::new("/opt/app/lib/tool-real")), Path::new("/opt/app/lib"));
/// assert_eq!(dir_name(Path::new("/tool")), Path::new("/"));
/// assert_eq!(dir_name(Path::new("tool")), Path::new("."));
/// ```
#[must_use]
pub fn dir_name(path: &Path) -> PathBuf {
    let bytes = path.as_os_str().as_bytes();

    // Ignore trailing separators, keeping one byte for the root case.
    let mut end = bytes.len();
    while end > 1 && bytes[end - 1] == b'/' {
        end -= 1;
    }

    match bytes[..end].iter().rposition(|&b| b == b'/') {
        None => PathBuf::from("."),
        Some(0) => PathBuf::from("/"),
        Some(pos) => {
            // Drop separators between the directory and the final segment.
            let mut dir_end = pos;
            while dir_end > 1 && bytes[dir_end - 1] == b'/' {
                dir_end -= 1;
            }
            PathBuf::from(OsStr::from_bytes(&bytes[..dir_end]))
        }
    }
}

/// Join a relative fragment onto the directory of `base`, bounded by
/// `capacity`.
///
/// If `rel` is absolute it replaces `base` outright. Otherwise the result
/// is `dir_name(base)`, exactly one separator, then `rel`; no second
/// separator is inserted when the directory is the root. The required
/// byte length (terminator included) is checked against `capacity`
/// strictly before the result is built, and the inputs are never mutated,
/// so a failed join has no observable side effects.
///
/// # Errors
///
/// Returns [`Error::CapacityExceeded`] if the joined path, including its
/// terminator byte, would not fit in `capacity`.
///
/// # Examples
///
/// ```
/// use sibexec::path::{join, MAX_PATH_LEN};
/// use std::path::Path;
///
/// let base = Path::new("/opt/app/bin/tool");
///
/// // Relative fragments land next to the base's final segment.
/// let sibling = join::join(base, Path::new("../lib/tool-real"), MAX_PATH_LEN).unwrap();
/// assert_eq!(sibling, Path::new("/opt/app/bin/../lib/tool-real"));
///
/// // Absolute fragments win outright.
/// let replaced = join::join(base, Path::new("/usr/bin/python"), MAX_PATH_LEN).unwrap();
/// assert_eq!(replaced, Path::new("/usr/bin/python"));
/// ```
pub fn join(base: &Path, rel: &Path, capacity: usize) -> Result<PathBuf> {
    let rel_len = rel.as_os_str().len();

    if rel.is_absolute() {
        let required = rel_len + 1;
        if required > capacity {
            return Err(Error::CapacityExceeded { required, capacity });
        }
        return Ok(rel.to_path_buf());
    }

    let dir = dir_name(base);
    let dir_len = dir.as_os_str().len();
    // Only the root directory ends in a separator; everything else needs
    // one inserted.
    let needs_separator = !dir.as_os_str().as_bytes().ends_with(b"/");

    let required = dir_len + usize::from(needs_separator) + rel_len + 1;
    if required > capacity {
        return Err(Error::CapacityExceeded { required, capacity });
    }

    let mut joined = OsString::from(dir);
    if needs_separator {
        joined.push("/");
    }
    joined.push(rel.as_os_str());
    Ok(PathBuf::from(joined))
}
