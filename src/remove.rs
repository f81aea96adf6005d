//! Best-effort deletion primitives.
//!
//! Each primitive reports what happened as a [`Removal`] instead of
//! failing: the caller logs the outcome and moves on to the next target, so
//! one stubborn file never stops the rest of a cleanup.

use std::fs;
use std::io;
use std::path::Path;

use crate::logging::Logger;

/// Outcome of removing a single filesystem object.
#[derive(Debug)]
pub enum Removal {
    /// The object existed and was deleted.
    Removed,
    /// Nothing existed at the path.
    Missing,
    /// The object could not be deleted.
    Failed(io::Error),
}

impl Removal {
    fn from_io(result: io::Result<()>) -> Self {
        match result {
            Ok(()) => Removal::Removed,
            // Lost a race with something else deleting it
            Err(e) if e.kind() == io::ErrorKind::NotFound => Removal::Missing,
            Err(e) => Removal::Failed(e),
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, Removal::Removed)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Removal::Missing)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Removal::Failed(_))
    }
}

/// Delete a single file (or symlink).
pub fn remove_file(path: &Path) -> Removal {
    match fs::symlink_metadata(path) {
        Ok(_) => Removal::from_io(fs::remove_file(path)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Removal::Missing,
        Err(e) => Removal::Failed(e),
    }
}

/// Delete a directory and everything below it.
pub fn remove_dir(path: &Path) -> Removal {
    match fs::symlink_metadata(path) {
        Ok(_) => Removal::from_io(fs::remove_dir_all(path)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Removal::Missing,
        Err(e) => Removal::Failed(e),
    }
}

/// Returns true if `path` is a directory the process may search, i.e. open
/// paths below it. Read permission on the directory is not required.
pub fn is_traversable(path: &Path) -> bool {
    path.is_dir() && has_search_permission(path)
}

#[cfg(unix)]
fn has_search_permission(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(not(unix))]
fn has_search_permission(_path: &Path) -> bool {
    true
}

/// Remove every direct child of `dir` with [`remove_file`], logging each
/// outcome. The directory itself is kept and subdirectories are not
/// descended into.
pub fn remove_all_in_dir(dir: &Path, log: &Logger) {
    if !is_traversable(dir) {
        log.debug(format!("Directory {} was missing", dir.display()));
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log.debug(format!("Directory {} was missing", dir.display()));
            return;
        }
        Err(e) => {
            log.error(format!(
                "Failed listing directory \"{}\": {e}",
                dir.display()
            ));
            return;
        }
    };

    log.debug(format!("Removing all files in directory \"{}\"", dir.display()));

    for entry in entries {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                log_file_removal(&path, remove_file(&path), log);
            }
            Err(e) => log.error(format!(
                "Failed listing directory \"{}\": {e}",
                dir.display()
            )),
        }
    }
}

pub(crate) fn log_file_removal(path: &Path, outcome: Removal, log: &Logger) {
    match outcome {
        Removal::Removed => log.debug(format!("Removed file \"{}\"", path.display())),
        Removal::Missing => log.debug(format!("File {} was missing", path.display())),
        Removal::Failed(e) => {
            log.error(format!("Failed removing file \"{}\": {e}", path.display()))
        }
    }
}

pub(crate) fn log_dir_removal(path: &Path, outcome: Removal, log: &Logger) {
    match outcome {
        Removal::Removed => log.debug(format!("Removed directory \"{}\"", path.display())),
        Removal::Missing => log.debug(format!("Directory {} was missing", path.display())),
        Removal::Failed(e) => log.error(format!(
            "Failed removing directory \"{}\": {e}",
            path.display()
        )),
    }
}
