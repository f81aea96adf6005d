//! Error types for build-cleanup.
//!
//! Errors derive from [`CleanError`], using `thiserror` for the definitions
//! and `miette` for the diagnostic codes and help text shown by the binary.
//!
//! Only conditions that stop a run are errors. Failures to delete a single
//! file or directory are reported as [`crate::remove::Removal::Failed`] and
//! logged instead.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur while cleaning a build directory
#[derive(Error, Debug, Diagnostic)]
pub enum CleanError {
    /// `build_config.json` exists in the build directory but could not be
    /// opened or read.
    ///
    /// The cleaner logs this and returns exit status 1 without touching the
    /// filesystem.
    #[error("Unable to access build_config.json in build dir '{}'", path.display())]
    #[diagnostic(
        code(build_cleanup::config::unreadable),
        help("Run the configure step first, or pass the correct --build-dir.")
    )]
    ConfigRead {
        /// Path of the configuration file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// `build_config.json` is not valid JSON or lacks a key the cleaner
    /// needs.
    ///
    /// Raised before any deletion happens, so a bad configuration never
    /// leaves a half-cleaned tree behind.
    #[error("Invalid build configuration '{}': {source}", path.display())]
    #[diagnostic(
        code(build_cleanup::config::invalid),
        help(
            "Every path key is required in both clean and distclean mode (only \
             generated_files is optional). The configuration is produced by the configure \
             step; regenerate it."
        )
    )]
    ConfigParse {
        /// Path of the configuration file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The working directory could not be determined.
    #[error("I/O error accessing '{}'", path.display())]
    #[diagnostic(code(build_cleanup::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A required builder parameter was not provided.
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(build_cleanup::builder::error),
        help("Check the required builder parameters.")
    )]
    BuilderError(
        /// Description of the missing parameter
        String,
    ),
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CleanError>;
