//! Command-line interface definitions for build-cleanup.
//!
//! The CLI is a single flat set of options parsed into [`Cli`]. Extra
//! positional arguments are rejected by clap, which prints a usage error and
//! exits with status 2 before any cleanup starts.
//!
//! # Example
//!
//! ```no_run
//! use build_cleanup::cli::{Cli, CleanMode};
//!
//! let cli = Cli::parse_args();
//! if cli.mode() == CleanMode::DistClean {
//!     println!("Removing the whole build tree in {}", cli.build_dir().display());
//! }
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

/// Default build directory, relative to the working directory.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Which set of artifacts a run removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    /// Remove objects, executables, libraries and the doc stamp.
    Clean,
    /// Remove the whole build tree, the makefile and generated sources too.
    DistClean,
}

/// Command-line options for build-cleanup.
#[derive(Parser, Debug)]
#[command(
    name = "build-cleanup",
    bin_name = "build-cleanup",
    author,
    version,
    about = "Remove build artifacts listed in a build directory's build_config.json",
    long_about = None
)]
pub struct Cli {
    /// Build directory to clean
    #[arg(
        long,
        value_name = "DIR",
        default_value = DEFAULT_BUILD_DIR,
        env = "BUILD_CLEANUP_BUILD_DIR"
    )]
    build_dir: PathBuf,

    /// Clean everything: also remove the build directory, the makefile and
    /// generated sources
    #[arg(long)]
    distclean: bool,

    /// Noisy logging (show debug messages)
    #[arg(short, long, env = "BUILD_CLEANUP_VERBOSE")]
    verbose: bool,
}

impl Cli {
    /// Parse from `std::env::args_os()`, exiting on usage errors.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    /// Get the build directory
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Check if distclean was requested
    pub fn distclean(&self) -> bool {
        self.distclean
    }

    /// Check if verbose logging is enabled
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The clean mode selected by the flags
    pub fn mode(&self) -> CleanMode {
        if self.distclean {
            CleanMode::DistClean
        } else {
            CleanMode::Clean
        }
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    build_dir: Option<PathBuf>,
    distclean: bool,
    verbose: bool,
}

impl CliBuilder {
    /// Set the build directory
    pub fn build_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_dir = Some(dir.into());
        self
    }

    /// Select distclean mode
    pub fn distclean(mut self, enabled: bool) -> Self {
        self.distclean = enabled;
        self
    }

    /// Enable verbose logging
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Cli {
        Cli {
            build_dir: self
                .build_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR)),
            distclean: self.distclean,
            verbose: self.verbose,
        }
    }
}
