//! # build-cleanup
//!
//! Implements the `clean` and `distclean` targets of a configured build
//! tree.
//!
//! ## Overview
//!
//! The configure step writes `build_config.json` into the build directory,
//! naming every path the build produces. build-cleanup reads that file and
//! deletes:
//!
//! - **clean**: the contents of the object and documentation output
//!   directories, the documentation stamp, the CLI and test executables, and
//!   every static or shared library artifact in the output directory
//! - **distclean**: the makefile, the whole build directory, the executables,
//!   the library artifacts, and the generated sources listed in the
//!   configuration
//!
//! A missing build directory counts as already clean. Failing to delete an
//! individual file is logged and never stops the run.
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line options using clap
//! - [`cleaner`]: The cleanup run and its builder
//! - [`config`]: The `build_config.json` model
//! - [`error`]: Error types with thiserror + miette
//! - [`library`]: Library artifact name matching
//! - [`logging`]: Level-filtered stderr logger
//! - [`remove`]: Best-effort deletion primitives
//!
//! ## Library Usage
//!
//! ```no_run
//! use build_cleanup::cleaner;
//! use build_cleanup::cli::Cli;
//!
//! let cli = Cli::builder().build_dir("build").verbose(true).build();
//! let outcome = cleaner::execute(&cli)?;
//! std::process::exit(outcome.exit_code());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod remove;
