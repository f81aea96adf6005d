//! The cleanup run: read a build directory's configuration and delete what
//! it names.
//!
//! A run never stops because a single file or directory could not be
//! removed. Only an unreadable configuration ends it early (with
//! [`Outcome::ConfigUnavailable`]), and only an invalid configuration is an
//! error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, CleanMode};
use crate::config::{BUILD_CONFIG_FILE, BuildConfig, load_build_config};
use crate::error::{CleanError, Result};
use crate::library::LibraryPattern;
use crate::logging::Logger;
use crate::remove::{
    Removal, is_traversable, log_dir_removal, log_file_removal, remove_all_in_dir, remove_dir,
    remove_file,
};

/// Counts of deletion outcomes for the targets a run named explicitly.
///
/// Files removed by emptying an object directory are not counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanStats {
    pub removed: usize,
    pub missing: usize,
    pub failed: usize,
}

impl CleanStats {
    fn record(&mut self, outcome: &Removal) {
        match outcome {
            Removal::Removed => self.removed += 1,
            Removal::Missing => self.missing += 1,
            Removal::Failed(_) => self.failed += 1,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The build directory does not exist; nothing to do.
    NothingToClean,
    /// The configuration was read and every target was processed.
    Cleaned(CleanStats),
    /// The build directory exists but its configuration could not be read.
    ConfigUnavailable,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::NothingToClean | Outcome::Cleaned(_) => 0,
            Outcome::ConfigUnavailable => 1,
        }
    }
}

pub struct Cleaner<'a> {
    build_dir: &'a Path,
    mode: CleanMode,
    working_dir: PathBuf,
    log: Logger,
}

#[derive(Default)]
pub struct CleanerBuilder<'a> {
    build_dir: Option<&'a Path>,
    mode: Option<CleanMode>,
    working_dir: Option<&'a Path>,
    log: Option<Logger>,
}

impl<'a> CleanerBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_dir(mut self, path: &'a Path) -> Self {
        self.build_dir = Some(path);
        self
    }

    pub fn mode(mut self, mode: CleanMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Directory that relative build and configuration paths are resolved
    /// against. Defaults to the process's current directory.
    pub fn working_dir(mut self, path: &'a Path) -> Self {
        self.working_dir = Some(path);
        self
    }

    pub fn logger(mut self, log: Logger) -> Self {
        self.log = Some(log);
        self
    }

    pub fn build(self) -> Result<Cleaner<'a>> {
        let build_dir = self
            .build_dir
            .ok_or_else(|| CleanError::BuilderError("build_dir is required".to_string()))?;

        let working_dir = match self.working_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().map_err(|source| CleanError::IoError {
                path: PathBuf::from("."),
                source,
            })?,
        };

        Ok(Cleaner {
            build_dir,
            mode: self.mode.unwrap_or(CleanMode::Clean),
            working_dir,
            log: self.log.unwrap_or_else(|| Logger::new(false)),
        })
    }
}

impl<'a> Cleaner<'a> {
    pub fn builder<'b>() -> CleanerBuilder<'b> {
        CleanerBuilder::new()
    }

    /// Clean the build directory.
    ///
    /// Returns an error only when `build_config.json` exists but is not a
    /// valid configuration; in that case nothing has been deleted.
    pub fn run(&self) -> Result<Outcome> {
        let build_dir = self.resolve(self.build_dir);

        if !is_traversable(&build_dir) {
            self.log.debug("No build directory found");
            return Ok(Outcome::NothingToClean);
        }

        let config = match load_build_config(&build_dir) {
            Ok(config) => config,
            Err(CleanError::ConfigRead { path, source }) => {
                self.log.error(format!(
                    "Unable to access {BUILD_CONFIG_FILE} in build dir ({}: {source})",
                    path.display()
                ));
                return Ok(Outcome::ConfigUnavailable);
            }
            Err(e) => return Err(e),
        };

        let stats = self.clean(&config);
        self.log.debug(format!(
            "Cleanup finished: {} removed, {} missing, {} failed",
            stats.removed, stats.missing, stats.failed
        ));

        Ok(Outcome::Cleaned(stats))
    }

    fn clean(&self, config: &BuildConfig) -> CleanStats {
        let mut stats = CleanStats::default();

        match self.mode {
            CleanMode::DistClean => {
                self.remove_file(&config.makefile_path, &mut stats);
                self.remove_dir(&config.build_dir, &mut stats);
            }
            CleanMode::Clean => {
                for (key, dir) in config.object_dirs() {
                    if dir.is_empty() {
                        self.log.debug(format!("No {key} configured"));
                        continue;
                    }
                    remove_all_in_dir(&self.resolve(dir), &self.log);
                }

                self.remove_file(&config.doc_stamp_file, &mut stats);
            }
        }

        self.remove_file(&config.cli_exe, &mut stats);
        self.remove_file(&config.test_exe, &mut stats);

        self.remove_library_artifacts(config, &mut stats);

        if self.mode == CleanMode::DistClean {
            for file in config.generated_files() {
                self.remove_file(file, &mut stats);
            }
        }

        stats
    }

    fn remove_library_artifacts(&self, config: &BuildConfig, stats: &mut CleanStats) {
        let pattern = LibraryPattern::new(&config.lib_prefix, &config.libname);
        let out_dir = self.resolve(&config.out_dir);

        let entries = match fs::read_dir(&out_dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.log.error(format!(
                    "Failed listing output directory \"{}\": {e}",
                    out_dir.display()
                ));
                return;
            }
        };

        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };

            if pattern.matches(name) {
                let path = out_dir.join(name);
                let outcome = remove_file(&path);
                stats.record(&outcome);
                log_file_removal(&path, outcome, &self.log);
            }
        }
    }

    fn remove_file(&self, configured: &str, stats: &mut CleanStats) {
        if configured.is_empty() {
            stats.record(&Removal::Missing);
            return;
        }

        let path = self.resolve(configured);
        let outcome = remove_file(&path);
        stats.record(&outcome);
        log_file_removal(&path, outcome, &self.log);
    }

    fn remove_dir(&self, configured: &str, stats: &mut CleanStats) {
        if configured.is_empty() {
            stats.record(&Removal::Missing);
            return;
        }

        let path = self.resolve(configured);
        let outcome = remove_dir(&path);
        stats.record(&outcome);
        log_dir_removal(&path, outcome, &self.log);
    }

    fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.working_dir.join(path)
    }
}

/// Run the cleanup described by parsed command-line options.
pub fn execute(cli: &Cli) -> Result<Outcome> {
    execute_with_dir(cli, None)
}

/// Run the cleanup with an explicit working directory.
pub fn execute_with_dir(cli: &Cli, working_dir: Option<&Path>) -> Result<Outcome> {
    let mut builder = Cleaner::builder()
        .build_dir(cli.build_dir())
        .mode(cli.mode())
        .logger(Logger::new(cli.verbose()));

    if let Some(dir) = working_dir {
        builder = builder.working_dir(dir);
    }

    builder.build()?.run()
}
