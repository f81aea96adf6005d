//! The `build_config.json` document written by the configure step.
//!
//! Only the keys the cleaner consumes are modeled; anything else in the
//! document is ignored. All modeled keys except `generated_files` are
//! required, so a configuration missing one is rejected before any file is
//! touched.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CleanError, Result};

/// File name of the build configuration inside the build directory.
pub const BUILD_CONFIG_FILE: &str = "build_config.json";

/// Directory keys whose direct contents are removed by a default clean.
pub const OBJECT_DIR_KEYS: [&str; 5] = [
    "libobj_dir",
    "cliobj_dir",
    "testobj_dir",
    "doc_output_dir_manual",
    "doc_output_dir_doxygen",
];

/// Paths describing a configured build tree.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BuildConfig {
    pub build_dir: String,
    pub makefile_path: String,
    pub libobj_dir: String,
    pub cliobj_dir: String,
    pub testobj_dir: String,
    pub doc_output_dir_manual: String,
    pub doc_output_dir_doxygen: String,
    pub doc_stamp_file: String,
    pub cli_exe: String,
    pub test_exe: String,
    pub lib_prefix: String,
    pub libname: String,
    pub out_dir: String,
    /// Space-separated list of generated sources, removed by distclean.
    #[serde(default)]
    pub generated_files: Option<String>,
}

impl BuildConfig {
    /// Parse a configuration from its JSON text.
    pub fn from_json(contents: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(contents).map_err(|source| CleanError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The object directories in [`OBJECT_DIR_KEYS`] order, paired with
    /// their key.
    pub fn object_dirs(&self) -> [(&'static str, &str); 5] {
        [
            (OBJECT_DIR_KEYS[0], self.libobj_dir.as_str()),
            (OBJECT_DIR_KEYS[1], self.cliobj_dir.as_str()),
            (OBJECT_DIR_KEYS[2], self.testobj_dir.as_str()),
            (OBJECT_DIR_KEYS[3], self.doc_output_dir_manual.as_str()),
            (OBJECT_DIR_KEYS[4], self.doc_output_dir_doxygen.as_str()),
        ]
    }

    /// Entries of `generated_files`, split on single spaces. Empty pieces
    /// are dropped.
    pub fn generated_files(&self) -> Vec<&str> {
        self.generated_files
            .as_deref()
            .map(|files| files.split(' ').filter(|f| !f.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Path of the configuration file inside `build_dir`.
pub fn build_config_path(build_dir: &Path) -> PathBuf {
    build_dir.join(BUILD_CONFIG_FILE)
}

/// Read and parse `build_config.json` from `build_dir`.
///
/// Returns [`CleanError::ConfigRead`] if the file cannot be read and
/// [`CleanError::ConfigParse`] if its contents are not a valid
/// configuration.
pub fn load_build_config(build_dir: &Path) -> Result<BuildConfig> {
    let path = build_config_path(build_dir);
    let contents = fs::read_to_string(&path).map_err(|source| CleanError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    BuildConfig::from_json(&contents, &path)
}
