#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::TempDir;
use serde_json::{Value, json};

/// A configured build tree laid out the way the configure step writes it.
///
/// All configuration paths are relative to the temporary root, which the
/// tests use as the cleaner's working directory.
pub struct BuildTree {
    root: TempDir,
    config: Value,
}

impl BuildTree {
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temporary build root");
        let config = json!({
            "build_dir": "build",
            "makefile_path": "Makefile",
            "libobj_dir": "build/obj/lib",
            "cliobj_dir": "build/obj/cli",
            "testobj_dir": "build/obj/test",
            "doc_output_dir_manual": "build/docs/manual",
            "doc_output_dir_doxygen": "build/docs/doxygen",
            "doc_stamp_file": "build/doc.stamp",
            "cli_exe": "app",
            "test_exe": "app_test",
            "lib_prefix": "lib",
            "libname": "foo",
            "out_dir": ".",
            "generated_files": "build/include/build.h build/include/version.h",
        });

        Self { root, config }
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.config[key] = Value::String(value.to_string());
        self
    }

    pub fn remove_key(mut self, key: &str) -> Self {
        if let Some(map) = self.config.as_object_mut() {
            map.remove(key);
        }
        self
    }

    /// Write `build_config.json` plus every directory and file it names.
    pub fn populate(self) -> Self {
        for key in [
            "libobj_dir",
            "cliobj_dir",
            "testobj_dir",
            "doc_output_dir_manual",
            "doc_output_dir_doxygen",
        ] {
            let dir = self.config_path(key);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("a.o"), "obj").unwrap();
            fs::write(dir.join("b.o"), "obj").unwrap();
        }

        for key in ["makefile_path", "doc_stamp_file", "cli_exe", "test_exe"] {
            self.touch(self.config_str(key));
        }

        if let Some(files) = self.config["generated_files"].as_str() {
            for file in files.split(' ') {
                self.touch(file);
            }
        }

        self.write_config()
    }

    /// Write only `build_config.json`.
    pub fn write_config(self) -> Self {
        let build_dir = self.config_path("build_dir");
        fs::create_dir_all(&build_dir).unwrap();
        fs::write(
            build_dir.join("build_config.json"),
            serde_json::to_string_pretty(&self.config).unwrap(),
        )
        .unwrap();
        self
    }

    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, relative).unwrap();
        path
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn temp_dir(&self) -> &TempDir {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn config_str(&self, key: &str) -> &str {
        self.config[key].as_str().unwrap_or_default()
    }

    pub fn config_path(&self, key: &str) -> PathBuf {
        self.path(self.config_str(key))
    }

    /// Sorted relative paths of every file and directory under the root.
    pub fn snapshot(&self) -> Vec<String> {
        let mut entries = Vec::new();
        collect(self.root.path(), self.root.path(), &mut entries);
        entries.sort();
        entries
    }
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        out.push(path.strip_prefix(root).unwrap().display().to_string());
        if path.is_dir() {
            collect(root, &path, out);
        }
    }
}
