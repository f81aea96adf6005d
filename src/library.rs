//! Recognition of static and shared library artifacts by file name.

use std::sync::OnceLock;

use regex::Regex;

/// File suffixes that mark a library artifact.
pub const KNOWN_LIBRARY_SUFFIXES: [&str; 5] = ["a", "so", "dll", "manifest", "exp"];

/// Matches `<basename>.<suffix>` names for one library, either ending
/// there or continuing with a `.<version>` such as `.1.2.3` (anything may
/// follow the version).
#[derive(Debug, Clone)]
pub struct LibraryPattern {
    basename: String,
}

impl LibraryPattern {
    pub fn new(lib_prefix: &str, libname: &str) -> Self {
        Self {
            basename: format!("{lib_prefix}{libname}"),
        }
    }

    /// Returns the lowercase suffix following the basename, if `filename`
    /// has the library shape at all. The suffix is not checked against
    /// [`KNOWN_LIBRARY_SUFFIXES`].
    pub fn suffix<'a>(&self, filename: &'a str) -> Option<&'a str> {
        static TAIL_RE: OnceLock<Regex> = OnceLock::new();

        let tail = filename.strip_prefix(self.basename.as_str())?.strip_prefix('.')?;
        let re = TAIL_RE.get_or_init(|| {
            Regex::new(r"^([a-z]+)(?:\.[0-9.]+|$)").expect("library tail regex should compile")
        });
        let captures = re.captures(tail)?;

        captures.get(1).map(|m| m.as_str())
    }

    /// True if `filename` is an artifact of this library.
    pub fn matches(&self, filename: &str) -> bool {
        self.suffix(filename)
            .is_some_and(|suffix| KNOWN_LIBRARY_SUFFIXES.contains(&suffix))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_versioned_and_unversioned_artifacts() {
        let pattern = LibraryPattern::new("lib", "foo");

        for name in [
            "libfoo.a",
            "libfoo.so",
            "libfoo.so.1",
            "libfoo.so.1.2.3",
            "libfoo.dll",
            "libfoo.manifest",
            "libfoo.exp",
            "libfoo.so.1.2.3.debug",
            "libfoo.so.1abc",
            "libfoo.so.1.0-gdb.py",
        ] {
            assert!(pattern.matches(name), "should match: {name}");
        }
    }

    #[test]
    fn test_unrelated_names_rejected() {
        let pattern = LibraryPattern::new("lib", "foo");

        for name in [
            "libfoobar.so", // different library sharing the prefix
            "libfoo.txt",   // unknown suffix
            "libfoo.so.x",  // non-numeric version
            "libfoo.sox.1", // unknown suffix despite version
            "libfoo.SO",    // suffix must be lowercase
            "libfoo.",      // empty suffix
            "libfoo",       // no suffix at all
            "libfooXso",    // dot is literal
            "foo.so",       // missing prefix
            "libfoo.so1",   // version must follow a dot
        ] {
            assert!(!pattern.matches(name), "should not match: {name}");
        }
    }

    #[test]
    fn test_basename_is_literal() {
        // Characters in the basename carry no pattern meaning
        let pattern = LibraryPattern::new("lib", "a+b");
        assert!(pattern.matches("liba+b.so"));
        assert!(!pattern.matches("libaab.so"));
    }

    #[test]
    fn test_suffix_reported_before_known_check() {
        let pattern = LibraryPattern::new("", "botan-3");
        assert_eq!(pattern.suffix("botan-3.lib"), Some("lib"));
        assert_eq!(pattern.suffix("botan-3.dll"), Some("dll"));
        assert_eq!(pattern.suffix("botan-3.dll.manifest"), None);
        assert!(!pattern.matches("botan-3.lib"));
    }

    proptest! {
        #[test]
        fn test_known_suffix_with_version_matches(
            prefix in "(lib)?",
            name in "[a-z][a-z0-9_-]{0,12}",
            suffix_idx in 0usize..KNOWN_LIBRARY_SUFFIXES.len(),
            version in prop::option::of("[0-9]{1,3}(\\.[0-9]{1,3}){0,3}"),
        ) {
            let suffix = KNOWN_LIBRARY_SUFFIXES[suffix_idx];
            let filename = match &version {
                Some(version) => format!("{prefix}{name}.{suffix}.{version}"),
                None => format!("{prefix}{name}.{suffix}"),
            };

            let pattern = LibraryPattern::new(&prefix, &name);
            prop_assert!(pattern.matches(&filename));
        }

        #[test]
        fn test_extended_name_never_matches(
            name in "[a-z]{1,8}",
            extra in "[a-z0-9]{1,4}",
            suffix_idx in 0usize..KNOWN_LIBRARY_SUFFIXES.len(),
        ) {
            let suffix = KNOWN_LIBRARY_SUFFIXES[suffix_idx];
            let pattern = LibraryPattern::new("lib", &name);
            let filename = format!("lib{name}{extra}.{suffix}");
            prop_assert!(!pattern.matches(&filename));
        }
    }
}
