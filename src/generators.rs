//! Property test generators for path and nesting strings
//!
//! Generators cover well-formed paths as well as the degenerate inputs the
//! operations must still accept: empty strings, separator-only strings and
//! doubled or mixed separators.

use proptest::prelude::*;

/// Generators for path and nesting testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate a single segment free of any separator character
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-]{0,12}"
    }

    /// Generate file extensions commonly found next to namespaced sources
    pub fn file_extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("php".to_string()),
            Just("rs".to_string()),
            Just("js".to_string()),
            Just("json".to_string()),
            Just("".to_string()),
        ]
    }

    /// Generate a filename with an optional extension
    pub fn filename() -> impl Strategy<Value = String> {
        (Self::segment(), Self::file_extension()).prop_map(|(name, ext)| {
            if ext.is_empty() {
                name
            } else {
                format!("{}.{}", name, ext)
            }
        })
    }

    /// Generate relative paths using `/` only
    pub fn posix_path() -> impl Strategy<Value = String> {
        (prop::collection::vec(Self::segment(), 0..=4), Self::filename()).prop_map(
            |(mut parts, filename)| {
                parts.push(filename);
                parts.join("/")
            },
        )
    }

    /// Generate relative paths using `\` only
    pub fn windows_path() -> impl Strategy<Value = String> {
        Self::posix_path().prop_map(|path| path.replace('/', "\\"))
    }

    /// Generate paths with doubled separators
    pub fn path_with_double_separators() -> impl Strategy<Value = String> {
        Self::posix_path().prop_map(|path| path.replace('/', "//"))
    }

    /// Generate paths with mixed separators
    pub fn path_with_mixed_separators() -> impl Strategy<Value = String> {
        prop::collection::vec((Self::segment(), any::<bool>()), 1..=5).prop_map(|parts| {
            let mut result = String::new();
            for (segment, backslash) in parts {
                result.push_str(&segment);
                result.push(if backslash { '\\' } else { '/' });
            }
            result.pop();
            result
        })
    }

    /// Generate paths carrying the default back-navigation shorthand
    pub fn path_with_back_navigation() -> impl Strategy<Value = String> {
        (0usize..=3, Self::path_with_mixed_separators())
            .prop_map(|(depth, path)| format!("{}{}", "<".repeat(depth), path))
    }

    /// Generate edge case paths that test boundary conditions
    pub fn edge_case_path() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("".to_string()),
            Just("/".to_string()),
            Just("\\".to_string()),
            Just("//".to_string()),
            Just("\\/\\".to_string()),
            Just("/leading".to_string()),
            Just("trailing\\".to_string()),
            Just("a/./b/../c".to_string()),
            Just("файл\\文件.txt".to_string()),
            Just("file with spaces.txt".to_string()),
        ]
    }

    /// Generate nesting strings joined by `ns`, without directory separators
    pub fn nesting_string(ns: char) -> impl Strategy<Value = String> {
        prop::collection::vec(Self::segment(), 1..=5)
            .prop_map(move |parts| parts.join(ns.to_string().as_str()))
    }

    /// Generate all types of paths for comprehensive testing
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::posix_path(),
            2 => Self::windows_path(),
            2 => Self::path_with_double_separators(),
            2 => Self::path_with_mixed_separators(),
            1 => Self::path_with_back_navigation(),
            1 => Self::edge_case_path(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn segments_contain_no_separators(segment in PathGenerators::segment()) {
            for c in ['/', '\\', '<', '^', '>', '.'] {
                prop_assert!(!segment.contains(c));
            }
        }

        #[test]
        fn nesting_strings_have_no_directory_separators(
            nesting in PathGenerators::nesting_string('>')
        ) {
            prop_assert!(!nesting.contains('/'));
            prop_assert!(!nesting.contains('\\'));
        }

        #[test]
        fn generators_dont_panic(_any_path in PathGenerators::any_path()) {}
    }
}
