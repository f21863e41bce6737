//! Separator normalization and path/nesting conversion
//!
//! Every function here is a plain character substitution driven by a
//! [`Separators`] value. Nothing is collapsed, trimmed or resolved.

use crate::config::Separators;

/// Path and nesting operations bound to one separator configuration
///
/// # Examples
/// ```
/// use path_nesting::{PathUtils, Separators};
///
/// let utils = PathUtils::new(Separators::posix());
/// assert_eq!(utils.normalize_path("path\\to\\file.php"), "path/to/file.php");
/// assert_eq!(utils.normalize_path_plus("<path\\to\\file.php"), "../path/to/file.php");
/// assert_eq!(utils.path_to_nesting("path/to/file.php", None), "path>to>file.php");
/// assert_eq!(utils.nesting_to_path("app.http.kernel", Some('.')), "app/http/kernel");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathUtils {
    separators: Separators,
}

impl PathUtils {
    /// Bind operations to the given separators
    pub fn new(separators: Separators) -> Self {
        Self { separators }
    }

    /// Configuration these operations use
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Nesting separator for a call: the override if given, else `NS`
    pub(crate) fn nesting_or_default(&self, ns: Option<char>) -> char {
        ns.unwrap_or(self.separators.nesting())
    }

    /// Replace every foreign directory separator with `DS`
    ///
    /// Only the separator that does not belong to the configured platform is
    /// rewritten; repeated, leading and trailing separators are kept.
    ///
    /// # Examples
    /// ```
    /// use path_nesting::{PathUtils, Separators};
    ///
    /// let posix = PathUtils::new(Separators::posix());
    /// assert_eq!(posix.normalize_path("a\\b/c"), "a/b/c");
    /// assert_eq!(posix.normalize_path("//a\\\\b/"), "//a//b/");
    ///
    /// let windows = PathUtils::new(Separators::windows());
    /// assert_eq!(windows.normalize_path("a/b\\c"), "a\\b\\c");
    /// ```
    pub fn normalize_path(&self, path: &str) -> String {
        let mut buf = [0u8; 4];
        let ds = self.separators.directory().encode_utf8(&mut buf);
        path.replace(self.separators.foreign_directory(), ds)
    }

    /// [`normalize_path`](Self::normalize_path), then expand every `BNS` into
    /// `..` followed by `DS`
    ///
    /// # Examples
    /// ```
    /// use path_nesting::{PathUtils, Separators};
    ///
    /// let utils = PathUtils::new(Separators::posix());
    /// assert_eq!(utils.normalize_path_plus("<<lib\\mod.rs"), "../../lib/mod.rs");
    /// ```
    pub fn normalize_path_plus(&self, path: &str) -> String {
        let parent = format!("..{}", self.separators.directory());
        self.normalize_path(path)
            .replace(self.separators.back_navigation(), &parent)
    }

    /// Normalize a path, then turn every `DS` into the nesting separator
    pub fn path_to_nesting(&self, path: &str, ns: Option<char>) -> String {
        let mut buf = [0u8; 4];
        let ns = self.nesting_or_default(ns).encode_utf8(&mut buf);
        self.normalize_path(path)
            .replace(self.separators.directory(), ns)
    }

    /// Turn every nesting separator into `DS`
    ///
    /// The input is taken to be in nesting form already, so foreign directory
    /// separators are left alone. Consequently
    /// `path_to_nesting(nesting_to_path(n))` only returns `n` when `n` holds no
    /// directory separator of either kind.
    pub fn nesting_to_path(&self, nesting: &str, ns: Option<char>) -> String {
        let mut buf = [0u8; 4];
        let ds = self.separators.directory().encode_utf8(&mut buf);
        nesting.replace(self.nesting_or_default(ns), ds)
    }
}
