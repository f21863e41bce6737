//! Splitting into segments and joining segments back

use crate::normalize::PathUtils;

/// Cap on the number of segments a split returns
///
/// # Examples
/// ```
/// use path_nesting::{Limit, PathUtils, Separators};
///
/// let utils = PathUtils::new(Separators::posix());
/// assert_eq!(utils.parse_path("a/b/c/d", Limit::AtMost(2)), ["a", "b/c/d"]);
/// assert_eq!(utils.parse_path("a/b/c/d", Limit::DropLast(1)), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Limit {
    /// Split on every separator
    #[default]
    Unbounded,
    /// At most `n` segments, the remainder left unsplit in the last one.
    /// `AtMost(0)` behaves as `AtMost(1)`.
    AtMost(usize),
    /// Split on every separator, then drop the last `n` segments
    DropLast(usize),
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Limit::AtMost(n)
    }
}

impl From<Option<usize>> for Limit {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Limit::Unbounded, Limit::AtMost)
    }
}

fn explode(haystack: &str, separator: char, limit: Limit) -> Vec<String> {
    match limit {
        Limit::Unbounded => haystack.split(separator).map(String::from).collect(),
        Limit::AtMost(n) => haystack
            .splitn(n.max(1), separator)
            .map(String::from)
            .collect(),
        Limit::DropLast(n) => {
            let mut segments: Vec<String> =
                haystack.split(separator).map(String::from).collect();
            segments.truncate(segments.len().saturating_sub(n));
            segments
        }
    }
}

fn implode<S: AsRef<str>>(segments: &[S], separator: char) -> String {
    let mut buf = [0u8; 4];
    let separator: &str = separator.encode_utf8(&mut buf);
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(separator)
}

impl PathUtils {
    /// Normalize a path and split it on `DS`
    ///
    /// Empty segments from leading, trailing or doubled separators are kept,
    /// so [`array_to_path`](Self::array_to_path) rebuilds the normalized path.
    ///
    /// # Examples
    /// ```
    /// use path_nesting::{Limit, PathUtils, Separators};
    ///
    /// let utils = PathUtils::new(Separators::posix());
    /// assert_eq!(utils.parse_path("path\\to/file.php", Limit::Unbounded), ["path", "to", "file.php"]);
    /// assert_eq!(utils.parse_path("/a/", Limit::Unbounded), ["", "a", ""]);
    /// ```
    pub fn parse_path(&self, path: impl AsRef<str>, limit: impl Into<Limit>) -> Vec<String> {
        explode(
            &self.normalize_path(path.as_ref()),
            self.separators().directory(),
            limit.into(),
        )
    }

    /// Split a nesting string on `ns`, or `NS` when no override is given
    pub fn parse_nesting(
        &self,
        nesting: impl AsRef<str>,
        ns: Option<char>,
        limit: impl Into<Limit>,
    ) -> Vec<String> {
        explode(nesting.as_ref(), self.nesting_or_default(ns), limit.into())
    }

    /// Join segments with `DS`
    pub fn array_to_path<S: AsRef<str>>(&self, segments: &[S]) -> String {
        implode(segments, self.separators().directory())
    }

    /// Join segments with `ns`, or `NS` when no override is given
    ///
    /// # Examples
    /// ```
    /// use path_nesting::{PathUtils, Separators};
    ///
    /// let utils = PathUtils::new(Separators::posix());
    /// assert_eq!(utils.array_to_nesting(&["path", "to", "file.php"], Some('.')), "path.to.file.php");
    /// assert_eq!(utils.array_to_nesting(&["path", "to", "file.php"], None), "path>to>file.php");
    /// ```
    pub fn array_to_nesting<S: AsRef<str>>(&self, segments: &[S], ns: Option<char>) -> String {
        implode(segments, self.nesting_or_default(ns))
    }
}
