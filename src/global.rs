//! Process-wide default separators
//!
//! The free functions in this module act on one [`PathUtils`] shared by the
//! whole process. Call [`init`] before first use to pick the separators;
//! otherwise the first call resolves them from the `PATH_NESTING_*`
//! environment variables on top of [`Separators::default`]. Each variable is
//! applied on its own, so an invalid one is logged and skipped without
//! discarding the others. Once resolved the configuration never changes.
//!
//! ```
//! use path_nesting::{global, Limit};
//!
//! let parts = global::parse_path("src/lib.rs", Limit::Unbounded);
//! assert_eq!(global::array_to_path(&parts), global::normalize_path("src/lib.rs"));
//! ```

use crate::config::Separators;
use crate::error::{ConfigError, Result};
use crate::normalize::PathUtils;
use crate::split::Limit;
use std::sync::OnceLock;

static GLOBAL: OnceLock<PathUtils> = OnceLock::new();

/// Install the process-wide separators
///
/// # Errors
/// Returns [`ConfigError::AlreadyInitialized`] if the configuration was already
/// installed or resolved by an earlier call.
pub fn init(separators: Separators) -> Result<()> {
    GLOBAL
        .set(PathUtils::new(separators))
        .map_err(|_| {
            log::warn!("process-wide separators already initialized, ignoring {separators:?}");
            ConfigError::AlreadyInitialized
        })?;
    log::debug!("process-wide separators initialized: {separators:?}");
    Ok(())
}

/// The process-wide instance, resolving it on first use
pub fn utils() -> &'static PathUtils {
    GLOBAL.get_or_init(|| {
        let separators = Separators::from_env_lenient();
        log::debug!("process-wide separators resolved: {separators:?}");
        PathUtils::new(separators)
    })
}

/// The process-wide separators
pub fn separators() -> Separators {
    *utils().separators()
}

/// See [`PathUtils::normalize_path`]
pub fn normalize_path(path: &str) -> String {
    utils().normalize_path(path)
}

/// See [`PathUtils::normalize_path_plus`]
pub fn normalize_path_plus(path: &str) -> String {
    utils().normalize_path_plus(path)
}

/// See [`PathUtils::path_to_nesting`]
pub fn path_to_nesting(path: &str, ns: Option<char>) -> String {
    utils().path_to_nesting(path, ns)
}

/// See [`PathUtils::nesting_to_path`]
pub fn nesting_to_path(nesting: &str, ns: Option<char>) -> String {
    utils().nesting_to_path(nesting, ns)
}

/// See [`PathUtils::parse_path`]
pub fn parse_path(path: impl AsRef<str>, limit: impl Into<Limit>) -> Vec<String> {
    utils().parse_path(path, limit)
}

/// See [`PathUtils::parse_nesting`]
pub fn parse_nesting(
    nesting: impl AsRef<str>,
    ns: Option<char>,
    limit: impl Into<Limit>,
) -> Vec<String> {
    utils().parse_nesting(nesting, ns, limit)
}

/// See [`PathUtils::array_to_path`]
pub fn array_to_path<S: AsRef<str>>(segments: &[S]) -> String {
    utils().array_to_path(segments)
}

/// See [`PathUtils::array_to_nesting`]
pub fn array_to_nesting<S: AsRef<str>>(segments: &[S], ns: Option<char>) -> String {
    utils().array_to_nesting(segments, ns)
}
