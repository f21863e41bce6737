//! # path-nesting
//!
//! Cross-platform separator normalization and path/nesting notation conversion.
//!
//! Path-handling code should never hard-code `/` or `\`. This crate rewrites
//! path strings to a single directory separator and converts them to and from
//! a flat "nesting" notation (`app>http>kernel` or `app.http.kernel`) suitable
//! for namespace-like identifiers derived from file locations.
//!
//! ## Features
//!
//! - **Separator Normalization**: Foreign separators rewritten to the configured one
//! - **Back-Navigation Shorthand**: `<` (or `^`) expands to `../`
//! - **Nesting Conversion**: Paths to and from nesting notation
//! - **Segment Arrays**: Split with limits, join back losslessly
//! - **Explicit Configuration**: Separators are a validated value, not hidden globals
//!
//! All operations are pure string rewrites. Nothing touches the filesystem,
//! collapses repeated separators or resolves `..`.
//!
//! ## Examples
//!
//! ### Normalizing Paths
//!
//! ```rust
//! use path_nesting::{PathUtils, Separators};
//!
//! let posix = PathUtils::new(Separators::posix());
//! assert_eq!(posix.normalize_path("path\\to\\file.php"), "path/to/file.php");
//! assert_eq!(posix.normalize_path_plus("<path\\to\\file.php"), "../path/to/file.php");
//!
//! let windows = PathUtils::new(Separators::windows());
//! assert_eq!(windows.normalize_path("path/to/file.php"), "path\\to\\file.php");
//! ```
//!
//! ### Nesting Notation
//!
//! ```rust
//! use path_nesting::{Limit, PathUtils, Separators};
//!
//! let utils = PathUtils::new(Separators::posix());
//! assert_eq!(utils.path_to_nesting("path/to/file.php", None), "path>to>file.php");
//! assert_eq!(utils.nesting_to_path("path>to>file.php", None), "path/to/file.php");
//!
//! let segments = utils.parse_path("path/to/file.php", Limit::Unbounded);
//! assert_eq!(segments, ["path", "to", "file.php"]);
//! assert_eq!(utils.array_to_nesting(&segments, Some('.')), "path.to.file.php");
//! ```
//!
//! ### Configuration
//!
//! ```rust
//! use path_nesting::{ConfigError, Separators};
//!
//! let seps = Separators::posix().with_nesting('.').unwrap();
//! assert_eq!(seps.nesting(), '.');
//!
//! // Shorthand and nesting separator must differ
//! assert!(matches!(
//!     Separators::new('/', '^', '^'),
//!     Err(ConfigError::ConflictingSeparators { .. })
//! ));
//! ```

mod config;
mod error;
pub mod global;
mod normalize;
mod split;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use config::{
    Separators, DEFAULT_BACK_NAVIGATION, DEFAULT_NESTING, ENV_BACK_NAVIGATION, ENV_DIRECTORY,
    ENV_NESTING, POSIX_SEPARATOR, WINDOWS_SEPARATOR,
};
pub use error::{ConfigError, Result};
pub use normalize::PathUtils;
pub use split::Limit;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
