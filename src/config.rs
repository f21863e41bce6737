//! Separator configuration
//!
//! A [`Separators`] value carries the three characters every operation in this
//! crate is driven by. It is validated once when built, so the string
//! operations never have to check it again.

use crate::error::{ConfigError, Result};
use std::env;

/// Environment variable overriding the directory separator
pub const ENV_DIRECTORY: &str = "PATH_NESTING_DS";
/// Environment variable overriding the back-navigation shorthand
pub const ENV_BACK_NAVIGATION: &str = "PATH_NESTING_BNS";
/// Environment variable overriding the nesting separator
pub const ENV_NESTING: &str = "PATH_NESTING_NS";

/// POSIX directory separator
pub const POSIX_SEPARATOR: char = '/';
/// Windows directory separator
pub const WINDOWS_SEPARATOR: char = '\\';
/// Default back-navigation shorthand
pub const DEFAULT_BACK_NAVIGATION: char = '<';
/// Default nesting separator
pub const DEFAULT_NESTING: char = '>';

/// Validated set of separators
///
/// - `directory` (`DS`): `/` or `\`, defaults to the host's native separator
/// - `back_navigation` (`BNS`): expands to `..` followed by `DS`
/// - `nesting` (`NS`): joins segments in nesting notation
///
/// # Examples
/// ```
/// use path_nesting::Separators;
///
/// let seps = Separators::new('/', '^', '.').unwrap();
/// assert_eq!(seps.nesting(), '.');
///
/// // Directory separator must be a real one
/// assert!(Separators::new('|', '<', '>').is_err());
/// // Roles must not share a character
/// assert!(Separators::new('/', '>', '>').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSeparators", into = "RawSeparators")
)]
pub struct Separators {
    directory: char,
    back_navigation: char,
    nesting: char,
}

impl Separators {
    /// Build a validated configuration
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the directory separator is not `/` or `\`,
    /// when two roles share a character, or when a character is reserved for
    /// the role it was given.
    pub fn new(directory: char, back_navigation: char, nesting: char) -> Result<Self> {
        let separators = Self {
            directory,
            back_navigation,
            nesting,
        };
        separators.validate()?;
        Ok(separators)
    }

    /// Host-native directory separator with default shorthand and nesting
    pub fn native() -> Self {
        Self {
            directory: std::path::MAIN_SEPARATOR,
            back_navigation: DEFAULT_BACK_NAVIGATION,
            nesting: DEFAULT_NESTING,
        }
    }

    /// `/` directory separator with default shorthand and nesting
    pub fn posix() -> Self {
        Self {
            directory: POSIX_SEPARATOR,
            ..Self::native()
        }
    }

    /// `\` directory separator with default shorthand and nesting
    pub fn windows() -> Self {
        Self {
            directory: WINDOWS_SEPARATOR,
            ..Self::native()
        }
    }

    /// Replace the directory separator
    pub fn with_directory(self, directory: char) -> Result<Self> {
        Self::new(directory, self.back_navigation, self.nesting)
    }

    /// Replace the back-navigation shorthand
    pub fn with_back_navigation(self, back_navigation: char) -> Result<Self> {
        Self::new(self.directory, back_navigation, self.nesting)
    }

    /// Replace the nesting separator
    pub fn with_nesting(self, nesting: char) -> Result<Self> {
        Self::new(self.directory, self.back_navigation, nesting)
    }

    /// Directory separator (`DS`)
    pub fn directory(&self) -> char {
        self.directory
    }

    /// Back-navigation shorthand (`BNS`)
    pub fn back_navigation(&self) -> char {
        self.back_navigation
    }

    /// Nesting separator (`NS`)
    pub fn nesting(&self) -> char {
        self.nesting
    }

    /// The directory separator that is rewritten by normalization
    pub fn foreign_directory(&self) -> char {
        if self.directory == POSIX_SEPARATOR {
            WINDOWS_SEPARATOR
        } else {
            POSIX_SEPARATOR
        }
    }

    /// Apply `PATH_NESTING_*` environment overrides on top of the defaults
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when a variable is not exactly one
    /// character, or any validation error of [`Separators::new`].
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// # Examples
    /// ```
    /// use path_nesting::Separators;
    ///
    /// let seps = Separators::posix()
    ///     .with_overrides(|name| (name == "PATH_NESTING_NS").then(|| ".".to_string()))
    ///     .unwrap();
    /// assert_eq!(seps.nesting(), '.');
    /// assert_eq!(seps.back_navigation(), '<');
    /// ```
    pub fn with_overrides<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let directory = override_char(&lookup, ENV_DIRECTORY)?.unwrap_or(self.directory);
        let back_navigation =
            override_char(&lookup, ENV_BACK_NAVIGATION)?.unwrap_or(self.back_navigation);
        let nesting = override_char(&lookup, ENV_NESTING)?.unwrap_or(self.nesting);

        let resolved = Self::new(directory, back_navigation, nesting)?;
        resolved.log_resolved();
        Ok(resolved)
    }

    /// Apply `PATH_NESTING_*` environment overrides one variable at a time
    ///
    /// Unlike [`Separators::from_env`], an invalid variable is logged and
    /// skipped while the valid ones still apply.
    pub fn from_env_lenient() -> Self {
        Self::default().with_lenient_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides one variable at a time, skipping the ones that fail
    ///
    /// Variables are applied in the order DS, BNS, NS; each is validated
    /// against the configuration built so far.
    ///
    /// # Examples
    /// ```
    /// use path_nesting::Separators;
    ///
    /// let seps = Separators::posix().with_lenient_overrides(|name| match name {
    ///     "PATH_NESTING_BNS" => Some("ab".to_string()),
    ///     "PATH_NESTING_NS" => Some(".".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(seps.back_navigation(), '<');
    /// assert_eq!(seps.nesting(), '.');
    /// ```
    pub fn with_lenient_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let steps: [(&str, fn(Self, char) -> Result<Self>); 3] = [
            (ENV_DIRECTORY, Self::with_directory),
            (ENV_BACK_NAVIGATION, Self::with_back_navigation),
            (ENV_NESTING, Self::with_nesting),
        ];

        let resolved = steps
            .into_iter()
            .fold(self, |current, (variable, apply)| {
                match override_char(&lookup, variable)
                    .and_then(|c| c.map_or(Ok(current), |c| apply(current, c)))
                {
                    Ok(next) => next,
                    Err(err) => {
                        log::warn!("ignoring {variable}: {err}");
                        current
                    }
                }
            });
        resolved.log_resolved();
        resolved
    }

    fn log_resolved(&self) {
        log::debug!(
            "separators resolved: DS={:?} BNS={:?} NS={:?}",
            self.directory,
            self.back_navigation,
            self.nesting
        );
    }

    fn validate(&self) -> Result<()> {
        if self.directory != POSIX_SEPARATOR && self.directory != WINDOWS_SEPARATOR {
            return Err(ConfigError::InvalidDirectorySeparator {
                separator: self.directory,
            });
        }

        for (role, separator) in [
            ("back-navigation shorthand", self.back_navigation),
            ("nesting separator", self.nesting),
        ] {
            // Either directory separator would be rewritten by normalization
            if separator == POSIX_SEPARATOR
                || separator == WINDOWS_SEPARATOR
                || separator.is_control()
                || separator.is_whitespace()
            {
                return Err(ConfigError::ReservedSeparator { role, separator });
            }
        }

        // Expansion inserts "..", so a '.' shorthand would match its own output
        if self.back_navigation == '.' {
            return Err(ConfigError::ReservedSeparator {
                role: "back-navigation shorthand",
                separator: '.',
            });
        }

        if self.back_navigation == self.nesting {
            return Err(ConfigError::ConflictingSeparators {
                first: "back-navigation shorthand",
                second: "nesting separator",
                separator: self.nesting,
            });
        }

        Ok(())
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::native()
    }
}

fn override_char<F>(lookup: &F, variable: &str) -> Result<Option<char>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(variable) else {
        return Ok(None);
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => {
            log::warn!("rejecting {variable}={value:?}: not a single character");
            Err(ConfigError::InvalidValue {
                variable: variable.to_string(),
                value,
            })
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSeparators {
    directory: char,
    back_navigation: char,
    nesting: char,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSeparators> for Separators {
    type Error = ConfigError;

    fn try_from(raw: RawSeparators) -> Result<Self> {
        Self::new(raw.directory, raw.back_navigation, raw.nesting)
    }
}

#[cfg(feature = "serde")]
impl From<Separators> for RawSeparators {
    fn from(seps: Separators) -> Self {
        Self {
            directory: seps.directory,
            back_navigation: seps.back_navigation,
            nesting: seps.nesting,
        }
    }
}
