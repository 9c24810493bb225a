//! Format checks: regular expressions and date/time round-trips.
//!
//! Both checks depend on tunables, gathered in [`FormatRules`]. The free functions
//! use the built-in defaults; build a `FormatRules` from [`PrecondConfig`] to
//! honor the user's configuration.

use std::fmt::Write;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use precond_config::PrecondConfig;
use precond_types::{CheckResult, Violation};
use regex::RegexBuilder;

use crate::report::reject;

/// Upper bound, in bytes, on a compiled pattern (1 MiB).
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Renders every field of a `NaiveDateTime`, fractional seconds included.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

static DEFAULT_RULES: LazyLock<FormatRules> = LazyLock::new(FormatRules::default);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRules {
    regex_size_limit: usize,
    datetime_format: String,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl FormatRules {
    pub fn new(regex_size_limit: usize, datetime_format: impl Into<String>) -> Self {
        Self {
            regex_size_limit,
            datetime_format: datetime_format.into(),
        }
    }

    /// Applies config overrides on top of the defaults.
    #[must_use]
    pub fn from_config(config: &PrecondConfig) -> Self {
        let defaults = Self::default();
        Self {
            regex_size_limit: config
                .regex_size_limit()
                .unwrap_or(defaults.regex_size_limit),
            datetime_format: config
                .datetime_format()
                .map_or(defaults.datetime_format, ToString::to_string),
        }
    }

    /// Rules from the user config file, or the defaults when there is none.
    #[must_use]
    pub fn load() -> Self {
        PrecondConfig::load()
            .map(|config| Self::from_config(&config))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn regex_size_limit(&self) -> usize {
        self.regex_size_limit
    }

    #[must_use]
    pub fn datetime_format(&self) -> &str {
        &self.datetime_format
    }

    /// Fails with `InvalidFormat` when `pattern` finds no match anywhere in `value`.
    ///
    /// Anchor the pattern (`^...$`) to require a whole-string match. A pattern
    /// that does not compile fails with `InvalidArgument`.
    pub fn match_regex(&self, value: &str, pattern: &str, name: &str) -> CheckResult {
        let regex = match RegexBuilder::new(pattern)
            .size_limit(self.regex_size_limit)
            .build()
        {
            Ok(regex) => regex,
            Err(err) => {
                tracing::debug!(pattern, "pattern did not compile: {err}");
                return reject(Violation::invalid_argument(
                    name,
                    format!("{name} has an invalid regular expression: {pattern}"),
                ));
            }
        };

        if !regex.is_match(value) {
            return reject(Violation::invalid_format(
                name,
                format!("{name} should match the following regular expression: {pattern}"),
            ));
        }
        Ok(())
    }

    /// Fails with `InvalidArgument` when `value`, rendered with the configured
    /// format, does not parse back into a date/time.
    pub fn date_time_is_valid(&self, value: &NaiveDateTime, name: &str) -> CheckResult {
        let mut rendered = String::new();
        let round_trips = write!(rendered, "{}", value.format(&self.datetime_format)).is_ok()
            && NaiveDateTime::parse_from_str(&rendered, &self.datetime_format).is_ok();
        if !round_trips {
            return reject(Violation::invalid_argument(
                name,
                format!("{name} is not a valid date/time"),
            ));
        }
        Ok(())
    }
}

/// [`FormatRules::match_regex`] with default rules.
pub fn match_regex(value: &str, pattern: &str, name: &str) -> CheckResult {
    DEFAULT_RULES.match_regex(value, pattern, name)
}

/// [`FormatRules::date_time_is_valid`] with default rules.
pub fn date_time_is_valid(value: &NaiveDateTime, name: &str) -> CheckResult {
    DEFAULT_RULES.date_time_is_valid(value, name)
}
