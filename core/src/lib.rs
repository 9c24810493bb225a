//! Design-by-Contract precondition checks.
//!
//! Call these at the top of a public function to validate its inputs. Each check
//! inspects one value and returns `Ok(())` or a [`Violation`] naming the argument
//! and the broken rule, so callers propagate with `?`:
//!
//! ```
//! use precond_core::{CheckResult, not_null_or_empty, positive};
//!
//! fn reserve(name: Option<&str>, seats: i32) -> CheckResult {
//!     not_null_or_empty(name, "name")?;
//!     positive(seats, "seats")?;
//!     Ok(())
//! }
//!
//! assert!(reserve(Some("ada"), 2).is_ok());
//! assert!(reserve(Some("ada"), 0).is_err());
//! ```
//!
//! Checks hold no state and never mutate their inputs. Every violation is also
//! emitted as a `tracing` debug event.

pub mod format;
mod identity;
pub mod numeric;
mod presence;
mod report;

pub use format::{
    DEFAULT_DATETIME_FORMAT, DEFAULT_REGEX_SIZE_LIMIT, FormatRules, date_time_is_valid, match_regex,
};
pub use identity::{not_empty_guid, user_is_in_role};
pub use numeric::{Integer, equal, greater_than_zero, less_than_max_value, nonnegative, positive};
pub use presence::{
    is_null, minimum_length, not_null, not_null_nullable, not_null_or_empty, not_null_or_empty_iter,
    not_null_or_empty_slice,
};

pub use precond_types::{CheckResult, Identity, Principal, Violation, ViolationKind};
pub use precond_utils::{OptionSliceExt, is_empty, null_safe};
