//! Presence checks: absent, present, empty.

use precond_types::{CheckResult, Violation};
use precond_utils::is_empty;

use crate::report::reject;

/// Fails with `InvalidArgument` when `argument` has a value.
pub fn is_null<T>(argument: Option<T>, name: &str) -> CheckResult {
    if argument.is_some() {
        return reject(Violation::invalid_argument(name, format!("{name} should be null")));
    }
    Ok(())
}

/// Fails with `MissingArgument` when an optional value is absent.
pub fn not_null_nullable<T>(argument: Option<T>, name: &str) -> CheckResult {
    if argument.is_none() {
        return reject(Violation::missing_argument(
            name,
            format!("{name} should have a value"),
        ));
    }
    Ok(())
}

/// Fails with `MissingArgument` when a reference is absent.
pub fn not_null<T: ?Sized>(argument: Option<&T>, name: &str) -> CheckResult {
    if argument.is_none() {
        return reject(Violation::missing_argument(name, format!("{name} cannot be null")));
    }
    Ok(())
}

/// Fails with `MissingArgument` when the string is absent or zero-length.
///
/// Whitespace counts as content.
pub fn not_null_or_empty(argument: Option<&str>, name: &str) -> CheckResult {
    if argument.is_none_or(str::is_empty) {
        return reject(missing_or_empty(name));
    }
    Ok(())
}

/// Fails with `MissingArgument` when the list is absent or has no elements.
pub fn not_null_or_empty_slice<T>(collection: Option<&[T]>, name: &str) -> CheckResult {
    if is_empty(collection) {
        return reject(missing_or_empty(name));
    }
    Ok(())
}

/// Fails with `MissingArgument` when the sequence is absent or yields nothing.
///
/// Pulls at most one element from the sequence.
pub fn not_null_or_empty_iter<I: IntoIterator>(collection: Option<I>, name: &str) -> CheckResult {
    let has_any = collection.is_some_and(|c| c.into_iter().next().is_some());
    if !has_any {
        return reject(missing_or_empty(name));
    }
    Ok(())
}

/// Fails with `MissingArgument` when the string is absent, empty, or shorter than
/// `minimum_length` characters.
pub fn minimum_length(argument: Option<&str>, minimum_length: usize, name: &str) -> CheckResult {
    let long_enough = argument
        .is_some_and(|s| !s.is_empty() && s.chars().count() >= minimum_length);
    if !long_enough {
        return reject(Violation::missing_argument(
            name,
            format!("{name} must be at least {minimum_length} characters long."),
        ));
    }
    Ok(())
}

fn missing_or_empty(name: &str) -> Violation {
    Violation::missing_argument(name, format!("{name} cannot be null or empty"))
}
