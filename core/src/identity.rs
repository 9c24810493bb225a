//! Identifier and caller-identity checks.

use precond_types::{CheckResult, Identity, Violation};
use uuid::Uuid;

use crate::report::reject;

const UNAUTHORIZED_MESSAGE: &str =
    "The current user does not belong to a role that has access to this function.";

/// Fails with `InvalidArgument` when `guid` is the nil (all-zero) UUID.
pub fn not_empty_guid(guid: Uuid, name: &str) -> CheckResult {
    if guid.is_nil() {
        return reject(Violation::invalid_argument(
            name,
            format!("{name} should be non-empty GUID."),
        ));
    }
    Ok(())
}

/// Fails with `Unauthorized` when there is no caller, or the caller lacks
/// `required_role`.
///
/// The caller is passed in explicitly; nothing is read from thread or task state.
pub fn user_is_in_role<I: Identity + ?Sized>(user: Option<&I>, required_role: &str) -> CheckResult {
    if !user.is_some_and(|u| u.is_in_role(required_role)) {
        tracing::debug!(required_role, has_user = user.is_some(), "role check failed");
        return reject(Violation::unauthorized(UNAUTHORIZED_MESSAGE));
    }
    Ok(())
}
