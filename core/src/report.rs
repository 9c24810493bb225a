use precond_types::{CheckResult, Violation};

/// Single exit point for failed checks.
pub(crate) fn reject(violation: Violation) -> CheckResult {
    tracing::debug!(
        kind = %violation.kind(),
        argument = violation.argument().unwrap_or_default(),
        "precondition failed: {violation}"
    );
    Err(violation)
}
