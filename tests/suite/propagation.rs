//! Checks compose with `?` inside caller code

use precond_core::{
    CheckResult, Identity, Violation, ViolationKind, match_regex, not_empty_guid,
    not_null_or_empty, positive, user_is_in_role,
};
use uuid::Uuid;

use crate::common::{admin, guest, init_tracing};

/// A caller-side error type wrapping violations.
#[derive(Debug, thiserror::Error)]
enum BookingError {
    #[error(transparent)]
    Precondition(#[from] Violation),
}

fn book(
    user: Option<&dyn Identity>,
    venue: Uuid,
    email: Option<&str>,
    seats: i32,
) -> Result<u32, BookingError> {
    user_is_in_role(user, "booker")?;
    not_empty_guid(venue, "venue")?;
    not_null_or_empty(email, "email")?;
    match_regex(email.unwrap_or_default(), r"^[^@\s]+@[^@\s]+$", "email")?;
    positive(seats, "seats")?;
    Ok(seats.unsigned_abs())
}

fn first_violation(checks: &[CheckResult]) -> Option<&Violation> {
    checks.iter().find_map(|r| r.as_ref().err())
}

#[test]
fn all_checks_pass() {
    init_tracing();
    let user = admin().with_role("booker");
    let seats = book(Some(&user), Uuid::new_v4(), Some("ada@example.com"), 2).unwrap();
    assert_eq!(seats, 2);
}

#[test]
fn first_failing_check_wins() {
    let user = admin().with_role("booker");
    let BookingError::Precondition(err) =
        book(Some(&user), Uuid::nil(), None, 0).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::InvalidArgument);
    assert_eq!(err.argument(), Some("venue"));
}

#[test]
fn unauthorized_short_circuits() {
    let user = guest();
    let BookingError::Precondition(err) =
        book(Some(&user), Uuid::nil(), None, 0).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Unauthorized);
}

#[test]
fn format_failure_names_argument() {
    let user = admin().with_role("booker");
    let BookingError::Precondition(err) =
        book(Some(&user), Uuid::new_v4(), Some("not-an-email"), 1).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::InvalidFormat);
    assert_eq!(err.argument(), Some("email"));
}

#[test]
fn checks_are_independent() {
    let checks = [positive(3, "a"), positive(-3, "b"), positive(0, "c")];
    let first = first_violation(&checks).unwrap();
    assert_eq!(first.argument(), Some("b"));
    assert_eq!(checks.iter().filter(|r| r.is_err()).count(), 2);
}
