//! Violation message snapshots

use precond_core::{
    FormatRules, Violation, equal, greater_than_zero, is_null, less_than_max_value, match_regex,
    minimum_length, nonnegative, not_empty_guid, not_null, not_null_nullable, not_null_or_empty,
    not_null_or_empty_iter, not_null_or_empty_slice, positive, user_is_in_role,
};
use uuid::Uuid;

use crate::common::{guest, leap_day};

fn message(result: Result<(), Violation>) -> String {
    result.unwrap_err().to_string()
}

#[test]
fn presence_messages() {
    insta::assert_snapshot!(message(is_null(Some(3), "count")), @"count should be null");
    insta::assert_snapshot!(message(not_null_nullable(None::<u8>, "count")), @"count should have a value");
    insta::assert_snapshot!(message(not_null(None::<&str>, "owner")), @"owner cannot be null");
    insta::assert_snapshot!(message(not_null_or_empty(Some(""), "title")), @"title cannot be null or empty");
    insta::assert_snapshot!(message(not_null_or_empty_slice(None::<&[u8]>, "tags")), @"tags cannot be null or empty");
    insta::assert_snapshot!(message(not_null_or_empty_iter(Some(Vec::<u8>::new()), "rows")), @"rows cannot be null or empty");
    insta::assert_snapshot!(message(minimum_length(Some("ab"), 8, "password")), @"password must be at least 8 characters long.");
}

#[test]
fn numeric_messages() {
    insta::assert_snapshot!(message(positive(0, "seats")), @"seats should be positive.");
    insta::assert_snapshot!(message(greater_than_zero(0, "seats")), @"seats should be greater than zero.");
    insta::assert_snapshot!(message(less_than_max_value(i32::MAX, "offset")), @"offset is too large.");
    insta::assert_snapshot!(message(nonnegative(-4i64, "balance")), @"balance should be non negative.");
    insta::assert_snapshot!(message(equal(true, false, "enabled")), @"enabled expected value: true, actual value: false");
}

#[test]
fn format_and_identity_messages() {
    insta::assert_snapshot!(
        message(match_regex("123abc", "^[a-z]+$", "slug")),
        @"slug should match the following regular expression: ^[a-z]+$"
    );
    insta::assert_snapshot!(
        message(match_regex("x", "[", "slug")),
        @"slug has an invalid regular expression: ["
    );
    insta::assert_snapshot!(message(not_empty_guid(Uuid::nil(), "id")), @"id should be non-empty GUID.");
    insta::assert_snapshot!(
        message(user_is_in_role(Some(&guest()), "admin")),
        @"The current user does not belong to a role that has access to this function."
    );

    let date_only = FormatRules::new(1024, "%Y-%m-%d");
    insta::assert_snapshot!(
        message(date_only.date_time_is_valid(&leap_day(), "when")),
        @"when is not a valid date/time"
    );
}

#[test]
fn violation_serializes_for_callers() {
    let err = not_null_or_empty(None, "title").unwrap_err();
    insta::assert_snapshot!(
        serde_json::to_string(&err).unwrap(),
        @r#"{"kind":"missing_argument","argument":"title","message":"title cannot be null or empty"}"#
    );
}
