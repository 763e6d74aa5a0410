//! Argument guard tests

use ferrule::GuardError;
use ferrule::guard::{
    defined, ensure, in_range, in_range_by, not_empty_slice, not_nil_uuid, not_null,
    not_null_or_whitespace,
};
use ferrule_testkit::random;
use uuid::Uuid;

use crate::common::{Status, init_tracing};

#[test]
fn whitespace_guard_passes_value_through() {
    init_tracing();
    assert_eq!(not_null_or_whitespace(Some("ok"), "p").unwrap(), "ok");

    let err = not_null_or_whitespace(Some("   "), "p").unwrap_err();
    assert_eq!(err, GuardError::Whitespace { param: "p" });
    assert_eq!(err.to_string(), "parameter 'p' must not be empty or whitespace");
}

#[test]
fn whitespace_guard_rejects_generated_blanks() {
    for len in 0..16 {
        let blank = random::whitespace_string(len);
        assert!(
            not_null_or_whitespace(Some(blank.as_str()), "name").is_err(),
            "accepted {blank:?}"
        );
    }
}

#[test]
fn missing_values_report_the_parameter() {
    let err = not_null::<u8>(None, "payload").unwrap_err();
    assert_eq!(err.param(), "payload");

    let err = not_null_or_whitespace(None::<&str>, "title").unwrap_err();
    assert_eq!(err, GuardError::Null { param: "title" });
}

#[test]
fn guards_compose_with_question_mark() {
    fn open(id: Uuid, tags: &[&str], retries: u8) -> Result<String, GuardError> {
        let id = not_nil_uuid(id, "id")?;
        let tags = not_empty_slice(tags, "tags")?;
        let retries = in_range(retries, 0, 5, "retries")?;
        Ok(format!("{id}:{}:{retries}", tags.len()))
    }

    let id = Uuid::new_v4();
    assert_eq!(open(id, &["a", "b"], 3).unwrap(), format!("{id}:2:3"));
    assert_eq!(open(Uuid::nil(), &["a"], 0).unwrap_err().param(), "id");
    assert_eq!(open(id, &[], 0).unwrap_err().param(), "tags");
    assert_eq!(open(id, &["a"], 6).unwrap_err().param(), "retries");
}

#[test]
fn range_bounds_are_inclusive() {
    for value in random::ints_in(64, -100..=100) {
        let result = in_range(value, -50, 50, "value");
        assert_eq!(result.is_ok(), (-50..=50).contains(&value), "value {value}");
    }
    assert!(in_range(-50, -50, 50, "value").is_ok());
    assert!(in_range(50, -50, 50, "value").is_ok());
}

#[test]
fn range_by_uses_the_supplied_ordering() {
    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    assert_eq!(in_range_by("abc", "a", "abcd", "word", by_len).unwrap(), "abc");
    assert!(matches!(
        in_range_by("abcde", "a", "abcd", "word", by_len),
        Err(GuardError::OutOfRange { param: "word", .. })
    ));
}

#[test]
fn defined_enum_lists_accepted_names() {
    assert_eq!(defined::<Status>(2, "status").unwrap(), Status::Published);

    let err = defined::<Status>(3, "status").unwrap_err();
    assert!(matches!(err, GuardError::Undefined { raw: 3, kind: "Status", .. }));
    let message = err.to_string();
    assert!(message.contains("Draft"));
    assert!(message.contains("Archived"));
}

#[test]
fn ensure_reports_the_reason() {
    let err = ensure(7_u32, |n| n % 2 == 0, "batch", "must be even").unwrap_err();
    assert_eq!(err.to_string(), "parameter 'batch' is invalid: must be even");
    assert_eq!(ensure(8_u32, |n| n % 2 == 0, "batch", "must be even").unwrap(), 8);
}
