//! Validation and formatting applied to whole API payloads.

use hwbot_common::test_utils::{
    approved_payload, empty_payload, homework, payload_with, APPROVED_VERDICT,
    REJECTED_VERDICT, REVIEWING_VERDICT,
};
use hwbot_common::{ErrorKind, PollError};
use hwbot_practicum::{check_response, parse_status, HomeworkStatus};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_approved_scenario() {
    let payload = approved_payload();
    let homeworks = check_response(&payload).unwrap();
    let message = parse_status(&homeworks[0]).unwrap();
    assert_eq!(
        message,
        "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn test_each_known_status_round_trip() {
    let payload = payload_with(vec![
        homework("approved", "hw_a"),
        homework("reviewing", "hw_b"),
        homework("rejected", "hw_c"),
    ]);

    let verdicts: Vec<String> = check_response(&payload)
        .unwrap()
        .iter()
        .map(|record| parse_status(record).unwrap())
        .collect();

    assert_eq!(
        verdicts,
        vec![
            format!("Изменился статус проверки работы \"hw_a\". {APPROVED_VERDICT}"),
            format!("Изменился статус проверки работы \"hw_b\". {REVIEWING_VERDICT}"),
            format!("Изменился статус проверки работы \"hw_c\". {REJECTED_VERDICT}"),
        ]
    );
}

#[test]
fn test_verdict_table_matches_fixtures() {
    assert_eq!(HomeworkStatus::Approved.verdict(), APPROVED_VERDICT);
    assert_eq!(HomeworkStatus::Reviewing.verdict(), REVIEWING_VERDICT);
    assert_eq!(HomeworkStatus::Rejected.verdict(), REJECTED_VERDICT);
}

#[test]
fn test_empty_object_is_missing_key() {
    assert!(matches!(
        check_response(&json!({})),
        Err(PollError::MissingKey { .. })
    ));
}

#[test]
fn test_empty_homeworks_is_empty_result() {
    assert!(matches!(
        check_response(&empty_payload()),
        Err(PollError::EmptyResult)
    ));
}

#[test]
fn test_record_with_unknown_status_passes_validation_but_not_formatting() {
    let payload = payload_with(vec![homework("unknown", "hw1")]);
    let homeworks = check_response(&payload).unwrap();
    assert_eq!(
        parse_status(&homeworks[0]).unwrap_err().kind(),
        ErrorKind::InvalidStatus
    );
}

#[test]
fn test_malformed_trailing_record_does_not_block_the_first() {
    let payload = payload_with(vec![homework("approved", "hw1"), json!(42)]);
    let homeworks = check_response(&payload).unwrap();
    assert_eq!(homeworks.len(), 2);
    assert_eq!(
        parse_status(&homeworks[0]).unwrap(),
        format!("Изменился статус проверки работы \"hw1\". {APPROVED_VERDICT}")
    );
}

#[test]
fn test_unexpected_informational_field_types_are_tolerated() {
    let mut record = homework("reviewing", "hw1");
    record["id"] = json!("abc");
    record["date_updated"] = json!(1_700_000_000);
    let payload = payload_with(vec![record]);
    let homeworks = check_response(&payload).unwrap();
    assert!(parse_status(&homeworks[0])
        .unwrap()
        .ends_with(REVIEWING_VERDICT));
}

#[test]
fn test_numeric_status_is_invalid_status() {
    let payload = payload_with(vec![json!({"status": 5, "homework_name": "hw1"})]);
    let homeworks = check_response(&payload).unwrap();
    assert_eq!(
        parse_status(&homeworks[0]).unwrap_err().kind(),
        ErrorKind::InvalidStatus
    );
}

fn record_strategy() -> impl Strategy<Value = (String, String)> {
    (
        prop_oneof![
            Just("approved".to_string()),
            Just("reviewing".to_string()),
            Just("rejected".to_string()),
            "[a-z]{1,10}",
        ],
        "[a-zA-Z0-9_.]{1,24}",
    )
}

proptest! {
    #[test]
    fn test_property_records_returned_in_order(records in prop::collection::vec(record_strategy(), 1..8)) {
        let payload = payload_with(
            records.iter().map(|(status, name)| homework(status, name)).collect(),
        );

        let expected: Vec<_> = records.iter().map(|(status, name)| homework(status, name)).collect();
        prop_assert_eq!(check_response(&payload).unwrap(), &expected[..]);
    }

    #[test]
    fn test_property_missing_key_never_yields_data(
        drop_homeworks in any::<bool>(),
        drop_current_date in any::<bool>(),
    ) {
        prop_assume!(drop_homeworks || drop_current_date);
        let mut payload = approved_payload();
        let object = payload.as_object_mut().unwrap();
        if drop_homeworks {
            object.remove("homeworks");
        }
        if drop_current_date {
            object.remove("current_date");
        }

        let result = check_response(&payload);
        let is_missing_key = matches!(result, Err(PollError::MissingKey { .. }));
        prop_assert!(is_missing_key);
    }

    #[test]
    fn test_property_formatting_is_deterministic((status, name) in record_strategy()) {
        let record = homework(&status, &name);
        let first = parse_status(&record);
        let second = parse_status(&record);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => {
                prop_assert_eq!(a.kind(), ErrorKind::InvalidStatus);
                prop_assert_eq!(b.kind(), ErrorKind::InvalidStatus);
            }
            _ => prop_assert!(false, "non-deterministic result for {}", status),
        }
    }
}
