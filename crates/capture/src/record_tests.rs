#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;

fn sample_record(outcome: RecordedOutcome) -> RunRecord {
    RunRecord {
        seq: 0,
        run_id: Uuid::new_v4(),
        timestamp: SystemTime::UNIX_EPOCH,
        elapsed: Duration::from_millis(1234),
        drill: "hello".to_string(),
        script: "hello.py".to_string(),
        outcome,
    }
}

#[test]
fn test_outcome_predicates() {
    assert!(RecordedOutcome::Pass.is_pass());
    assert!(!RecordedOutcome::Pass.is_fail());

    let fail = RecordedOutcome::Fail {
        reason: "mismatch".to_string(),
    };
    assert!(fail.is_fail());
    assert!(!fail.is_skip());

    let skip = RecordedOutcome::Skip {
        reason: "script not found".to_string(),
    };
    assert!(skip.is_skip());
    assert!(!skip.is_pass());
}

#[test]
fn test_record_json_round_trip() {
    let record = sample_record(RecordedOutcome::Fail {
        reason: "expected 1, got 2".to_string(),
    });

    let json = serde_json::to_string(&record).unwrap();
    let back: RunRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back.seq, record.seq);
    assert_eq!(back.run_id, record.run_id);
    assert_eq!(back.drill, "hello");
    assert_eq!(back.script, "hello.py");
    assert_eq!(back.elapsed, Duration::from_millis(1234));
    assert_eq!(back.outcome, record.outcome);
}

#[rstest]
#[case(RecordedOutcome::Pass, "pass")]
#[case(RecordedOutcome::Fail { reason: "mismatch".to_string() }, "fail")]
#[case(RecordedOutcome::Skip { reason: "missing".to_string() }, "skip")]
fn test_outcome_serialization_tags(#[case] outcome: RecordedOutcome, #[case] tag: &str) {
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["type"], tag);
}

#[test]
fn test_elapsed_serializes_as_millis() {
    let record = sample_record(RecordedOutcome::Pass);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["elapsed"], 1234);
}

mod duration_props {
    use crate::duration_serde;
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "duration_serde")]
        d: Duration,
    }

    proptest! {
        #[test]
        fn round_trips_whole_milliseconds(ms in 0u64..=86_400_000) {
            let json = serde_json::to_string(&Wrapper { d: Duration::from_millis(ms) }).unwrap();
            let back: Wrapper = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back.d, Duration::from_millis(ms));
        }
    }
}
