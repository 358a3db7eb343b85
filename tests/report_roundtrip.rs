use arena_harness::action::Observation;
use arena_harness::report::{TaskReport, write_task_report};
use serde_json::json;

#[test]
fn written_report_parses_back_identically() {
    let dir = tempfile::tempdir().unwrap();

    let report = TaskReport {
        task_id: "t1".into(),
        run_id: "run-42".into(),
        driver: "gemini-computer-use".into(),
        timestamp: "2026-01-01T00:00:00Z".into(),
        success: true,
        criteria: vec!["Logged in".into()],
        observations: vec![Observation {
            text: "User Logged In successfully".into(),
            extra: serde_json::Map::new(),
        }],
        evidence: json!({"screenshot": "s3://bucket/shot.png"}),
    };

    let path = write_task_report(dir.path(), &report).unwrap();
    assert_eq!(path.file_name().unwrap(), "t1_run-42.json");

    let raw = std::fs::read_to_string(&path).unwrap();
    let reread: TaskReport = serde_json::from_str(&raw).unwrap();

    assert_eq!(reread.success, report.success);
    assert_eq!(reread.criteria, report.criteria);
    assert_eq!(reread.observations.len(), 1);
    assert_eq!(reread.observations[0].text, report.observations[0].text);
    assert_eq!(reread.evidence, report.evidence);
}

#[test]
fn opaque_observation_fields_survive_the_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let observation: Observation =
        serde_json::from_value(json!({"text": "done", "page": 3, "kind": "dom"})).unwrap();
    let report = TaskReport {
        task_id: "t2".into(),
        run_id: "run-7".into(),
        driver: "gemini-computer-use".into(),
        timestamp: "2026-01-01T00:00:00Z".into(),
        success: false,
        criteria: vec![],
        observations: vec![observation],
        evidence: serde_json::Value::Null,
    };

    let path = write_task_report(dir.path(), &report).unwrap();
    let reread: TaskReport =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(reread.observations[0].extra["page"], json!(3));
    assert_eq!(reread.observations[0].extra["kind"], json!("dom"));
}

#[test]
fn same_identity_overwrites_silently() {
    let dir = tempfile::tempdir().unwrap();

    let mut report = TaskReport {
        task_id: "t3".into(),
        run_id: "run-1".into(),
        driver: "gemini-computer-use".into(),
        timestamp: "2026-01-01T00:00:00Z".into(),
        success: false,
        criteria: vec![],
        observations: vec![],
        evidence: serde_json::Value::Null,
    };

    let first = write_task_report(dir.path(), &report).unwrap();
    report.success = true;
    let second = write_task_report(dir.path(), &report).unwrap();
    assert_eq!(first, second);

    let reread: TaskReport =
        serde_json::from_str(&std::fs::read_to_string(&second).unwrap()).unwrap();
    assert!(reread.success);
}
