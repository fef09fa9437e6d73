use flat_tree::{
    FlatTreeConfig, FlatTreeError, FlattenEngine, LocalStorage, OutputFormat, RecordSelection,
};
use std::io::Write;
use tempfile::TempDir;

const EVENTS: &str = r#"{"event_number":1,"f125_wraw":[{"roc":25,"slot":3,"channel":0,"invalid_samples":false,"overflow":false,"itrigger":1,"samples":[101,99,100]},{"roc":25,"slot":3,"channel":1,"invalid_samples":false,"overflow":true,"itrigger":1,"samples":[4095]}]}
{"event_number":2}
{"event_number":3,"srs":[{"roc":76,"slot":0,"channel":5,"apv_id":2,"channel_apv":17,"best_sample":3,"raw_samples":6}]}
"#;

fn write_input(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("events.jsonl");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_str().unwrap().to_string()
}

fn config(input: String, output: &TempDir) -> FlatTreeConfig {
    let mut config = FlatTreeConfig::default();
    config.input.path = Some(input);
    config.output.path = output.path().to_str().unwrap().to_string();
    config
}

#[test]
fn test_end_to_end_jsonl() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let config = config(write_input(&input_dir, EVENTS), &output_dir);

    let storage = LocalStorage::new(config.output.path.clone());
    let summary = FlattenEngine::new(storage, config).run().unwrap();

    assert_eq!(summary.tree, "events");
    assert_eq!(summary.events, 3);
    assert_eq!(summary.records.f125_wraw, 2);
    assert_eq!(summary.records.srs, 1);
    assert_eq!(summary.records.skipped, 0);
    assert_eq!(summary.files.len(), 3);

    let entries = std::fs::read_to_string(output_dir.path().join("events.jsonl")).unwrap();
    let rows: Vec<serde_json::Value> = entries
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0]["f125_wraw_count"], 2);
    assert_eq!(rows[0]["f125_wraw_channel"], serde_json::json!([0, 1]));
    assert_eq!(rows[0]["f125_wraw_overflow"], serde_json::json!([false, true]));
    assert_eq!(
        rows[0]["f125_wraw_samples"],
        serde_json::json!([[101, 99, 100], [4095]])
    );
    assert_eq!(rows[0]["srs_count"], 0);

    assert_eq!(rows[1]["f125_wraw_count"], 0);
    assert_eq!(rows[1]["f125_wraw_samples"], serde_json::json!([]));

    assert_eq!(rows[2]["srs_apv_id"], serde_json::json!([2]));
    assert_eq!(rows[2]["f125_pulse_count"], 0);

    let schema =
        std::fs::read_to_string(output_dir.path().join("events_branches.csv")).unwrap();
    assert_eq!(schema.lines().count(), 1 + 8 + 8 + 24);
    assert!(output_dir.path().join("events_meta.json").exists());
}

#[test]
fn test_end_to_end_selected_records_json() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let mut config = config(write_input(&input_dir, EVENTS), &output_dir);
    config.tree.name = "wraw".to_string();
    config.output.format = OutputFormat::Json;
    config.output.write_schema = false;
    config.records = RecordSelection {
        f125_wraw: true,
        srs: false,
        f125_pulse: false,
    };

    let storage = LocalStorage::new(config.output.path.clone());
    let summary = FlattenEngine::new(storage, config).run().unwrap();

    assert_eq!(summary.branches, 8);
    assert_eq!(summary.records.skipped, 1);
    assert!(!output_dir.path().join("wraw_branches.csv").exists());

    let entries: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(output_dir.path().join("wraw.json")).unwrap(),
    )
    .unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries[2].get("srs_count").is_none());
}

#[test]
fn test_dry_run_writes_nothing() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let config = config(write_input(&input_dir, EVENTS), &output_dir);

    let storage = LocalStorage::new(config.output.path.clone());
    let summary = FlattenEngine::new(storage, config).dry_run().unwrap();

    assert_eq!(summary.events, 3);
    assert!(summary.files.is_empty());
    assert_eq!(std::fs::read_dir(output_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_input_gives_empty_tree() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let config = config(write_input(&input_dir, ""), &output_dir);

    let storage = LocalStorage::new(config.output.path.clone());
    let summary = FlattenEngine::new(storage, config).run().unwrap();

    assert_eq!(summary.events, 0);
    let entries = std::fs::read_to_string(output_dir.path().join("events.jsonl")).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_bad_event_line_is_reported() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let config = config(
        write_input(&input_dir, "{\"event_number\":1}\nnot json\n"),
        &output_dir,
    );

    let storage = LocalStorage::new(config.output.path.clone());
    let err = FlattenEngine::new(storage, config).run().unwrap_err();

    assert!(matches!(err, FlatTreeError::EventParse { line: 2, .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_missing_input_file() {
    let output_dir = TempDir::new().unwrap();
    let config = config(
        output_dir.path().join("nope.jsonl").to_str().unwrap().to_string(),
        &output_dir,
    );

    let storage = LocalStorage::new(config.output.path.clone());
    let err = FlattenEngine::new(storage, config).run().unwrap_err();
    assert!(matches!(err, FlatTreeError::InputOpen { ref path, .. } if path.ends_with("nope.jsonl")));
    assert!(err.to_string().contains("nope.jsonl"));
}
