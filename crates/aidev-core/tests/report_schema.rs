//! Serde roundtrip and JsonSchema validation tests for CLI response types.

use aidev_core::OutputTable;
use aidev_core::responses::*;
use chrono::Utc;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    run_report_roundtrip,
    RunReport,
    RunReport {
        started_at: Utc::now(),
        finished_at: Utc::now(),
        output_dir: "out".into(),
        keyword_set_version: "v1".into(),
        tables: OutputTable::ALL
            .iter()
            .map(|table| TableWritten {
                table: *table,
                path: format!("out/{}", table.file_name()),
                rows: 3,
            })
            .collect(),
        labels: LabelSummary {
            pull_requests: 3,
            joined_rows: 4,
            untyped_rows_dropped: 1,
            fanned_out_pull_requests: 1,
            labeled_rows: 3,
            flagged: 2,
        },
    }
);

roundtrip_and_validate!(
    classify_response_roundtrip,
    ClassifyResponse,
    ClassifyResponse {
        security: true,
        matched_keywords: vec!["buffer".into(), "overflow".into()],
        keyword_set_version: "v1".into(),
    }
);

roundtrip_and_validate!(
    keywords_response_roundtrip,
    KeywordsResponse,
    KeywordsResponse {
        version: "v1".into(),
        count: 2,
        keywords: vec!["race".into(), "xss".into()],
    }
);

#[test]
fn output_table_serializes_as_snake_case() {
    let value = serde_json::to_value(OutputTable::SecurityLabels).unwrap();
    assert_eq!(value, serde_json::json!("security_labels"));
}
