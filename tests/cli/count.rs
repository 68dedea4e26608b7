//! Tests for `casetally count` command.

use crate::support::*;

#[test]
fn test_count_prints_configured_caseworkers() {
    let t = Test::with_backend(
        Behavior::default()
            .with_count("AZX0018", 1, 5)
            .with_count("2GBYGSAG Byggeri", 1, 3),
    );

    let output = t.count(&[]);

    assert_success(&output);
    assert_stdout_contains(&output, "Counts");
    assert_stdout_contains(&output, "AZX0018  Ændrede indsendelser: 5");
    assert_stdout_contains(&output, "2GBYGSAG Byggeri  Nye indsendelser: 3");

    // Nothing is written or uploaded.
    assert!(t.spreadsheets().is_empty());
    let rec = t.backend().recorded();
    assert!(rec.uploads.is_empty());
    assert!(rec.login_forms.is_empty());
}

#[test]
fn test_count_json_for_named_caseworker() {
    let t = Test::with_backend(Behavior::default().with_count("XYZ0001", 1, 17));

    let output = t.count(&["XYZ0001", "--json"]);

    assert_success(&output);
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        rows,
        serde_json::json!([
            {"caseworker": "XYZ0001", "Indsendelser": "Nye indsendelser", "Antal": "17"}
        ])
    );
}

#[test]
fn test_count_zero_rows_is_zero() {
    let t = Test::with_backend(Behavior::default().with_count("AZX0018", 0, 40));

    let output = t.count(&["AZX0018", "--json"]);

    assert_success(&output);
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows[0]["Antal"], "0");
}
