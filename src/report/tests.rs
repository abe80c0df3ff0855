use super::{MatchReport, write_csv};
use crate::bundles::BundleRecord;
use crate::catalog::Codelist;
use crate::matching::ResultRow;

fn matched_row() -> ResultRow {
    ResultRow::matched(
        &BundleRecord::new("b1", "Diabetes Type 2 monitoring"),
        &Codelist::new("Type 2 diabetes", "https://example.org/t2dm"),
        0.75,
        1,
        Some(0.91),
        Some(1),
    )
}

fn sentinel_row() -> ResultRow {
    ResultRow::no_match(&BundleRecord::new("b2", "Unmatchable"))
}

#[test]
fn test_json_report_round_trips() {
    let report = MatchReport::new("opensafely", 2, 10, vec![matched_row(), sentinel_row()]);

    let json = report.to_json().unwrap();
    let decoded: MatchReport = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.organisation, "opensafely");
    assert_eq!(decoded.bundle_count, 2);
    assert_eq!(decoded.codelist_count, 10);
    assert_eq!(decoded.results, report.results);
}

#[test]
fn test_sentinel_scores_serialize_as_null() {
    let report = MatchReport::new("opensafely", 1, 0, vec![sentinel_row()]);

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let row = &value["results"][0];
    assert_eq!(row["codelist_name"], "None");
    assert_eq!(row["codelist_url"], "");
    assert!(row["jaccard_score"].is_null());
    assert!(row["cosine_rank"].is_null());
}

#[test]
fn test_csv_renders_absent_values_as_empty_cells() {
    let mut buffer = Vec::new();
    write_csv(&[matched_row(), sentinel_row()], &mut buffer).unwrap();

    let output = String::from_utf8(buffer).unwrap();
    let mut lines = output.lines();

    assert_eq!(
        lines.next().unwrap(),
        "bundle_id,bundle_name,codelist_name,codelist_url,jaccard_score,jaccard_rank,cosine_score,cosine_rank"
    );
    assert_eq!(
        lines.next().unwrap(),
        "b1,Diabetes Type 2 monitoring,Type 2 diabetes,https://example.org/t2dm,0.75,1,0.91,1"
    );
    assert_eq!(lines.next().unwrap(), "b2,Unmatchable,None,,,,,");
}

#[test]
fn test_csv_of_no_rows_is_header_free() {
    let mut buffer = Vec::new();
    write_csv(&[], &mut buffer).unwrap();
    assert!(buffer.is_empty());
}
