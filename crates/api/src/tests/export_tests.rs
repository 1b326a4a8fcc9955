// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_admin;
use crate::export::{filename, to_csv};
use crate::request_response::ExportResponse;
use school_admin_domain::{Draft, Holiday, Record, RecordId, RecordKind, Teacher};

#[test]
fn test_holiday_export_layout() {
    let admin = create_test_admin();
    let export: ExportResponse = admin.export(RecordKind::Holiday).unwrap();

    assert_eq!(export.filename, "holidays.csv");
    let lines: Vec<&str> = export.csv.lines().collect();
    assert_eq!(lines[0], "id,name,date,type,description");
    assert_eq!(
        lines[1],
        r#""1","New Year","2025-01-01","National","New Year celebration""#
    );
    assert_eq!(lines.len(), 5);
    assert!(!export.csv.ends_with('\n'));
    assert_eq!(export.csv.matches('\n').count(), 4);
}

#[test]
fn test_missing_values_export_empty() {
    let admin = create_test_admin();
    let export: ExportResponse = admin.export(RecordKind::Student).unwrap();

    let header: Vec<&str> = export.csv.lines().next().unwrap().split(',').collect();
    let religion: usize = header.iter().position(|c| *c == "religion").unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(export.csv.as_bytes());
    let first = reader.records().next().unwrap().unwrap();
    assert_eq!(&first[0], "1");
    assert_eq!(&first[religion], "");
}

#[test]
fn test_embedded_quotes_are_escaped() {
    let values: Draft = [
        ("name", "Mr. \"Bob\" Lee"),
        ("email", "bob.lee@school.com"),
        ("subject", "Art"),
        ("department", "Arts"),
        ("qualification", "B.F.A."),
        ("phone", "9876543210"),
        ("dateOfJoining", "2023-01-09"),
        ("status", "active"),
    ]
    .into_iter()
    .collect();
    let teacher: Teacher = Teacher::from_draft(RecordId::new("9"), &values).unwrap();

    let csv: String = to_csv(&[teacher]).unwrap();
    assert!(csv.contains(r#""Mr. ""Bob"" Lee""#));
}

#[test]
fn test_empty_collection_exports_header_only() {
    let csv: String = to_csv::<Holiday>(&[]).unwrap();
    assert_eq!(csv, "id,name,date,type,description");
    assert_eq!(filename::<Holiday>(), "holidays.csv");
}
