// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{
    HolidaysOnRequest, ListRecordsRequest, ListRecordsResponse, RemoveRecordRequest,
    SidebarState, SortKey,
};
use super::helpers::create_test_admin;
use school_admin_domain::RecordKind;
use serde_json::{Value, json};
use time::macros::date;

#[test]
fn test_list_request_defaults() {
    let request: ListRecordsRequest =
        serde_json::from_value(json!({"kind": "event", "sort": "upcomingFirst"})).unwrap();

    assert_eq!(request.kind, RecordKind::Event);
    assert_eq!(request.sort, Some(SortKey::UpcomingFirst));
    assert!(request.search.is_none());
    assert!(request.grade.is_none());
}

#[test]
fn test_list_request_rejects_unknown_kind() {
    let result: Result<ListRecordsRequest, _> =
        serde_json::from_value(json!({"kind": "parent"}));
    assert!(result.is_err());
}

#[test]
fn test_remove_request_confirm_defaults_false() {
    let request: RemoveRecordRequest =
        serde_json::from_value(json!({"kind": "student", "id": "2"})).unwrap();
    assert!(!request.confirm);
}

#[test]
fn test_holidays_on_request_parses_iso_date() {
    let request: HolidaysOnRequest =
        serde_json::from_value(json!({"date": "2025-12-25"})).unwrap();
    assert_eq!(request.date, date!(2025 - 12 - 25));

    let bad: Result<HolidaysOnRequest, _> = serde_json::from_value(json!({"date": "25/12/2025"}));
    assert!(bad.is_err());
}

#[test]
fn test_records_serialize_without_variant_wrapper() {
    let admin = create_test_admin();
    let response: ListRecordsResponse = admin
        .list_records(&ListRecordsRequest {
            kind: RecordKind::Student,
            search: None,
            grade: None,
            sort: None,
        })
        .unwrap();

    let value: Value = serde_json::to_value(&response).unwrap();
    let first: &Value = &value["records"][0];
    assert_eq!(value["kind"], "student");
    assert_eq!(first["rollNumber"], "2024001");
    assert_eq!(first["class"], "A");
    assert_eq!(first["dateOfBirth"], "2008-05-15");
    assert!(first.get("Student").is_none());
}

#[test]
fn test_sidebar_state_field_names() {
    let admin = create_test_admin();
    let state: SidebarState = admin.sidebar();
    let value: Value = serde_json::to_value(state).unwrap();

    assert_eq!(value["viewport"], "desktop");
    assert_eq!(value["width"], 1280);
    assert_eq!(value["preference"], Value::Null);
    assert_eq!(value["persisted"], Value::Null);
}

#[test]
fn test_dashboard_field_names() {
    let admin = create_test_admin();
    let value: Value = serde_json::to_value(admin.dashboard()).unwrap();

    assert_eq!(value["totalStudents"], 4);
    assert_eq!(value["totalStudentsDisplay"], "4");
    assert_eq!(value["totalTeachers"], 4);
    assert!(value["nextEvents"].is_array());
}
