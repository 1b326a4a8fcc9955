// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::protocol::{encode_notices, handle_line, serve};
use clap::Parser;
use school_admin::{InMemoryPreferenceStore, SidenavConfig};
use school_admin_api::SchoolAdmin;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use time::macros::date;

fn create_test_admin() -> SchoolAdmin<InMemoryPreferenceStore> {
    SchoolAdmin::new(
        SidenavConfig::default(),
        InMemoryPreferenceStore::new(),
        1280,
        date!(2026 - 06 - 01),
    )
    .unwrap()
}

fn call(admin: &mut SchoolAdmin<InMemoryPreferenceStore>, request: &Value) -> Value {
    let response = handle_line(admin, &request.to_string());
    serde_json::to_value(response).unwrap()
}

#[test]
fn test_args_defaults() {
    let args: crate::Args = crate::Args::parse_from(["school-admin"]);
    assert_eq!(args.width, 1280);
    assert_eq!(args.breakpoint, 768);
    assert!(args.database.is_none());
    assert!(args.today.is_none());
}

#[test]
fn test_args_parse_today() {
    let args: crate::Args =
        crate::Args::parse_from(["school-admin", "--today", "2025-09-01", "--width", "500"]);
    assert_eq!(args.today, Some(date!(2025 - 09 - 01)));
    assert_eq!(args.width, 500);

    assert!(crate::Args::try_parse_from(["school-admin", "--today", "01/09/2025"]).is_err());
}

#[test]
fn test_success_response_shape() {
    let mut admin = create_test_admin();
    let response: Value = call(&mut admin, &json!({"id": 7, "method": "sidebar.get"}));

    assert_eq!(response["id"], 7);
    assert_eq!(response["ok"], true);
    assert_eq!(response["result"]["collapsed"], false);
    assert_eq!(response["result"]["viewport"], "desktop");
    assert!(response.get("error").is_none());
    assert!(response.get("notices").is_none());
}

#[test]
fn test_unknown_method() {
    let mut admin = create_test_admin();
    let response: Value = call(&mut admin, &json!({"id": "a", "method": "students.purge"}));

    assert_eq!(response["id"], "a");
    assert_eq!(response["ok"], false);
    assert_eq!(response["error"]["code"], "unknown_method");
}

#[test]
fn test_malformed_line() {
    let mut admin = create_test_admin();
    let response = serde_json::to_value(handle_line(&mut admin, "{not json")).unwrap();

    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], "parse_error");
}

#[test]
fn test_invalid_params() {
    let mut admin = create_test_admin();
    let response: Value = call(
        &mut admin,
        &json!({"id": 1, "method": "records.list", "params": {"kind": "alumni"}}),
    );

    assert_eq!(response["error"]["code"], "invalid_params");
}

#[test]
fn test_list_with_grade_filter() {
    let mut admin = create_test_admin();
    let response: Value = call(
        &mut admin,
        &json!({
            "id": 2,
            "method": "records.list",
            "params": {"kind": "student", "grade": "Grade 10", "sort": "rollNumber"}
        }),
    );

    let records = response["result"]["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "John Doe");
    assert_eq!(records[0]["class"], "A");
}

#[test]
fn test_editor_flow_returns_notices() {
    let mut admin = create_test_admin();
    call(
        &mut admin,
        &json!({"id": 1, "method": "editor.open", "params": {"kind": "holiday"}}),
    );
    call(
        &mut admin,
        &json!({
            "id": 2,
            "method": "editor.setFields",
            "params": {"fields": {
                "name": "Republic Day",
                "date": "2026-01-26",
                "type": "National",
                "description": "Constitution day"
            }}
        }),
    );

    let response: Value = call(&mut admin, &json!({"id": 3, "method": "editor.submit"}));
    assert_eq!(response["ok"], true);
    assert_eq!(response["result"]["record"]["id"], "5");
    assert_eq!(response["notices"][0]["title"], "Holiday added");

    let on_day: Value = call(
        &mut admin,
        &json!({"id": 4, "method": "holidays.on", "params": {"date": "2026-01-26"}}),
    );
    assert_eq!(on_day["result"][0]["name"], "Republic Day");
}

#[test]
fn test_blocked_step_is_ok_with_validation_notice() {
    let mut admin = create_test_admin();
    call(
        &mut admin,
        &json!({"id": 1, "method": "editor.open", "params": {"kind": "student"}}),
    );

    let response: Value = call(&mut admin, &json!({"id": 2, "method": "editor.next"}));
    assert_eq!(response["ok"], true);
    assert_eq!(response["result"]["advanced"], false);
    assert_eq!(response["notices"][0]["topic"], "validationFailed");
}

#[test]
fn test_api_errors_keep_their_code() {
    let mut admin = create_test_admin();
    let response: Value = call(&mut admin, &json!({"id": 1, "method": "editor.submit"}));

    assert_eq!(response["ok"], false);
    assert_eq!(response["error"]["code"], "no_editor_open");
    assert_eq!(response["error"]["message"], "No editor is open");
}

#[test]
fn test_removal_prompt_then_remove() {
    let mut admin = create_test_admin();
    let prompt: Value = call(
        &mut admin,
        &json!({"id": 1, "method": "records.removalPrompt", "params": {"kind": "teacher", "id": "3"}}),
    );
    assert_eq!(
        prompt["result"]["prompt"],
        "Are you sure you want to delete Dr. Emily Davis?"
    );

    let removed: Value = call(
        &mut admin,
        &json!({"id": 2, "method": "records.remove", "params": {"kind": "teacher", "id": "3", "confirm": true}}),
    );
    assert_eq!(removed["result"]["record"]["name"], "Dr. Emily Davis");
    assert_eq!(admin.teachers().len(), 3);
}

#[test]
fn test_format_helpers() {
    let mut admin = create_test_admin();
    let number: Value = call(
        &mut admin,
        &json!({"id": 1, "method": "format.number", "params": {"value": 1250}}),
    );
    assert_eq!(number["result"], "1.3K");

    let letters: Value = call(
        &mut admin,
        &json!({"id": 2, "method": "format.initials", "params": {"name": "john ronald smith"}}),
    );
    assert_eq!(letters["result"], "JR");
}

#[test]
fn test_serve_answers_each_line() {
    let mut admin = create_test_admin();
    let input: &[u8] = b"{\"id\":1,\"method\":\"dashboard.get\"}\n\n{\"id\":2,\"method\":\"notifications.list\"}\n";
    let mut output: Vec<u8> = Vec::new();

    let handled: usize = serve(&mut admin, input, &mut output).unwrap();
    assert_eq!(handled, 2);

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["result"]["totalStudents"], 4);
    assert_eq!(lines[1]["result"]["unreadCount"], 2);
}

#[test]
fn test_export_over_protocol() {
    let mut admin = create_test_admin();
    let response: Value = call(
        &mut admin,
        &json!({"id": 1, "method": "export.csv", "params": {"kind": "event"}}),
    );

    assert_eq!(response["result"]["filename"], "events.csv");
    let csv = response["result"]["csv"].as_str().unwrap();
    assert!(csv.starts_with("id,name,date,time,location,status,description\n"));
}

#[test]
fn test_unencodable_notice_is_skipped() {
    let readable: BTreeMap<Vec<u8>, bool> = BTreeMap::new();
    let mut unreadable: BTreeMap<Vec<u8>, bool> = BTreeMap::new();
    unreadable.insert(vec![1, 2], true);

    let encoded: Vec<Value> = encode_notices(vec![unreadable, readable]);

    assert_eq!(encoded, vec![json!({})]);
}
