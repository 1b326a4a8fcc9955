// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_empty_admin, create_test_admin, draft};
use crate::ApiError;
use crate::request_response::{
    ListRecordsRequest, ListRecordsResponse, MutationResponse, RecordPayload,
    RemoveRecordRequest, SortKey, UpdateRecordRequest,
};
use school_admin::{ConfirmationSurface, RemovalRequest};
use school_admin_domain::{RecordId, RecordKind};
use school_admin_notifications::NoticeTopic;

fn list(kind: RecordKind) -> ListRecordsRequest {
    ListRecordsRequest {
        kind,
        search: None,
        grade: None,
        sort: None,
    }
}

fn names(response: &ListRecordsResponse) -> Vec<String> {
    response
        .records
        .iter()
        .map(|record| match record {
            RecordPayload::Student(s) => s.name.clone(),
            RecordPayload::Teacher(t) => t.name.clone(),
            RecordPayload::Holiday(h) => h.name.clone(),
            RecordPayload::Event(e) => e.name.clone(),
        })
        .collect()
}

fn ids(response: &ListRecordsResponse) -> Vec<String> {
    response
        .records
        .iter()
        .map(|record| match record {
            RecordPayload::Student(s) => s.id.value().to_string(),
            RecordPayload::Teacher(t) => t.id.value().to_string(),
            RecordPayload::Holiday(h) => h.id.value().to_string(),
            RecordPayload::Event(e) => e.id.value().to_string(),
        })
        .collect()
}

#[test]
fn test_seeded_collections() {
    let admin = create_test_admin();
    assert_eq!(admin.students().len(), 4);
    assert_eq!(admin.teachers().len(), 4);
    assert_eq!(admin.holidays().len(), 4);
    assert_eq!(admin.events().len(), 3);
}

#[test]
fn test_empty_admin_has_no_records() {
    let admin = create_empty_admin();
    assert!(admin.students().is_empty());
    assert!(admin.notifications().items.is_empty());
}

#[test]
fn test_student_search_matches_roll_number() {
    let admin = create_test_admin();
    let mut request: ListRecordsRequest = list(RecordKind::Student);
    request.search = Some(String::from("2024003"));

    let response: ListRecordsResponse = admin.list_records(&request).unwrap();
    assert_eq!(names(&response), vec!["Alice Johnson"]);
    assert_eq!(response.total, 4);
}

#[test]
fn test_student_search_is_case_insensitive() {
    let admin = create_test_admin();
    let mut request: ListRecordsRequest = list(RecordKind::Student);
    request.search = Some(String::from("JANE"));

    let response: ListRecordsResponse = admin.list_records(&request).unwrap();
    assert_eq!(names(&response), vec!["Jane Smith"]);
}

#[test]
fn test_grade_filter_narrows_search() {
    let admin = create_test_admin();
    let mut request: ListRecordsRequest = list(RecordKind::Student);
    request.grade = Some(String::from("Grade 10"));

    let response: ListRecordsResponse = admin.list_records(&request).unwrap();
    assert_eq!(names(&response), vec!["John Doe", "Bob Brown"]);

    request.search = Some(String::from("bob"));
    let response: ListRecordsResponse = admin.list_records(&request).unwrap();
    assert_eq!(names(&response), vec!["Bob Brown"]);
}

#[test]
fn test_malformed_grade_filter_is_invalid_input() {
    let admin = create_test_admin();
    let mut request: ListRecordsRequest = list(RecordKind::Student);
    request.grade = Some(String::from("Grade 13"));

    let err: ApiError = admin.list_records(&request).unwrap_err();
    assert_eq!(err.code(), "invalid_input");
}

#[test]
fn test_grade_filter_outside_students_is_rejected() {
    let admin = create_test_admin();
    let mut request: ListRecordsRequest = list(RecordKind::Teacher);
    request.grade = Some(String::from("Grade 10"));

    assert!(matches!(
        admin.list_records(&request),
        Err(ApiError::InvalidInput { .. })
    ));
}

#[test]
fn test_teacher_search_covers_department() {
    let admin = create_test_admin();
    let mut request: ListRecordsRequest = list(RecordKind::Teacher);
    request.search = Some(String::from("science"));

    let response: ListRecordsResponse = admin.list_records(&request).unwrap();
    assert_eq!(
        names(&response),
        vec!["Mr. Robert Johnson", "Dr. Emily Davis"]
    );
}

#[test]
fn test_events_upcoming_first() {
    let admin = create_test_admin();
    let mut request: ListRecordsRequest = list(RecordKind::Event);
    request.sort = Some(SortKey::UpcomingFirst);

    let response: ListRecordsResponse = admin.list_records(&request).unwrap();
    assert_eq!(ids(&response), vec!["2", "1", "3"]);
}

#[test]
fn test_holidays_by_date() {
    let admin = create_test_admin();
    let mut request: ListRecordsRequest = list(RecordKind::Holiday);
    request.sort = Some(SortKey::Date);

    let response: ListRecordsResponse = admin.list_records(&request).unwrap();
    assert_eq!(ids(&response), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_unsupported_sort_is_rejected() {
    let admin = create_test_admin();
    let mut request: ListRecordsRequest = list(RecordKind::Teacher);
    request.sort = Some(SortKey::Date);

    let err: ApiError = admin.list_records(&request).unwrap_err();
    assert_eq!(err.code(), "unsupported");
}

#[test]
fn test_update_merges_patch_and_notifies() {
    let mut admin = create_test_admin();
    let request: UpdateRecordRequest = UpdateRecordRequest {
        kind: RecordKind::Teacher,
        id: RecordId::new("4"),
        fields: draft(&[("status", "active")]),
    };

    let response: MutationResponse = admin.update_record(&request).unwrap();
    let Some(RecordPayload::Teacher(teacher)) = response.record else {
        panic!("expected a teacher");
    };
    assert_eq!(teacher.status.as_str(), "active");
    assert_eq!(teacher.subject, "History");

    let notices = admin.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].topic, NoticeTopic::RecordUpdated);
    assert_eq!(notices[0].title, "Teacher updated");
}

#[test]
fn test_update_rejects_invalid_patched_field() {
    let mut admin = create_test_admin();
    let request: UpdateRecordRequest = UpdateRecordRequest {
        kind: RecordKind::Student,
        id: RecordId::new("1"),
        fields: draft(&[("email", "not-an-email")]),
    };

    let err: ApiError = admin.update_record(&request).unwrap_err();
    let ApiError::ValidationFailed { errors } = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "email");
    assert_eq!(
        admin.students().get(&RecordId::new("1")).unwrap().email,
        "john@example.com"
    );
}

#[test]
fn test_update_unknown_id_changes_nothing() {
    let mut admin = create_test_admin();
    let request: UpdateRecordRequest = UpdateRecordRequest {
        kind: RecordKind::Holiday,
        id: RecordId::new("99"),
        fields: draft(&[("name", "Founders Day")]),
    };

    let response: MutationResponse = admin.update_record(&request).unwrap();
    assert_eq!(response, MutationResponse::unchanged(RecordKind::Holiday));
    assert!(admin.drain_notices().is_empty());
}

#[test]
fn test_remove_requires_confirmation() {
    let mut admin = create_test_admin();
    let declined: RemoveRecordRequest = RemoveRecordRequest {
        kind: RecordKind::Event,
        id: RecordId::new("3"),
        confirm: false,
    };

    let response: MutationResponse = admin.remove_record(&declined).unwrap();
    assert!(response.record.is_none());
    assert_eq!(admin.events().len(), 3);

    let confirmed: RemoveRecordRequest = RemoveRecordRequest {
        confirm: true,
        ..declined
    };
    let response: MutationResponse = admin.remove_record(&confirmed).unwrap();
    assert!(matches!(response.record, Some(RecordPayload::Event(_))));
    assert_eq!(admin.events().len(), 2);
    assert_eq!(
        response.notice.unwrap().description,
        "Sports Meet was deleted successfully"
    );
}

#[test]
fn test_remove_unknown_id_changes_nothing() {
    let mut admin = create_test_admin();
    let request: RemoveRecordRequest = RemoveRecordRequest {
        kind: RecordKind::Student,
        id: RecordId::new("42"),
        confirm: true,
    };

    let response: MutationResponse = admin.remove_record(&request).unwrap();
    assert!(response.record.is_none());
    assert_eq!(admin.students().len(), 4);
}

/// Records the prompt it was shown and answers yes.
struct RecordingSurface {
    prompts: Vec<String>,
}

impl ConfirmationSurface for RecordingSurface {
    fn confirm(&mut self, request: &RemovalRequest) -> bool {
        self.prompts.push(request.prompt());
        true
    }
}

#[test]
fn test_remove_with_surface_shows_prompt() {
    let mut admin = create_test_admin();
    let mut surface: RecordingSurface = RecordingSurface {
        prompts: Vec::new(),
    };

    admin
        .remove_with(RecordKind::Teacher, &RecordId::new("2"), &mut surface)
        .unwrap();

    assert_eq!(
        surface.prompts,
        vec!["Are you sure you want to delete Ms. Sarah Smith?"]
    );
    assert!(admin.teachers().get(&RecordId::new("2")).is_none());
}

#[test]
fn test_removal_request_describes_record() {
    let admin = create_test_admin();

    let request: RemovalRequest = admin
        .removal_request(RecordKind::Holiday, &RecordId::new("3"))
        .unwrap();
    assert_eq!(request.prompt(), "Are you sure you want to delete Labor Day?");

    let missing = admin.removal_request(RecordKind::Holiday, &RecordId::new("9"));
    assert_eq!(missing.unwrap_err().code(), "not_found");
}

#[test]
fn test_holidays_on_date() {
    let admin = create_test_admin();

    let found = admin.holidays_on(time::macros::date!(2025 - 05 - 01));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Labor Day");

    assert!(admin.holidays_on(time::macros::date!(2025 - 05 - 02)).is_empty());
}
