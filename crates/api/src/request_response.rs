// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use school_admin::EditorMode;
use school_admin_domain::{
    Draft, Event, FieldError, Holiday, RecordId, RecordKind, Student, Teacher, ViewportClass,
};
use school_admin_notifications::{Notice, NotificationItem};
use serde::{Deserialize, Serialize};
use time::Date;

/// How a listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Students by roll number.
    RollNumber,
    /// Students by grade level.
    Grade,
    /// Holidays and events by date.
    Date,
    /// Upcoming events first, then by date.
    UpcomingFirst,
}

/// API request to list one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordsRequest {
    /// The collection to list.
    pub kind: RecordKind,
    /// Case-insensitive search text.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact grade filter, students only (e.g. `Grade 10`).
    #[serde(default)]
    pub grade: Option<String>,
    /// Optional ordering. Insertion order otherwise.
    #[serde(default)]
    pub sort: Option<SortKey>,
}

/// A record of any collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordPayload {
    Student(Student),
    Teacher(Teacher),
    Holiday(Holiday),
    Event(Event),
}

impl From<Student> for RecordPayload {
    fn from(record: Student) -> Self {
        Self::Student(record)
    }
}

impl From<Teacher> for RecordPayload {
    fn from(record: Teacher) -> Self {
        Self::Teacher(record)
    }
}

impl From<Holiday> for RecordPayload {
    fn from(record: Holiday) -> Self {
        Self::Holiday(record)
    }
}

impl From<Event> for RecordPayload {
    fn from(record: Event) -> Self {
        Self::Event(record)
    }
}

/// API response for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordsResponse {
    /// The collection listed.
    pub kind: RecordKind,
    /// Records in the collection before filtering.
    pub total: usize,
    /// The matching records.
    pub records: Vec<RecordPayload>,
}

/// API request to open a record editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenEditorRequest {
    /// The collection to edit.
    pub kind: RecordKind,
    /// The record to edit. A new record is created when absent.
    #[serde(default)]
    pub id: Option<RecordId>,
}

/// The visible state of the open editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub kind: RecordKind,
    pub mode: EditorMode,
    /// Zero-based index of the visible step.
    pub step: usize,
    pub step_count: usize,
    /// The visible step's title.
    pub title: String,
    /// The fields on the visible step.
    pub fields: Vec<String>,
    pub is_last_step: bool,
    pub draft: Draft,
    pub errors: Vec<FieldError>,
}

/// API response for a step change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    /// Whether the step validated. Always true when going back.
    pub advanced: bool,
    pub editor: EditorView,
}

/// API request to change a record without the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordRequest {
    pub kind: RecordKind,
    pub id: RecordId,
    /// Values to overlay. Blank values clear optional fields.
    pub fields: Draft,
}

/// API request to remove a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRecordRequest {
    pub kind: RecordKind,
    pub id: RecordId,
    /// The user's answer to the confirmation prompt.
    #[serde(default)]
    pub confirm: bool,
}

/// API response for an add, update or remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub kind: RecordKind,
    /// The affected record. `None` when nothing changed.
    pub record: Option<RecordPayload>,
    /// The notice shown for this change.
    pub notice: Option<Notice>,
}

impl MutationResponse {
    /// A response for a mutation that changed nothing.
    #[must_use]
    pub const fn unchanged(kind: RecordKind) -> Self {
        Self {
            kind,
            record: None,
            notice: None,
        }
    }
}

/// The sidebar as the layout renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarState {
    pub collapsed: bool,
    /// The stored desktop preference, `None` if never set.
    pub preference: Option<bool>,
    pub viewport: ViewportClass,
    pub width: u32,
    /// Whether the last change reached durable storage.
    pub persisted: Option<bool>,
}

/// API request to change the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSidebarRequest {
    pub collapsed: bool,
}

/// API request reporting a new viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeRequest {
    pub width: u32,
}

/// The notification bell contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub items: Vec<NotificationItem>,
    pub unread_count: usize,
}

/// API request naming one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkReadRequest {
    pub id: String,
}

/// The dashboard summary cards and the upcoming events panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_students: usize,
    /// Total students, shortened for display (e.g. `1.2K`).
    pub total_students_display: String,
    pub total_teachers: usize,
    pub upcoming_events: usize,
    pub holidays: usize,
    /// At most three upcoming events, soonest first.
    pub next_events: Vec<Event>,
}

/// API request for the holiday calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HolidaysOnRequest {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Date,
}

/// API request to export one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub kind: RecordKind,
}

/// API response carrying a CSV document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    /// Suggested file name, e.g. `students.csv`.
    pub filename: String,
    pub csv: String,
}

fn deserialize_date<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
    let raw: String = String::deserialize(deserializer)?;
    school_admin_domain::parse_iso_date(&raw).map_err(serde::de::Error::custom)
}
