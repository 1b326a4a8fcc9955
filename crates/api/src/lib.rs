// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The School Admin application facade.
//!
//! [`SchoolAdmin`] owns every piece of dashboard state: the sidebar, the
//! four record collections, the open editor, and the notification surfaces.
//! Hosts drive it with the request types in [`request_response`] and render
//! the responses.
//!
//! Two notification surfaces exist. Transient notices (record saved, form
//! blocked) collect in a toast log that hosts drain after each call. The
//! notification bell is an [`Inbox`] that also receives warnings the user
//! should still see later, such as a sidebar preference that was not saved.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
pub mod export;
pub mod request_response;
pub mod seed;

#[cfg(test)]
mod tests;

use school_admin::{
    Comparator, ConfirmationSurface, PreferenceStore, PreferenceWrite, PresetAnswer,
    RecordCollection, RecordCommand, RecordFilter, RemovalRequest, SidenavConfig,
    SidenavController, StepFormSession, Submission, TransitionResult, apply, apply_submission,
};
use school_admin_domain::{
    Draft, Event, FieldError, Grade, Holiday, Record, RecordId, RecordKind, RuleValidator,
    Student, Teacher, Validator, format_number,
};
use school_admin_notifications::{Inbox, Notice, NoticeLog, NotificationSink};
use school_admin_persistence::SqlitePreferenceStore;
use std::path::Path;
use time::Date;
use tracing::{debug, info};

pub use error::ApiError;
use request_response::{
    DashboardOverview, EditorView, ExportResponse, ListRecordsRequest, ListRecordsResponse,
    MarkReadRequest, MutationResponse, NotificationsResponse, OpenEditorRequest, RecordPayload,
    RemoveRecordRequest, ResizeRequest, SetSidebarRequest, SidebarState, SortKey, StepResponse,
    UpdateRecordRequest,
};

/// The number of upcoming events shown on the dashboard.
pub const NEXT_EVENTS_SHOWN: usize = 3;

/// Opens the durable preference store.
///
/// # Arguments
///
/// * `path` - The `SQLite` file to use. An in-memory store is used when absent.
///
/// # Errors
///
/// Returns an error if the database cannot be opened.
pub fn open_preference_store(path: Option<&Path>) -> Result<SqlitePreferenceStore, ApiError> {
    let store: SqlitePreferenceStore = match path {
        Some(path) => SqlitePreferenceStore::new_with_file(path)?,
        None => SqlitePreferenceStore::new_in_memory()?,
    };
    Ok(store)
}

/// The whole dashboard.
#[derive(Debug)]
pub struct SchoolAdmin<S: PreferenceStore> {
    sidenav: SidenavController<S>,
    last_write: Option<bool>,
    students: RecordCollection<Student>,
    teachers: RecordCollection<Teacher>,
    holidays: RecordCollection<Holiday>,
    events: RecordCollection<Event>,
    editor: Option<StepFormSession<RuleValidator>>,
    toasts: NoticeLog,
    inbox: Inbox,
    today: Date,
}

impl<S: PreferenceStore> SchoolAdmin<S> {
    /// Creates a dashboard holding the seed records and notifications.
    ///
    /// # Arguments
    ///
    /// * `config` - Sidebar breakpoint and storage key
    /// * `store` - The durable preference store
    /// * `width` - The initial viewport width
    /// * `today` - The reference date for age and calendar rules
    ///
    /// # Errors
    ///
    /// Returns an error if the seed data cannot be parsed.
    pub fn new(
        config: SidenavConfig,
        store: S,
        width: u32,
        today: Date,
    ) -> Result<Self, ApiError> {
        let mut admin: Self = Self::empty(config, store, width, today);
        admin.students = RecordCollection::new(seed::students()?);
        admin.teachers = RecordCollection::new(seed::teachers()?);
        admin.holidays = RecordCollection::new(seed::holidays()?);
        admin.events = RecordCollection::new(seed::events()?);
        admin.inbox = Inbox::new(seed::notifications());
        Ok(admin)
    }

    /// Creates a dashboard with no records and an empty inbox.
    #[must_use]
    pub fn empty(config: SidenavConfig, store: S, width: u32, today: Date) -> Self {
        info!(%today, width, "Starting school admin");
        Self {
            sidenav: SidenavController::new(config, store, width),
            last_write: None,
            students: RecordCollection::new(Vec::new()),
            teachers: RecordCollection::new(Vec::new()),
            holidays: RecordCollection::new(Vec::new()),
            events: RecordCollection::new(Vec::new()),
            editor: None,
            toasts: NoticeLog::new(),
            inbox: Inbox::default(),
            today,
        }
    }

    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    #[must_use]
    pub const fn students(&self) -> &RecordCollection<Student> {
        &self.students
    }

    #[must_use]
    pub const fn teachers(&self) -> &RecordCollection<Teacher> {
        &self.teachers
    }

    #[must_use]
    pub const fn holidays(&self) -> &RecordCollection<Holiday> {
        &self.holidays
    }

    #[must_use]
    pub const fn events(&self) -> &RecordCollection<Event> {
        &self.events
    }

    #[must_use]
    pub const fn sidenav(&self) -> &SidenavController<S> {
        &self.sidenav
    }

    /// Takes the transient notices raised since the last call.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.toasts.drain()
    }

    // ------------------------------------------------------------------
    // Sidebar
    // ------------------------------------------------------------------

    /// Returns the sidebar as currently rendered.
    #[must_use]
    pub const fn sidebar(&self) -> SidebarState {
        SidebarState {
            collapsed: self.sidenav.collapsed(),
            preference: self.sidenav.user_preference(),
            viewport: self.sidenav.viewport().class(),
            width: self.sidenav.viewport().width(),
            persisted: self.last_write,
        }
    }

    /// Flips the sidebar from the collapse button.
    pub fn toggle_sidebar(&mut self) -> SidebarState {
        let outcome: PreferenceWrite = self.sidenav.toggle();
        self.record_write(outcome)
    }

    /// Collapses or expands the sidebar.
    pub fn set_sidebar_collapsed(&mut self, request: SetSidebarRequest) -> SidebarState {
        let outcome: PreferenceWrite = self.sidenav.set_collapsed(request.collapsed);
        self.record_write(outcome)
    }

    /// Stores a desktop collapse preference directly.
    pub fn set_sidebar_preference(&mut self, request: SetSidebarRequest) -> SidebarState {
        let outcome: PreferenceWrite = self.sidenav.set_user_preference(request.collapsed);
        self.record_write(outcome)
    }

    /// Reports a new viewport width.
    pub fn resize(&mut self, request: ResizeRequest) -> SidebarState {
        self.sidenav.handle_resize(request.width);
        self.last_write = None;
        self.sidebar()
    }

    fn record_write(&mut self, outcome: PreferenceWrite) -> SidebarState {
        self.last_write = match outcome {
            PreferenceWrite::Saved => Some(true),
            PreferenceWrite::NotPersisted => None,
            PreferenceWrite::Failed(e) => {
                let notice: Notice = Notice::preference_not_saved(&e.to_string());
                self.toasts.notify(notice.clone());
                self.inbox.notify(notice);
                Some(false)
            }
        };
        self.sidebar()
    }

    // ------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------

    /// Lists one collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the grade filter is malformed or used outside
    /// the student collection, or if the sort does not apply to the
    /// collection.
    pub fn list_records(
        &self,
        request: &ListRecordsRequest,
    ) -> Result<ListRecordsResponse, ApiError> {
        let search: &str = request.search.as_deref().unwrap_or_default();

        if request.kind != RecordKind::Student && request.grade.is_some() {
            return Err(ApiError::InvalidInput {
                field: String::from("grade"),
                message: format!("the {} collection has no grades", request.kind),
            });
        }

        match request.kind {
            RecordKind::Student => {
                let grade: Option<Grade> = request.grade.as_deref().map(str::parse).transpose()?;
                let mut filter: RecordFilter<'_, Student> = RecordFilter::search(search);
                if let Some(grade) = grade {
                    filter = filter.narrowed_by(move |student: &Student| student.grade == grade);
                }
                let sort: Option<Comparator<Student>> = match request.sort {
                    None => None,
                    Some(SortKey::RollNumber) => Some(Student::by_roll_number),
                    Some(SortKey::Grade) => Some(Student::by_grade),
                    Some(other) => return Err(unsupported_sort(RecordKind::Student, other)),
                };
                Ok(listing(&self.students, &filter, sort))
            }
            RecordKind::Teacher => {
                if let Some(other) = request.sort {
                    return Err(unsupported_sort(RecordKind::Teacher, other));
                }
                Ok(listing(&self.teachers, &RecordFilter::search(search), None))
            }
            RecordKind::Holiday => {
                let sort: Option<Comparator<Holiday>> = match request.sort {
                    None => None,
                    Some(SortKey::Date) => Some(Holiday::by_date),
                    Some(other) => return Err(unsupported_sort(RecordKind::Holiday, other)),
                };
                Ok(listing(&self.holidays, &RecordFilter::search(search), sort))
            }
            RecordKind::Event => {
                let sort: Option<Comparator<Event>> = match request.sort {
                    None => None,
                    Some(SortKey::Date) => Some(Event::by_date),
                    Some(SortKey::UpcomingFirst) => Some(Event::upcoming_first),
                    Some(other) => return Err(unsupported_sort(RecordKind::Event, other)),
                };
                Ok(listing(&self.events, &RecordFilter::search(search), sort))
            }
        }
    }

    // ------------------------------------------------------------------
    // Editor
    // ------------------------------------------------------------------

    /// Opens the record editor, replacing any editor already open.
    ///
    /// # Errors
    ///
    /// Returns an error if an edit targets a record that does not exist.
    pub fn open_editor(&mut self, request: &OpenEditorRequest) -> Result<EditorView, ApiError> {
        let id: Option<&RecordId> = request.id.as_ref();
        let session: StepFormSession<RuleValidator> = match request.kind {
            RecordKind::Student => open_session(&self.students, id, self.today)?,
            RecordKind::Teacher => open_session(&self.teachers, id, self.today)?,
            RecordKind::Holiday => open_session(&self.holidays, id, self.today)?,
            RecordKind::Event => open_session(&self.events, id, self.today)?,
        };

        if let Some(previous) = self.editor.replace(session) {
            debug!(kind = %previous.kind(), "Discarded open editor");
        }
        self.editor_view()
    }

    /// Returns the open editor.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoEditorOpen` if no editor is open.
    pub fn editor_view(&self) -> Result<EditorView, ApiError> {
        self.editor
            .as_ref()
            .map(view_of)
            .ok_or(ApiError::NoEditorOpen)
    }

    /// Enters values into the open editor.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoEditorOpen` if no editor is open.
    pub fn set_editor_fields(&mut self, values: &Draft) -> Result<EditorView, ApiError> {
        let session: &mut StepFormSession<RuleValidator> =
            self.editor.as_mut().ok_or(ApiError::NoEditorOpen)?;
        session.set_fields(values);
        Ok(view_of(session))
    }

    /// Validates the visible step and moves forward if it passes.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoEditorOpen` if no editor is open. A failing step
    /// is not an error; see `StepResponse::advanced`.
    pub fn editor_next(&mut self) -> Result<StepResponse, ApiError> {
        let session: &mut StepFormSession<RuleValidator> =
            self.editor.as_mut().ok_or(ApiError::NoEditorOpen)?;
        let advanced: bool = session.go_next(&mut self.toasts);
        Ok(StepResponse {
            advanced,
            editor: view_of(session),
        })
    }

    /// Moves back one step without validating.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoEditorOpen` if no editor is open.
    pub fn editor_prev(&mut self) -> Result<StepResponse, ApiError> {
        let session: &mut StepFormSession<RuleValidator> =
            self.editor.as_mut().ok_or(ApiError::NoEditorOpen)?;
        session.go_prev();
        Ok(StepResponse {
            advanced: true,
            editor: view_of(session),
        })
    }

    /// Closes the editor and discards its draft.
    ///
    /// # Returns
    ///
    /// `true` if an editor was open.
    pub fn close_editor(&mut self) -> bool {
        self.editor.take().is_some()
    }

    /// Validates the whole draft and saves it.
    ///
    /// The editor closes on success. On failure it stays open with the
    /// field errors attached.
    ///
    /// # Errors
    ///
    /// Returns an error if no editor is open, the editor is not on its last
    /// step, or any field fails validation.
    pub fn submit_editor(&mut self) -> Result<MutationResponse, ApiError> {
        let session: &mut StepFormSession<RuleValidator> =
            self.editor.as_mut().ok_or(ApiError::NoEditorOpen)?;
        let submission: Submission = session.submit(&mut self.toasts)?;

        let response: MutationResponse = match submission.kind {
            RecordKind::Student => mutation(apply_submission(&mut self.students, submission)?),
            RecordKind::Teacher => mutation(apply_submission(&mut self.teachers, submission)?),
            RecordKind::Holiday => mutation(apply_submission(&mut self.holidays, submission)?),
            RecordKind::Event => mutation(apply_submission(&mut self.events, submission)?),
        };

        self.editor = None;
        Ok(self.publish(response))
    }

    // ------------------------------------------------------------------
    // Direct mutations
    // ------------------------------------------------------------------

    /// Merges values over an existing record.
    ///
    /// Each patched field must pass its rule; untouched fields are not
    /// rechecked. An unknown id changes nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ValidationFailed` if a patched value breaks its rule.
    pub fn update_record(
        &mut self,
        request: &UpdateRecordRequest,
    ) -> Result<MutationResponse, ApiError> {
        let (id, patch, today) = (&request.id, &request.fields, self.today);
        let response: MutationResponse = match request.kind {
            RecordKind::Student => update_in(&mut self.students, id, patch, today)?,
            RecordKind::Teacher => update_in(&mut self.teachers, id, patch, today)?,
            RecordKind::Holiday => update_in(&mut self.holidays, id, patch, today)?,
            RecordKind::Event => update_in(&mut self.events, id, patch, today)?,
        };
        Ok(self.publish(response))
    }

    /// Describes the confirmation prompt for removing a record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if the record does not exist.
    pub fn removal_request(
        &self,
        kind: RecordKind,
        id: &RecordId,
    ) -> Result<RemovalRequest, ApiError> {
        let name: Option<String> = match kind {
            RecordKind::Student => display_name(&self.students, id),
            RecordKind::Teacher => display_name(&self.teachers, id),
            RecordKind::Holiday => display_name(&self.holidays, id),
            RecordKind::Event => display_name(&self.events, id),
        };
        let name: String = name.ok_or_else(|| not_found(kind, id))?;
        Ok(RemovalRequest {
            kind,
            id: id.clone(),
            name,
        })
    }

    /// Removes a record if the request carries the user's confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error only if applying the removal fails.
    pub fn remove_record(
        &mut self,
        request: &RemoveRecordRequest,
    ) -> Result<MutationResponse, ApiError> {
        let mut answer: PresetAnswer = PresetAnswer(request.confirm);
        self.remove_with(request.kind, &request.id, &mut answer)
    }

    /// Removes a record after asking `surface` for confirmation.
    ///
    /// A declined prompt or an unknown id changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error only if applying the removal fails.
    pub fn remove_with(
        &mut self,
        kind: RecordKind,
        id: &RecordId,
        surface: &mut dyn ConfirmationSurface,
    ) -> Result<MutationResponse, ApiError> {
        let response: MutationResponse = match kind {
            RecordKind::Student => remove_in(&mut self.students, id, surface)?,
            RecordKind::Teacher => remove_in(&mut self.teachers, id, surface)?,
            RecordKind::Holiday => remove_in(&mut self.holidays, id, surface)?,
            RecordKind::Event => remove_in(&mut self.events, id, surface)?,
        };
        Ok(self.publish(response))
    }

    fn publish(&mut self, response: MutationResponse) -> MutationResponse {
        if let Some(notice) = &response.notice {
            self.toasts.notify(notice.clone());
        }
        response
    }

    // ------------------------------------------------------------------
    // Notification bell
    // ------------------------------------------------------------------

    #[must_use]
    pub fn notifications(&self) -> NotificationsResponse {
        NotificationsResponse {
            items: self.inbox.items().to_vec(),
            unread_count: self.inbox.unread_count(),
        }
    }

    /// Marks one notification as read.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if no notification has the id.
    pub fn mark_notification_read(
        &mut self,
        request: &MarkReadRequest,
    ) -> Result<NotificationsResponse, ApiError> {
        if !self.inbox.mark_as_read(&request.id) {
            return Err(ApiError::ResourceNotFound {
                resource_type: String::from("Notification"),
                message: format!("no notification with id '{}'", request.id),
            });
        }
        Ok(self.notifications())
    }

    pub fn mark_all_notifications_read(&mut self) -> NotificationsResponse {
        self.inbox.mark_all_as_read();
        self.notifications()
    }

    // ------------------------------------------------------------------
    // Dashboard, calendar and export
    // ------------------------------------------------------------------

    /// Summarizes the collections for the dashboard cards.
    #[must_use]
    pub fn dashboard(&self) -> DashboardOverview {
        let upcoming: Vec<&Event> = self
            .events
            .list(&RecordFilter::all(), Some(Event::upcoming_first))
            .into_iter()
            .filter(|event| event.is_upcoming())
            .collect();
        let total_students: usize = self.students.len();

        DashboardOverview {
            total_students,
            total_students_display: format_number(
                u64::try_from(total_students).unwrap_or(u64::MAX),
            ),
            total_teachers: self.teachers.len(),
            upcoming_events: upcoming.len(),
            holidays: self.holidays.len(),
            next_events: upcoming
                .into_iter()
                .take(NEXT_EVENTS_SHOWN)
                .cloned()
                .collect(),
        }
    }

    /// Returns the holidays that fall on `date`, in insertion order.
    #[must_use]
    pub fn holidays_on(&self, date: Date) -> Vec<Holiday> {
        self.holidays
            .records()
            .iter()
            .filter(|holiday| holiday.falls_on(date))
            .cloned()
            .collect()
    }

    /// Exports a whole collection as CSV, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV writer fails.
    pub fn export(&self, kind: RecordKind) -> Result<ExportResponse, ApiError> {
        let (filename, csv): (String, String) = match kind {
            RecordKind::Student => (
                export::filename::<Student>(),
                export::to_csv(self.students.records())?,
            ),
            RecordKind::Teacher => (
                export::filename::<Teacher>(),
                export::to_csv(self.teachers.records())?,
            ),
            RecordKind::Holiday => (
                export::filename::<Holiday>(),
                export::to_csv(self.holidays.records())?,
            ),
            RecordKind::Event => (
                export::filename::<Event>(),
                export::to_csv(self.events.records())?,
            ),
        };
        Ok(ExportResponse { filename, csv })
    }
}

fn listing<R: Record + Into<RecordPayload>>(
    collection: &RecordCollection<R>,
    filter: &RecordFilter<'_, R>,
    sort: Option<Comparator<R>>,
) -> ListRecordsResponse {
    ListRecordsResponse {
        kind: R::KIND,
        total: collection.len(),
        records: collection
            .list(filter, sort)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect(),
    }
}

fn open_session<R: Record>(
    collection: &RecordCollection<R>,
    id: Option<&RecordId>,
    today: Date,
) -> Result<StepFormSession<RuleValidator>, ApiError> {
    let validator: RuleValidator = RuleValidator::new(R::RULES, today);
    match id {
        None => Ok(StepFormSession::for_add::<R>(validator)),
        Some(id) => collection
            .get(id)
            .map(|record| StepFormSession::for_edit(record, validator))
            .ok_or_else(|| not_found(R::KIND, id)),
    }
}

fn view_of(session: &StepFormSession<RuleValidator>) -> EditorView {
    let (title, fields): (String, Vec<String>) = session.step().map_or_else(
        || (String::new(), Vec::new()),
        |step| {
            (
                step.title.to_string(),
                step.fields.iter().map(ToString::to_string).collect(),
            )
        },
    );

    EditorView {
        kind: session.kind(),
        mode: session.mode().clone(),
        step: session.current_step(),
        step_count: session.step_count(),
        title,
        fields,
        is_last_step: session.is_last_step(),
        draft: session.draft().clone(),
        errors: session.field_errors().to_vec(),
    }
}

fn update_in<R: Record + Into<RecordPayload>>(
    collection: &mut RecordCollection<R>,
    id: &RecordId,
    patch: &Draft,
    today: Date,
) -> Result<MutationResponse, ApiError> {
    let Some(existing) = collection.get(id) else {
        debug!(kind = %R::KIND, id = %id, "Update ignored, record not found");
        return Ok(MutationResponse::unchanged(R::KIND));
    };

    let mut merged: Draft = existing.to_draft();
    merged.merge(patch);
    let validator: RuleValidator = RuleValidator::new(R::RULES, today);
    let patched: Vec<&str> = patch.iter().map(|(field, _)| field).collect();
    let errors: Vec<FieldError> = validator.validate(&patched, &merged);
    if !errors.is_empty() {
        return Err(ApiError::ValidationFailed { errors });
    }

    let command: RecordCommand = RecordCommand::Update {
        id: id.clone(),
        patch: patch.clone(),
    };
    Ok(mutation(apply(collection, command)?))
}

fn remove_in<R: Record + Into<RecordPayload>>(
    collection: &mut RecordCollection<R>,
    id: &RecordId,
    surface: &mut dyn ConfirmationSurface,
) -> Result<MutationResponse, ApiError> {
    let Some(confirmed) = collection.request_removal(id, surface) else {
        return Ok(MutationResponse::unchanged(R::KIND));
    };
    Ok(mutation(apply(collection, RecordCommand::Remove { confirmed })?))
}

fn mutation<R: Record + Into<RecordPayload>>(result: TransitionResult<R>) -> MutationResponse {
    MutationResponse {
        kind: R::KIND,
        record: result.record.map(Into::into),
        notice: result.notice,
    }
}

fn display_name<R: Record>(collection: &RecordCollection<R>, id: &RecordId) -> Option<String> {
    collection
        .get(id)
        .map(|record| record.display_name().to_string())
}

fn not_found(kind: RecordKind, id: &RecordId) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: kind.to_string(),
        message: format!("no {kind} with id '{id}'"),
    }
}

fn unsupported_sort(kind: RecordKind, sort: SortKey) -> ApiError {
    ApiError::Unsupported {
        kind,
        operation: format!("sorting by {sort:?}"),
    }
}
