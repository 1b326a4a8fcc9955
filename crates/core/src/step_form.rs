// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationFailure;
use school_admin_domain::{Draft, FieldError, FormStep, Record, RecordId, RecordKind, Validator};
use school_admin_notifications::{Notice, NotificationSink};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Whether an editor session creates a record or changes an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "lowercase")]
pub enum EditorMode {
    Add,
    Edit(RecordId),
}

/// A validated draft ready to be applied to its collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The collection the draft belongs to.
    pub kind: RecordKind,
    /// Add or edit.
    pub mode: EditorMode,
    /// Every value entered across all steps.
    pub draft: Draft,
}

/// An open record editor.
///
/// A session walks the user through the record's form steps. Advancing
/// validates only the current step; submitting validates everything. The
/// draft survives back-navigation. Dropping the session discards it.
#[derive(Debug, Clone)]
pub struct StepFormSession<V: Validator> {
    kind: RecordKind,
    steps: &'static [FormStep],
    validator: V,
    mode: EditorMode,
    step_index: usize,
    draft: Draft,
    errors: Vec<FieldError>,
}

impl<V: Validator> StepFormSession<V> {
    /// Opens an empty editor for a new record.
    #[must_use]
    pub fn for_add<R: Record>(validator: V) -> Self {
        debug!(kind = %R::KIND, "Editor opened for add");
        Self::new(R::KIND, R::STEPS, validator, EditorMode::Add, Draft::new())
    }

    /// Opens an editor pre-populated from an existing record.
    #[must_use]
    pub fn for_edit<R: Record>(record: &R, validator: V) -> Self {
        debug!(kind = %R::KIND, id = %record.id(), "Editor opened for edit");
        Self::new(
            R::KIND,
            R::STEPS,
            validator,
            EditorMode::Edit(record.id().clone()),
            record.to_draft(),
        )
    }

    /// Creates a new `StepFormSession`.
    ///
    /// # Arguments
    ///
    /// * `kind` - The collection being edited
    /// * `steps` - The form layout, one entry per step
    /// * `validator` - Field validation for the record type
    /// * `mode` - Add or edit
    /// * `draft` - Initial values
    #[must_use]
    pub const fn new(
        kind: RecordKind,
        steps: &'static [FormStep],
        validator: V,
        mode: EditorMode,
        draft: Draft,
    ) -> Self {
        Self {
            kind,
            steps,
            validator,
            mode,
            step_index: 0,
            draft,
            errors: Vec::new(),
        }
    }

    /// Returns the zero-based index of the visible step.
    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.step_index
    }

    #[must_use]
    pub const fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the layout of the visible step.
    #[must_use]
    pub fn step(&self) -> Option<&FormStep> {
        self.steps.get(self.step_index)
    }

    /// Returns true on the final step, where the form offers submit.
    #[must_use]
    pub const fn is_last_step(&self) -> bool {
        self.step_index >= self.last_index()
    }

    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    #[must_use]
    pub const fn mode(&self) -> &EditorMode {
        &self.mode
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Returns the errors from the most recent failed advance or submit.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Sets one field value. Any error shown for that field is cleared.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.retain(|e| e.field != field);
    }

    /// Sets several field values at once.
    pub fn set_fields(&mut self, values: &Draft) {
        for (field, value) in values.iter() {
            self.set_field(field, value);
        }
    }

    /// Validates the current step and advances if it passes.
    ///
    /// On failure the step index is unchanged, the field errors are kept
    /// for display and a validation notice is sent to `sink`.
    ///
    /// # Returns
    ///
    /// `true` if the step passed. On the last step a pass does not move.
    pub fn go_next(&mut self, sink: &mut dyn NotificationSink) -> bool {
        let fields: &'static [&'static str] = match self.steps.get(self.step_index) {
            Some(step) => step.fields,
            None => &[],
        };
        let errors: Vec<FieldError> = self.validator.validate(fields, &self.draft);

        if !errors.is_empty() {
            debug!(
                kind = %self.kind,
                step = self.step_index,
                failed = errors.len(),
                "Step validation failed"
            );
            sink.notify(Notice::validation_failed(&errors));
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        self.step_index = (self.step_index + 1).min(self.last_index());
        debug!(kind = %self.kind, step = self.step_index, "Advanced to step");
        true
    }

    /// Returns to the previous step without validating. Stops at the first step.
    pub fn go_prev(&mut self) {
        self.step_index = self.step_index.saturating_sub(1);
        self.errors.clear();
    }

    /// Validates the whole draft and hands it over for applying.
    ///
    /// Every rule of the record type is checked, including fields no step
    /// shows and fields that already passed when their step was left.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure::NotAtLastStep` before the last step,
    /// without validating. Returns `ValidationFailure::Invalid` if any
    /// field fails; a validation notice is sent to `sink`.
    pub fn submit(
        &mut self,
        sink: &mut dyn NotificationSink,
    ) -> Result<Submission, ValidationFailure> {
        if !self.is_last_step() {
            return Err(ValidationFailure::NotAtLastStep {
                current: self.step_index,
                last: self.last_index(),
            });
        }

        let errors: Vec<FieldError> = self
            .validator
            .validate(&self.validator.all_fields(), &self.draft);
        if !errors.is_empty() {
            debug!(kind = %self.kind, failed = errors.len(), "Submission rejected");
            sink.notify(Notice::validation_failed(&errors));
            self.errors.clone_from(&errors);
            return Err(ValidationFailure::Invalid(errors));
        }

        self.errors.clear();
        Ok(Submission {
            kind: self.kind,
            mode: self.mode.clone(),
            draft: self.draft.clone(),
        })
    }

    const fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}
