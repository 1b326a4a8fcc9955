// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod event;
mod holiday;
mod student;
mod teacher;

pub use event::Event;
pub use holiday::Holiday;
pub use student::Student;
pub use teacher::Teacher;

use crate::draft::Draft;
use crate::error::DomainError;
use crate::types::{RecordId, RecordKind, parse_iso_date};
use crate::validation::FieldRule;
use std::str::FromStr;
use time::Date;

/// One page of a multi-step form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStep {
    /// The step title shown in the progress header.
    pub title: &'static str,
    /// The fields that must pass validation before leaving this step.
    pub fields: &'static [&'static str],
}

/// A record type managed by a record collection.
///
/// Records move between two shapes: the typed struct, and the flat
/// [`Draft`] the data-entry surface works with. `from_draft` is the only
/// way raw input becomes a record.
pub trait Record: Clone + std::fmt::Debug {
    /// The collection this record belongs to.
    const KIND: RecordKind;

    /// Validation rules for every editable field.
    const RULES: &'static [FieldRule];

    /// The editor layout. Single-step forms validate everything on submit.
    const STEPS: &'static [FormStep];

    /// Values filled in on add for fields the draft leaves blank.
    const DEFAULTS: &'static [(&'static str, &'static str)];

    /// Returns the record identifier.
    fn id(&self) -> &RecordId;

    /// Builds a record from a draft.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or a value cannot be
    /// parsed into its typed form.
    fn from_draft(id: RecordId, draft: &Draft) -> Result<Self, DomainError>;

    /// Flattens the record into a draft, omitting absent optional fields.
    fn to_draft(&self) -> Draft;

    /// The text fields searched by the list filter.
    fn search_fields(&self) -> Vec<&str>;

    /// The human-readable name used in notices and confirmations.
    fn display_name(&self) -> &str;

    /// Returns true if any search field contains `needle`, ignoring case.
    ///
    /// An empty needle matches every record.
    fn matches_search(&self, needle: &str) -> bool {
        let needle: String = needle.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Column order for tabular export: `id` followed by every rule field.
    fn columns() -> Vec<&'static str> {
        std::iter::once("id")
            .chain(Self::RULES.iter().map(|rule| rule.name))
            .collect()
    }
}

pub(crate) fn required_text(draft: &Draft, field: &str) -> Result<String, DomainError> {
    draft
        .value(field)
        .map(str::to_string)
        .ok_or_else(|| DomainError::MissingField(field.to_string()))
}

pub(crate) fn optional_text(draft: &Draft, field: &str) -> Option<String> {
    draft.value(field).map(str::to_string)
}

pub(crate) fn required_parsed<T>(draft: &Draft, field: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    draft
        .value(field)
        .ok_or_else(|| DomainError::MissingField(field.to_string()))?
        .parse()
}

pub(crate) fn optional_parsed<T>(draft: &Draft, field: &str) -> Result<Option<T>, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    draft.value(field).map(str::parse::<T>).transpose()
}

pub(crate) fn required_date(draft: &Draft, field: &str) -> Result<Date, DomainError> {
    let value: &str = draft
        .value(field)
        .ok_or_else(|| DomainError::MissingField(field.to_string()))?;
    parse_iso_date(value)
}

pub(crate) fn optional_date(draft: &Draft, field: &str) -> Result<Option<Date>, DomainError> {
    draft.value(field).map(parse_iso_date).transpose()
}
