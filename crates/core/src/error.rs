// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_admin_domain::{DomainError, FieldError, RecordKind};
use thiserror::Error;

/// Errors that can occur while applying a record command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The submitted values could not be turned into a record.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),

    /// A submission was routed to a collection of another kind.
    #[error("A {found} submission cannot be applied to the {expected} collection")]
    WrongCollection {
        expected: RecordKind,
        found: RecordKind,
    },
}

/// Errors reported by a `PreferenceStore`.
///
/// The sidebar controller never surfaces these to its caller; they are
/// logged and reported through `PreferenceWrite::Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// The backing store could not be read.
    #[error("Failed to read preference '{key}': {message}")]
    Read { key: String, message: String },

    /// The backing store rejected the write.
    #[error("Failed to write preference '{key}': {message}")]
    Write { key: String, message: String },

    /// The stored value is not a JSON boolean.
    #[error("Stored preference '{key}' is not a boolean: {value}")]
    Malformed { key: String, value: String },
}

/// Why a form step or submission was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Submission was attempted before the last step.
    #[error("Submission is only allowed from the last step (on step {current} of {last})")]
    NotAtLastStep { current: usize, last: usize },

    /// One or more fields failed their rules.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
}

impl ValidationFailure {
    /// Returns the field errors, empty when the failure is positional.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::NotAtLastStep { .. } => &[],
            Self::Invalid(errors) => errors,
        }
    }
}
