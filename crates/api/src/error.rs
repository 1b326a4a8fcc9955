// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use school_admin::{CoreError, ValidationFailure};
use school_admin_domain::{DomainError, FieldError, RecordKind};
use school_admin_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Every variant maps to a stable machine-readable code, see [`ApiError::code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// One or more form fields failed their rules.
    ValidationFailed {
        /// Per-field errors in rule order.
        errors: Vec<FieldError>,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An editor operation was called with no editor open.
    NoEditorOpen,
    /// Submission was attempted before the last form step.
    NotAtLastStep {
        /// The visible step.
        current: usize,
        /// The last step index.
        last: usize,
    },
    /// The operation is not supported for this collection.
    Unsupported {
        /// The collection.
        kind: RecordKind,
        /// What was asked for.
        operation: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the stable code hosts use to branch on the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DomainRuleViolation { .. } => "domain_rule_violation",
            Self::InvalidInput { .. } => "invalid_input",
            Self::ValidationFailed { .. } => "validation_failed",
            Self::ResourceNotFound { .. } => "not_found",
            Self::NoEditorOpen => "no_editor_open",
            Self::NotAtLastStep { .. } => "not_at_last_step",
            Self::Unsupported { .. } => "unsupported",
            Self::Internal { .. } => "internal",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ValidationFailed { errors } => match errors.first() {
                Some(first) if errors.len() > 1 => {
                    write!(f, "{first} (and {} more)", errors.len() - 1)
                }
                Some(first) => write!(f, "{first}"),
                None => write!(f, "Validation failed"),
            },
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::NoEditorOpen => write!(f, "No editor is open"),
            Self::NotAtLastStep { current, last } => {
                write!(
                    f,
                    "Submission is only allowed from the last step (on step {current} of {last})"
                )
            }
            Self::Unsupported { kind, operation } => {
                write!(f, "The {kind} collection does not support {operation}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Field-level problems surface as invalid input so hosts can point at the
/// offending field.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::MissingField(field)
            | DomainError::InvalidField { field, .. }
            | DomainError::UnknownOption { field, .. } => Self::InvalidInput {
                field: field.clone(),
                message: err.to_string(),
            },
            DomainError::InvalidGrade(_) => Self::InvalidInput {
                field: String::from("grade"),
                message: err.to_string(),
            },
            DomainError::DateParseError { .. } => Self::DomainRuleViolation {
                rule: String::from("iso_date"),
                message: err.to_string(),
            },
            DomainError::IdsExhausted(_) => Self::DomainRuleViolation {
                rule: String::from("id_capacity"),
                message: err.to_string(),
            },
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DomainViolation(domain) => Self::from(domain),
            CoreError::WrongCollection { .. } => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}

impl From<ValidationFailure> for ApiError {
    fn from(err: ValidationFailure) -> Self {
        match err {
            ValidationFailure::NotAtLastStep { current, last } => {
                Self::NotAtLastStep { current, last }
            }
            ValidationFailure::Invalid(errors) => Self::ValidationFailed { errors },
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        Self::Internal {
            message: format!("CSV export failed: {err}"),
        }
    }
}
