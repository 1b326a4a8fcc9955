// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::RecordKind;

/// Errors that can occur while turning raw form input into domain records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field the record cannot exist without is absent or blank.
    MissingField(String),
    /// A field value does not satisfy its rule.
    InvalidField {
        /// The field name.
        field: String,
        /// A human-readable description of the problem.
        message: String,
    },
    /// A field value is not one of the allowed options.
    UnknownOption {
        /// The field name.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// Grade is not in `Grade 1` through `Grade 12`.
    InvalidGrade(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The collection has handed out every identifier it can represent.
    IdsExhausted(RecordKind),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing required field '{field}'"),
            Self::InvalidField { field, message } => {
                write!(f, "Invalid value for field '{field}': {message}")
            }
            Self::UnknownOption { field, value } => {
                write!(f, "Unknown option '{value}' for field '{field}'")
            }
            Self::InvalidGrade(value) => write!(f, "Invalid grade: {value}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::IdsExhausted(kind) => write!(f, "No identifiers left for {kind} records"),
        }
    }
}

impl std::error::Error for DomainError {}
