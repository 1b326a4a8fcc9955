// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod draft;
mod error;
mod format;
mod records;
mod types;
mod validation;
mod viewport;

#[cfg(test)]
mod tests;

pub use draft::Draft;
pub use error::DomainError;
pub use format::{format_number, initials};
pub use records::{Event, FormStep, Holiday, Record, Student, Teacher};
pub use types::{
    ActivityStatus, BloodGroup, Department, EmergencyRelation, EventStatus, Gender, Grade,
    HolidayType, RecordId, RecordKind, Section, parse_iso_date, years_between,
};
pub use validation::{Constraint, FieldError, FieldRule, RuleValidator, Validator, validate_field};
pub use viewport::{Breakpoint, ViewportClass};
