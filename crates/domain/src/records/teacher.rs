// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FormStep, Record, required_date, required_parsed, required_text};
use crate::draft::Draft;
use crate::error::DomainError;
use crate::types::{ActivityStatus, Department, RecordId, RecordKind, iso_date};
use crate::validation::{Constraint, FieldRule};
use serde::{Deserialize, Serialize};
use time::Date;

const TEACHER_RULES: &[FieldRule] = &[
    FieldRule::required("name", "Full Name", &[]),
    FieldRule::required("email", "Email", &[Constraint::Email]),
    FieldRule::required("subject", "Subject", &[]),
    FieldRule::required(
        "department",
        "Department",
        &[Constraint::OneOf(Department::OPTIONS)],
    ),
    FieldRule::required("qualification", "Qualification", &[]),
    FieldRule::required("phone", "Phone Number", &[]),
    FieldRule::required("dateOfJoining", "Date of Joining", &[Constraint::Date]),
    FieldRule::optional(
        "status",
        "Status",
        &[Constraint::OneOf(ActivityStatus::OPTIONS)],
    ),
];

const TEACHER_STEPS: &[FormStep] = &[FormStep {
    title: "Teacher Details",
    fields: &[
        "name",
        "email",
        "subject",
        "department",
        "qualification",
        "phone",
        "dateOfJoining",
        "status",
    ],
}];

/// A member of the teaching staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub department: Department,
    pub qualification: String,
    pub phone: String,
    #[serde(with = "iso_date")]
    pub date_of_joining: Date,
    pub status: ActivityStatus,
}

impl Record for Teacher {
    const KIND: RecordKind = RecordKind::Teacher;
    const RULES: &'static [FieldRule] = TEACHER_RULES;
    const STEPS: &'static [FormStep] = TEACHER_STEPS;
    const DEFAULTS: &'static [(&'static str, &'static str)] = &[("status", "active")];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: &Draft) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: required_text(draft, "name")?,
            email: required_text(draft, "email")?,
            subject: required_text(draft, "subject")?,
            department: required_parsed(draft, "department")?,
            qualification: required_text(draft, "qualification")?,
            phone: required_text(draft, "phone")?,
            date_of_joining: required_date(draft, "dateOfJoining")?,
            status: required_parsed(draft, "status")?,
        })
    }

    fn to_draft(&self) -> Draft {
        [
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("subject", self.subject.clone()),
            ("department", self.department.to_string()),
            ("qualification", self.qualification.clone()),
            ("phone", self.phone.clone()),
            ("dateOfJoining", self.date_of_joining.to_string()),
            ("status", self.status.to_string()),
        ]
        .into_iter()
        .collect()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.subject.as_str(),
            self.department.as_str(),
        ]
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
