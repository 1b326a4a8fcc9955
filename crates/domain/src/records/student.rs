// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    FormStep, Record, optional_date, optional_parsed, optional_text, required_date,
    required_parsed, required_text,
};
use crate::draft::Draft;
use crate::error::DomainError;
use crate::types::{
    ActivityStatus, BloodGroup, EmergencyRelation, Gender, Grade, RecordId, RecordKind, Section,
    iso_date,
};
use crate::validation::{Constraint, FieldRule};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::Date;

const GRADE_OPTIONS: &[&str] = &[
    "Grade 1", "Grade 2", "Grade 3", "Grade 4", "Grade 5", "Grade 6", "Grade 7", "Grade 8",
    "Grade 9", "Grade 10", "Grade 11", "Grade 12",
];

const STUDENT_RULES: &[FieldRule] = &[
    // Personal
    FieldRule::required("name", "Full Name", &[Constraint::MinLength(3)]),
    FieldRule::required("email", "Email Address", &[Constraint::Email]),
    FieldRule::required("gender", "Gender", &[Constraint::OneOf(Gender::OPTIONS)]),
    FieldRule::required(
        "dateOfBirth",
        "Date of Birth",
        &[Constraint::Date, Constraint::AgeBetween { min: 5, max: 25 }],
    ),
    FieldRule::required(
        "bloodGroup",
        "Blood Group",
        &[Constraint::OneOf(BloodGroup::OPTIONS)],
    ),
    FieldRule::required("nationality", "Nationality", &[]),
    FieldRule::optional("religion", "Religion", &[]),
    // Academic
    FieldRule::required("rollNumber", "Roll Number", &[Constraint::Alphanumeric]),
    FieldRule::required("grade", "Grade", &[Constraint::OneOf(GRADE_OPTIONS)]),
    FieldRule::required("class", "Class/Section", &[Constraint::OneOf(Section::OPTIONS)]),
    FieldRule::required("admissionDate", "Admission Date", &[Constraint::Date]),
    FieldRule::optional("previousSchool", "Previous School", &[]),
    FieldRule::optional(
        "status",
        "Status",
        &[Constraint::OneOf(ActivityStatus::OPTIONS)],
    ),
    // Contact
    FieldRule::required("contact", "Contact Number", &[Constraint::Phone]),
    FieldRule::required("parentName", "Parent/Guardian Name", &[]),
    FieldRule::required("parentEmail", "Parent Email", &[Constraint::Email]),
    FieldRule::optional("parentOccupation", "Parent Occupation", &[]),
    FieldRule::required("address", "Address", &[]),
    FieldRule::required("city", "City", &[]),
    FieldRule::required("state", "State", &[]),
    FieldRule::required("zipCode", "ZIP Code", &[Constraint::ZipCode]),
    // Additional
    FieldRule::required("emergencyContactName", "Emergency Contact Name", &[]),
    FieldRule::required("emergencyContact", "Emergency Contact", &[Constraint::Phone]),
    FieldRule::required(
        "emergencyRelation",
        "Relationship",
        &[Constraint::OneOf(EmergencyRelation::OPTIONS)],
    ),
    FieldRule::optional("medicalConditions", "Medical Conditions", &[]),
    FieldRule::optional("allergies", "Allergies", &[]),
];

const STUDENT_STEPS: &[FormStep] = &[
    FormStep {
        title: "Personal Info",
        fields: &[
            "name",
            "email",
            "gender",
            "dateOfBirth",
            "bloodGroup",
            "nationality",
        ],
    },
    FormStep {
        title: "Academic Info",
        fields: &["rollNumber", "grade", "class", "admissionDate"],
    },
    FormStep {
        title: "Contact Info",
        fields: &[
            "contact",
            "parentName",
            "parentEmail",
            "address",
            "city",
            "state",
            "zipCode",
        ],
    },
    FormStep {
        title: "Additional Info",
        fields: &[
            "emergencyContactName",
            "emergencyContact",
            "emergencyRelation",
            "medicalConditions",
            "allergies",
        ],
    },
];

/// An enrolled student.
///
/// The core fields are always present. The extended profile captured by
/// the enrollment wizard is optional because older records predate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub grade: Grade,
    #[serde(rename = "class")]
    pub section: Section,
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
    pub parent_name: String,
    pub contact: String,
    pub status: ActivityStatus,
    pub roll_number: Option<String>,
    pub gender: Option<Gender>,
    pub blood_group: Option<BloodGroup>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_relation: Option<EmergencyRelation>,
    #[serde(with = "iso_date::option", default)]
    pub admission_date: Option<Date>,
    pub previous_school: Option<String>,
    pub medical_conditions: Option<String>,
    pub allergies: Option<String>,
    pub parent_email: Option<String>,
    pub parent_occupation: Option<String>,
    pub nationality: Option<String>,
    pub religion: Option<String>,
}

impl Student {
    /// Orders by roll number, with missing roll numbers first.
    #[must_use]
    pub fn by_roll_number(a: &Self, b: &Self) -> Ordering {
        a.roll_number
            .as_deref()
            .unwrap_or_default()
            .cmp(b.roll_number.as_deref().unwrap_or_default())
    }

    /// Orders by grade level, lowest first.
    #[must_use]
    pub fn by_grade(a: &Self, b: &Self) -> Ordering {
        a.grade.cmp(&b.grade)
    }
}

impl Record for Student {
    const KIND: RecordKind = RecordKind::Student;
    const RULES: &'static [FieldRule] = STUDENT_RULES;
    const STEPS: &'static [FormStep] = STUDENT_STEPS;
    const DEFAULTS: &'static [(&'static str, &'static str)] = &[("status", "active")];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: &Draft) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: required_text(draft, "name")?,
            email: required_text(draft, "email")?,
            grade: required_parsed(draft, "grade")?,
            section: required_parsed(draft, "class")?,
            date_of_birth: required_date(draft, "dateOfBirth")?,
            parent_name: required_text(draft, "parentName")?,
            contact: required_text(draft, "contact")?,
            status: required_parsed(draft, "status")?,
            roll_number: optional_text(draft, "rollNumber"),
            gender: optional_parsed(draft, "gender")?,
            blood_group: optional_parsed(draft, "bloodGroup")?,
            address: optional_text(draft, "address"),
            city: optional_text(draft, "city"),
            state: optional_text(draft, "state"),
            zip_code: optional_text(draft, "zipCode"),
            emergency_contact: optional_text(draft, "emergencyContact"),
            emergency_contact_name: optional_text(draft, "emergencyContactName"),
            emergency_relation: optional_parsed(draft, "emergencyRelation")?,
            admission_date: optional_date(draft, "admissionDate")?,
            previous_school: optional_text(draft, "previousSchool"),
            medical_conditions: optional_text(draft, "medicalConditions"),
            allergies: optional_text(draft, "allergies"),
            parent_email: optional_text(draft, "parentEmail"),
            parent_occupation: optional_text(draft, "parentOccupation"),
            nationality: optional_text(draft, "nationality"),
            religion: optional_text(draft, "religion"),
        })
    }

    fn to_draft(&self) -> Draft {
        let mut draft: Draft = Draft::new();
        draft.set("name", self.name.as_str());
        draft.set("email", self.email.as_str());
        draft.set("grade", self.grade.to_string());
        draft.set("class", self.section.as_str());
        draft.set("dateOfBirth", self.date_of_birth.to_string());
        draft.set("parentName", self.parent_name.as_str());
        draft.set("contact", self.contact.as_str());
        draft.set("status", self.status.as_str());
        draft.set_opt("rollNumber", self.roll_number.as_ref());
        draft.set_opt("gender", self.gender);
        draft.set_opt("bloodGroup", self.blood_group);
        draft.set_opt("address", self.address.as_ref());
        draft.set_opt("city", self.city.as_ref());
        draft.set_opt("state", self.state.as_ref());
        draft.set_opt("zipCode", self.zip_code.as_ref());
        draft.set_opt("emergencyContact", self.emergency_contact.as_ref());
        draft.set_opt("emergencyContactName", self.emergency_contact_name.as_ref());
        draft.set_opt("emergencyRelation", self.emergency_relation);
        draft.set_opt("admissionDate", self.admission_date);
        draft.set_opt("previousSchool", self.previous_school.as_ref());
        draft.set_opt("medicalConditions", self.medical_conditions.as_ref());
        draft.set_opt("allergies", self.allergies.as_ref());
        draft.set_opt("parentEmail", self.parent_email.as_ref());
        draft.set_opt("parentOccupation", self.parent_occupation.as_ref());
        draft.set_opt("nationality", self.nationality.as_ref());
        draft.set_opt("religion", self.religion.as_ref());
        draft
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![self.name.as_str(), self.email.as_str()];
        if let Some(roll_number) = &self.roll_number {
            fields.push(roll_number);
        }
        fields
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
