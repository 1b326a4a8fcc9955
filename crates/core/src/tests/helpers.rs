// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PreferenceError, PreferenceStore};
use school_admin_domain::{
    Draft, Event, EventStatus, Holiday, HolidayType, Record, RecordId, RuleValidator, Student,
};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 06 - 01);

pub fn student_validator() -> RuleValidator {
    RuleValidator::new(Student::RULES, TODAY)
}

/// A preference store whose reads and writes can be made to fail.
#[derive(Debug, Default)]
pub struct FlakyPreferenceStore {
    pub stored: Option<bool>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: Vec<bool>,
}

impl FlakyPreferenceStore {
    pub fn holding(value: bool) -> Self {
        Self {
            stored: Some(value),
            ..Self::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            stored: Some(true),
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl PreferenceStore for FlakyPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<bool>, PreferenceError> {
        if self.fail_reads {
            return Err(PreferenceError::Read {
                key: key.to_string(),
                message: String::from("storage disabled"),
            });
        }
        Ok(self.stored)
    }

    fn save(&mut self, key: &str, value: bool) -> Result<(), PreferenceError> {
        if self.fail_writes {
            return Err(PreferenceError::Write {
                key: key.to_string(),
                message: String::from("quota exceeded"),
            });
        }
        self.stored = Some(value);
        self.writes.push(value);
        Ok(())
    }
}

pub fn create_personal_step() -> Draft {
    [
        ("name", "Aarav Sharma"),
        ("email", "aarav.sharma@school.edu"),
        ("gender", "male"),
        ("dateOfBirth", "2012-04-15"),
        ("bloodGroup", "B+"),
        ("nationality", "Indian"),
    ]
    .into_iter()
    .collect()
}

pub fn create_academic_step() -> Draft {
    [
        ("rollNumber", "STU001"),
        ("grade", "Grade 8"),
        ("class", "A"),
        ("admissionDate", "2020-04-01"),
    ]
    .into_iter()
    .collect()
}

pub fn create_contact_step() -> Draft {
    [
        ("contact", "+91 9876543210"),
        ("parentName", "Rajesh Sharma"),
        ("parentEmail", "rajesh.sharma@example.com"),
        ("address", "12 MG Road"),
        ("city", "Mumbai"),
        ("state", "Maharashtra"),
        ("zipCode", "400001"),
    ]
    .into_iter()
    .collect()
}

pub fn create_additional_step() -> Draft {
    [
        ("emergencyContactName", "Priya Sharma"),
        ("emergencyContact", "9876543211"),
        ("emergencyRelation", "Parent"),
    ]
    .into_iter()
    .collect()
}

/// Every wizard field, valid.
pub fn create_complete_student_draft() -> Draft {
    let mut draft: Draft = create_personal_step();
    draft.merge(&create_academic_step());
    draft.merge(&create_contact_step());
    draft.merge(&create_additional_step());
    draft
}

pub fn create_test_student(id: &str, name: &str, grade: &str) -> Student {
    let mut draft: Draft = create_complete_student_draft();
    draft.set("name", name);
    draft.set("grade", grade);
    draft.set("status", "active");
    draft.set("rollNumber", format!("STU{id}"));
    Student::from_draft(RecordId::new(id), &draft).unwrap()
}

pub fn create_test_event(id: &str, status: EventStatus, date: Date) -> Event {
    Event {
        id: RecordId::new(id),
        name: format!("Event {id}"),
        date,
        time: String::from("10:00 AM"),
        location: String::from("Auditorium"),
        description: String::from("School event"),
        status,
    }
}

pub fn create_test_holiday(id: &str, name: &str, date: Date) -> Holiday {
    Holiday {
        id: RecordId::new(id),
        name: String::from(name),
        date,
        holiday_type: HolidayType::National,
        description: format!("{name} holiday"),
    }
}
