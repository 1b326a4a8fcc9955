// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SchoolAdmin;
use school_admin::{InMemoryPreferenceStore, PreferenceError, PreferenceStore, SidenavConfig};
use school_admin_domain::Draft;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 06 - 01);

pub fn create_test_admin() -> SchoolAdmin<InMemoryPreferenceStore> {
    SchoolAdmin::new(
        SidenavConfig::default(),
        InMemoryPreferenceStore::new(),
        1280,
        TODAY,
    )
    .unwrap()
}

pub fn create_empty_admin() -> SchoolAdmin<InMemoryPreferenceStore> {
    SchoolAdmin::empty(
        SidenavConfig::default(),
        InMemoryPreferenceStore::new(),
        1280,
        TODAY,
    )
}

/// A store that reads fine but rejects every write.
#[derive(Debug, Default)]
pub struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> Result<Option<bool>, PreferenceError> {
        Ok(None)
    }

    fn save(&mut self, key: &str, _value: bool) -> Result<(), PreferenceError> {
        Err(PreferenceError::Write {
            key: key.to_string(),
            message: String::from("storage is read-only"),
        })
    }
}

pub fn draft(pairs: &[(&str, &str)]) -> Draft {
    pairs.iter().copied().collect()
}

pub fn create_personal_step() -> Draft {
    draft(&[
        ("name", "Meera Iyer"),
        ("email", "meera.iyer@school.edu"),
        ("gender", "female"),
        ("dateOfBirth", "2013-09-02"),
        ("bloodGroup", "O-"),
        ("nationality", "Indian"),
    ])
}

pub fn create_academic_step() -> Draft {
    draft(&[
        ("rollNumber", "2024005"),
        ("grade", "Grade 7"),
        ("class", "B"),
        ("admissionDate", "2021-06-10"),
    ])
}

pub fn create_contact_step() -> Draft {
    draft(&[
        ("contact", "+91 9812345678"),
        ("parentName", "Lakshmi Iyer"),
        ("parentEmail", "lakshmi.iyer@example.com"),
        ("address", "4 Lake View Road"),
        ("city", "Chennai"),
        ("state", "Tamil Nadu"),
        ("zipCode", "600001"),
    ])
}

pub fn create_additional_step() -> Draft {
    draft(&[
        ("emergencyContactName", "Ravi Iyer"),
        ("emergencyContact", "9812345679"),
        ("emergencyRelation", "Parent"),
    ])
}

pub fn create_valid_teacher_draft() -> Draft {
    draft(&[
        ("name", "Ms. Anita Rao"),
        ("email", "anita.r@school.com"),
        ("subject", "Chemistry"),
        ("department", "Science"),
        ("qualification", "M.Sc. Chemistry"),
        ("phone", "9876543210"),
        ("dateOfJoining", "2022-07-01"),
    ])
}
