// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Draft;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 06 - 01);

/// A student draft that passes every rule.
pub fn create_valid_student_draft() -> Draft {
    [
        ("name", "Aarav Sharma"),
        ("email", "aarav.sharma@school.edu"),
        ("gender", "male"),
        ("dateOfBirth", "2012-04-15"),
        ("bloodGroup", "B+"),
        ("nationality", "Indian"),
        ("rollNumber", "STU001"),
        ("grade", "Grade 8"),
        ("class", "A"),
        ("admissionDate", "2020-04-01"),
        ("contact", "+91 9876543210"),
        ("parentName", "Rajesh Sharma"),
        ("parentEmail", "rajesh.sharma@example.com"),
        ("address", "12 MG Road"),
        ("city", "Mumbai"),
        ("state", "Maharashtra"),
        ("zipCode", "400001"),
        ("emergencyContactName", "Priya Sharma"),
        ("emergencyContact", "9876543211"),
        ("emergencyRelation", "Parent"),
    ]
    .into_iter()
    .collect()
}

pub fn create_valid_teacher_draft() -> Draft {
    [
        ("name", "Dr. Meera Iyer"),
        ("email", "meera.iyer@school.edu"),
        ("subject", "Physics"),
        ("department", "Science"),
        ("qualification", "Ph.D. Physics"),
        ("phone", "+91 9123456780"),
        ("dateOfJoining", "2018-07-01"),
    ]
    .into_iter()
    .collect()
}

pub fn create_valid_event_draft() -> Draft {
    [
        ("name", "Annual Sports Day"),
        ("date", "2026-02-20"),
        ("time", "09:00 AM"),
        ("location", "Main Ground"),
        ("description", "Track and field events for all grades"),
    ]
    .into_iter()
    .collect()
}
