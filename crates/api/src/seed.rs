// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The records and notifications a fresh dashboard starts with.

use school_admin_domain::{
    DomainError, Draft, Event, Holiday, Record, RecordId, Student, Teacher,
};
use school_admin_notifications::{NoticeKind, NotificationItem};

type Row = (&'static str, &'static [(&'static str, &'static str)]);

const STUDENTS: &[Row] = &[
    (
        "1",
        &[
            ("name", "John Doe"),
            ("email", "john@example.com"),
            ("grade", "Grade 10"),
            ("class", "A"),
            ("dateOfBirth", "2008-05-15"),
            ("parentName", "Robert Doe"),
            ("contact", "+1 234 567 890"),
            ("status", "active"),
            ("rollNumber", "2024001"),
            ("gender", "male"),
            ("bloodGroup", "O+"),
        ],
    ),
    (
        "2",
        &[
            ("name", "Jane Smith"),
            ("email", "jane@example.com"),
            ("grade", "Grade 11"),
            ("class", "B"),
            ("dateOfBirth", "2007-08-22"),
            ("parentName", "Maria Smith"),
            ("contact", "+1 987 654 321"),
            ("status", "active"),
            ("rollNumber", "2024002"),
            ("gender", "female"),
            ("bloodGroup", "A+"),
        ],
    ),
    (
        "3",
        &[
            ("name", "Alice Johnson"),
            ("email", "alice@example.com"),
            ("grade", "Grade 9"),
            ("class", "C"),
            ("dateOfBirth", "2009-02-10"),
            ("parentName", "David Johnson"),
            ("contact", "+1 555 123 456"),
            ("status", "inactive"),
            ("rollNumber", "2024003"),
            ("gender", "female"),
            ("bloodGroup", "B+"),
        ],
    ),
    (
        "4",
        &[
            ("name", "Bob Brown"),
            ("email", "bob@example.com"),
            ("grade", "Grade 10"),
            ("class", "A"),
            ("dateOfBirth", "2008-11-30"),
            ("parentName", "Sarah Brown"),
            ("contact", "+1 444 789 012"),
            ("status", "active"),
            ("rollNumber", "2024004"),
            ("gender", "male"),
            ("bloodGroup", "AB+"),
        ],
    ),
];

const TEACHERS: &[Row] = &[
    (
        "1",
        &[
            ("name", "Mr. Robert Johnson"),
            ("email", "robert.j@school.com"),
            ("subject", "Mathematics"),
            ("department", "Science"),
            ("qualification", "M.Sc. Mathematics"),
            ("phone", "+1 234 567 890"),
            ("dateOfJoining", "2020-01-15"),
            ("status", "active"),
        ],
    ),
    (
        "2",
        &[
            ("name", "Ms. Sarah Smith"),
            ("email", "sarah.s@school.com"),
            ("subject", "English Literature"),
            ("department", "Arts"),
            ("qualification", "M.A. English"),
            ("phone", "+1 987 654 321"),
            ("dateOfJoining", "2019-08-22"),
            ("status", "active"),
        ],
    ),
    (
        "3",
        &[
            ("name", "Dr. Emily Davis"),
            ("email", "emily.d@school.com"),
            ("subject", "Physics"),
            ("department", "Science"),
            ("qualification", "Ph.D. Physics"),
            ("phone", "+1 555 123 456"),
            ("dateOfJoining", "2018-03-10"),
            ("status", "active"),
        ],
    ),
    (
        "4",
        &[
            ("name", "Mr. Michael Wilson"),
            ("email", "michael.w@school.com"),
            ("subject", "History"),
            ("department", "Humanities"),
            ("qualification", "B.A. History"),
            ("phone", "+1 444 789 012"),
            ("dateOfJoining", "2021-06-01"),
            ("status", "inactive"),
        ],
    ),
];

const HOLIDAYS: &[Row] = &[
    (
        "1",
        &[
            ("name", "New Year"),
            ("date", "2025-01-01"),
            ("type", "National"),
            ("description", "New Year celebration"),
        ],
    ),
    (
        "2",
        &[
            ("name", "Spring Festival"),
            ("date", "2025-02-10"),
            ("type", "Religious"),
            ("description", "Chinese New Year"),
        ],
    ),
    (
        "3",
        &[
            ("name", "Labor Day"),
            ("date", "2025-05-01"),
            ("type", "National"),
            ("description", "International Workers Day"),
        ],
    ),
    (
        "4",
        &[
            ("name", "School Foundation Day"),
            ("date", "2025-06-15"),
            ("type", "School"),
            ("description", "Celebration of school founding"),
        ],
    ),
];

const EVENTS: &[Row] = &[
    (
        "1",
        &[
            ("name", "Annual Day"),
            ("date", "2025-03-15"),
            ("time", "10:00 AM"),
            ("location", "Main Auditorium"),
            (
                "description",
                "Annual day celebration with cultural programs",
            ),
            ("status", "upcoming"),
        ],
    ),
    (
        "2",
        &[
            ("name", "Science Fair"),
            ("date", "2025-02-20"),
            ("time", "09:00 AM"),
            ("location", "Science Lab"),
            ("description", "Inter-school science fair and exhibition"),
            ("status", "upcoming"),
        ],
    ),
    (
        "3",
        &[
            ("name", "Sports Meet"),
            ("date", "2025-01-10"),
            ("time", "08:00 AM"),
            ("location", "School Ground"),
            ("description", "Annual sports meet for all grades"),
            ("status", "completed"),
        ],
    ),
];

fn build<R: Record>(rows: &[Row]) -> Result<Vec<R>, DomainError> {
    rows.iter()
        .map(|(id, fields)| {
            let draft: Draft = fields.iter().copied().collect();
            R::from_draft(RecordId::new(*id), &draft)
        })
        .collect()
}

/// The starting student roster.
///
/// # Errors
///
/// Returns an error if a seed row no longer parses.
pub fn students() -> Result<Vec<Student>, DomainError> {
    build(STUDENTS)
}

/// The starting teaching staff.
///
/// # Errors
///
/// Returns an error if a seed row no longer parses.
pub fn teachers() -> Result<Vec<Teacher>, DomainError> {
    build(TEACHERS)
}

/// The starting holiday calendar.
///
/// # Errors
///
/// Returns an error if a seed row no longer parses.
pub fn holidays() -> Result<Vec<Holiday>, DomainError> {
    build(HOLIDAYS)
}

/// The starting event schedule.
///
/// # Errors
///
/// Returns an error if a seed row no longer parses.
pub fn events() -> Result<Vec<Event>, DomainError> {
    build(EVENTS)
}

/// The notification bell's starting items.
#[must_use]
pub fn notifications() -> Vec<NotificationItem> {
    let item = |id: &str, title: &str, description: &str, time: &str, read: bool| {
        NotificationItem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind: NoticeKind::Info,
            time: time.to_string(),
            read,
        }
    };

    vec![
        item(
            "1",
            "New Student Registration",
            "Sarah Johnson registered for Grade 10",
            "2 minutes ago",
            false,
        ),
        item(
            "2",
            "Fee Payment Reminder",
            "5 students have pending fees",
            "1 hour ago",
            false,
        ),
        item(
            "3",
            "Upcoming Event",
            "Annual Sports Day is scheduled tomorrow",
            "3 hours ago",
            true,
        ),
    ]
}
