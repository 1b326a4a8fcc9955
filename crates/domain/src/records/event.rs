// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FormStep, Record, required_date, required_parsed, required_text};
use crate::draft::Draft;
use crate::error::DomainError;
use crate::types::{EventStatus, RecordId, RecordKind, iso_date};
use crate::validation::{Constraint, FieldRule};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::Date;

const EVENT_RULES: &[FieldRule] = &[
    FieldRule::required("name", "Event Name", &[]),
    FieldRule::required("date", "Date", &[Constraint::Date]),
    FieldRule::required("time", "Time", &[]),
    FieldRule::required("location", "Location", &[]),
    FieldRule::optional(
        "status",
        "Status",
        &[Constraint::OneOf(EventStatus::OPTIONS)],
    ),
    FieldRule::required("description", "Description", &[]),
];

const EVENT_STEPS: &[FormStep] = &[FormStep {
    title: "Event Details",
    fields: &["name", "date", "time", "location", "status", "description"],
}];

/// A scheduled school event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub name: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Start time as displayed, e.g. `10:00 AM`.
    pub time: String,
    pub location: String,
    pub description: String,
    pub status: EventStatus,
}

impl Event {
    /// Orders by date, earliest first.
    #[must_use]
    pub fn by_date(a: &Self, b: &Self) -> Ordering {
        a.date.cmp(&b.date)
    }

    /// Orders upcoming events before all others, then by date.
    #[must_use]
    pub fn upcoming_first(a: &Self, b: &Self) -> Ordering {
        let a_upcoming: bool = a.status == EventStatus::Upcoming;
        let b_upcoming: bool = b.status == EventStatus::Upcoming;
        b_upcoming
            .cmp(&a_upcoming)
            .then_with(|| Self::by_date(a, b))
    }

    /// Returns true if the event has not started yet.
    #[must_use]
    pub fn is_upcoming(&self) -> bool {
        self.status == EventStatus::Upcoming
    }
}

impl Record for Event {
    const KIND: RecordKind = RecordKind::Event;
    const RULES: &'static [FieldRule] = EVENT_RULES;
    const STEPS: &'static [FormStep] = EVENT_STEPS;
    const DEFAULTS: &'static [(&'static str, &'static str)] = &[("status", "upcoming")];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: &Draft) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: required_text(draft, "name")?,
            date: required_date(draft, "date")?,
            time: required_text(draft, "time")?,
            location: required_text(draft, "location")?,
            description: required_text(draft, "description")?,
            status: required_parsed(draft, "status")?,
        })
    }

    fn to_draft(&self) -> Draft {
        [
            ("name", self.name.clone()),
            ("date", self.date.to_string()),
            ("time", self.time.clone()),
            ("location", self.location.clone()),
            ("description", self.description.clone()),
            ("status", self.status.to_string()),
        ]
        .into_iter()
        .collect()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.location.as_str(),
            self.description.as_str(),
        ]
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
