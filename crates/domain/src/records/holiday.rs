// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FormStep, Record, required_date, required_parsed, required_text};
use crate::draft::Draft;
use crate::error::DomainError;
use crate::types::{HolidayType, RecordId, RecordKind, iso_date};
use crate::validation::{Constraint, FieldRule};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::Date;

const HOLIDAY_RULES: &[FieldRule] = &[
    FieldRule::required("name", "Holiday Name", &[]),
    FieldRule::required("date", "Date", &[Constraint::Date]),
    FieldRule::required("type", "Type", &[Constraint::OneOf(HolidayType::OPTIONS)]),
    FieldRule::required("description", "Description", &[]),
];

const HOLIDAY_STEPS: &[FormStep] = &[FormStep {
    title: "Holiday Details",
    fields: &["name", "date", "type", "description"],
}];

/// A day the school is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: RecordId,
    pub name: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    pub description: String,
}

impl Holiday {
    /// Orders by date, earliest first.
    #[must_use]
    pub fn by_date(a: &Self, b: &Self) -> Ordering {
        a.date.cmp(&b.date)
    }

    /// Returns true if the holiday falls on `date`.
    #[must_use]
    pub fn falls_on(&self, date: Date) -> bool {
        self.date == date
    }
}

impl Record for Holiday {
    const KIND: RecordKind = RecordKind::Holiday;
    const RULES: &'static [FieldRule] = HOLIDAY_RULES;
    const STEPS: &'static [FormStep] = HOLIDAY_STEPS;
    const DEFAULTS: &'static [(&'static str, &'static str)] = &[];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: &Draft) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: required_text(draft, "name")?,
            date: required_date(draft, "date")?,
            holiday_type: required_parsed(draft, "type")?,
            description: required_text(draft, "description")?,
        })
    }

    fn to_draft(&self) -> Draft {
        [
            ("name", self.name.clone()),
            ("date", self.date.to_string()),
            ("type", self.holiday_type.to_string()),
            ("description", self.description.clone()),
        ]
        .into_iter()
        .collect()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
