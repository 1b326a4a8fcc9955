// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

/// The identifier of a record within its collection.
///
/// Identifiers are opaque strings. Collections generate numeric strings,
/// but seeded or imported records may carry any non-empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new `RecordId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the identifier as a number if it is purely numeric.
    #[must_use]
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse::<u64>().ok()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Declares a closed set of string options backed by an enum.
///
/// The generated type round-trips through the exact option text the forms
/// submit, and rejects anything else with `DomainError::UnknownOption`.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every option, in form display order.
            pub const ALL: &'static [Self] = &[$( Self::$variant ),+];

            /// The option text of every variant, in form display order.
            pub const OPTIONS: &'static [&'static str] = &[$( $text ),+];

            /// Converts this option to its form text.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    _ => Err(DomainError::UnknownOption {
                        field: String::from($field),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw: String = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

choice_enum! {
    /// The four record collections managed by the dashboard.
    pub enum RecordKind for "kind" {
        /// Enrolled students.
        Student => "student",
        /// Teaching staff.
        Teacher => "teacher",
        /// School holidays.
        Holiday => "holiday",
        /// School events.
        Event => "event",
    }
}

choice_enum! {
    /// Whether a student or teacher is currently active.
    pub enum ActivityStatus for "status" {
        /// Currently enrolled or employed.
        Active => "active",
        /// No longer enrolled or employed.
        Inactive => "inactive",
    }
}

choice_enum! {
    /// Student gender as captured by the enrollment form.
    pub enum Gender for "gender" {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

choice_enum! {
    /// ABO/Rh blood group.
    pub enum BloodGroup for "bloodGroup" {
        APositive => "A+",
        ANegative => "A-",
        BPositive => "B+",
        BNegative => "B-",
        AbPositive => "AB+",
        AbNegative => "AB-",
        OPositive => "O+",
        ONegative => "O-",
    }
}

choice_enum! {
    /// Class section within a grade.
    pub enum Section for "class" {
        A => "A",
        B => "B",
        C => "C",
        D => "D",
    }
}

choice_enum! {
    /// Relationship of a student's emergency contact.
    pub enum EmergencyRelation for "emergencyRelation" {
        Parent => "Parent",
        Guardian => "Guardian",
        Sibling => "Sibling",
        Relative => "Relative",
        Other => "Other",
    }
}

choice_enum! {
    /// Teaching department.
    pub enum Department for "department" {
        Science => "Science",
        Arts => "Arts",
        Commerce => "Commerce",
        Humanities => "Humanities",
    }
}

choice_enum! {
    /// Holiday category, used for calendar tagging.
    pub enum HolidayType for "type" {
        National => "National",
        Religious => "Religious",
        School => "School",
    }
}

choice_enum! {
    /// Event progress.
    pub enum EventStatus for "status" {
        Upcoming => "upcoming",
        Ongoing => "ongoing",
        Completed => "completed",
    }
}

/// A school grade from 1 through 12.
///
/// Rendered and parsed as `Grade N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grade(u8);

impl Grade {
    /// The lowest grade.
    pub const MIN: u8 = 1;
    /// The highest grade.
    pub const MAX: u8 = 12;

    /// Creates a new `Grade`.
    ///
    /// # Errors
    ///
    /// Returns an error if `level` is outside 1 through 12.
    pub fn new(level: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            return Err(DomainError::InvalidGrade(format!("Grade {level}")));
        }
        Ok(Self(level))
    }

    /// Returns the numeric grade level.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.0
    }

    /// Every valid grade label, lowest first.
    #[must_use]
    pub fn options() -> Vec<String> {
        (Self::MIN..=Self::MAX)
            .map(|level| format!("Grade {level}"))
            .collect()
    }
}

impl FromStr for Grade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: u8 = s
            .strip_prefix("Grade ")
            .and_then(|n| n.parse::<u8>().ok())
            .ok_or_else(|| DomainError::InvalidGrade(s.to_string()))?;
        Self::new(level).map_err(|_| DomainError::InvalidGrade(s.to_string()))
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Grade {}", self.0)
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Serde adapter storing dates as `YYYY-MM-DD` text.
pub(crate) mod iso_date {
    use super::parse_iso_date;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        parse_iso_date(&raw).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use super::parse_iso_date;
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.collect_str(date),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|value| parse_iso_date(&value).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Arguments
///
/// * `value` - The date text
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the text is not a calendar date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Computes whole years elapsed between `born` and `on`.
///
/// Negative when `born` is after `on`.
#[must_use]
pub fn years_between(born: Date, on: Date) -> i32 {
    let mut years: i32 = on.year() - born.year();
    if (u8::from(on.month()), on.day()) < (u8::from(born.month()), born.day()) {
        years -= 1;
    }
    years
}
