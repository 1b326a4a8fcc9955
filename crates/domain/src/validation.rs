// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::Draft;
use crate::types::{parse_iso_date, years_between};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use time::Date;

#[allow(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

#[allow(clippy::expect_used)]
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}$")
        .expect("Invalid phone regex")
});

#[allow(clippy::expect_used)]
static ZIP_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,6}$").expect("Invalid ZIP code regex"));

#[allow(clippy::expect_used)]
static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Invalid alphanumeric regex"));

/// A single check applied to a present field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// At least this many characters.
    MinLength(usize),
    /// An email address.
    Email,
    /// Letters and digits only.
    Alphanumeric,
    /// A telephone number.
    Phone,
    /// A five or six digit postal code.
    ZipCode,
    /// A `YYYY-MM-DD` calendar date.
    Date,
    /// A birth date giving an age within `min..=max` years on the reference date.
    AgeBetween {
        /// Youngest allowed age in whole years.
        min: i32,
        /// Oldest allowed age in whole years.
        max: i32,
    },
    /// Exactly one of the listed options.
    OneOf(&'static [&'static str]),
}

/// The validation rule for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// The field name used as the draft key.
    pub name: &'static str,
    /// The label shown next to the input.
    pub label: &'static str,
    /// Whether the field must be present.
    pub required: bool,
    /// Checks applied, in order, when the field is present.
    pub constraints: &'static [Constraint],
}

impl FieldRule {
    /// A required field with the given constraints.
    #[must_use]
    pub const fn required(
        name: &'static str,
        label: &'static str,
        constraints: &'static [Constraint],
    ) -> Self {
        Self {
            name,
            label,
            required: true,
            constraints,
        }
    }

    /// An optional field with the given constraints.
    #[must_use]
    pub const fn optional(
        name: &'static str,
        label: &'static str,
        constraints: &'static [Constraint],
    ) -> Self {
        Self {
            name,
            label,
            required: false,
            constraints,
        }
    }
}

/// A user-correctable problem with one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field name.
    pub field: String,
    /// A human-readable description of the problem.
    pub message: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates a subset of a draft's fields.
///
/// Implementations must be pure: the same field set and draft always yield
/// the same errors, and nothing outside the returned list is affected.
pub trait Validator {
    /// Returns one error per failing field among `fields`, in `fields` order.
    ///
    /// Field names without a rule are accepted.
    fn validate(&self, fields: &[&str], draft: &Draft) -> Vec<FieldError>;

    /// Returns every field name this validator has a rule for.
    fn all_fields(&self) -> Vec<&'static str>;
}

/// A `Validator` backed by a static rule table.
///
/// Age rules are evaluated relative to `today`, which is fixed at
/// construction so that validation stays deterministic.
#[derive(Debug, Clone, Copy)]
pub struct RuleValidator {
    rules: &'static [FieldRule],
    today: Date,
}

impl RuleValidator {
    /// Creates a new `RuleValidator`.
    ///
    /// # Arguments
    ///
    /// * `rules` - The rule table
    /// * `today` - The reference date for age rules
    #[must_use]
    pub const fn new(rules: &'static [FieldRule], today: Date) -> Self {
        Self { rules, today }
    }

    /// Returns the rule table.
    #[must_use]
    pub const fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }

    fn rule(&self, field: &str) -> Option<&'static FieldRule> {
        self.rules.iter().find(|rule| rule.name == field)
    }
}

impl Validator for RuleValidator {
    fn validate(&self, fields: &[&str], draft: &Draft) -> Vec<FieldError> {
        fields
            .iter()
            .filter_map(|field| self.rule(field))
            .filter_map(|rule| validate_field(rule, draft.value(rule.name), self.today))
            .collect()
    }

    fn all_fields(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }
}

/// Checks one value against its rule.
///
/// # Arguments
///
/// * `rule` - The rule to apply
/// * `value` - The trimmed field value, `None` if absent or blank
/// * `today` - The reference date for age constraints
///
/// # Returns
///
/// The first failure, or `None` if the value passes.
#[must_use]
pub fn validate_field(rule: &FieldRule, value: Option<&str>, today: Date) -> Option<FieldError> {
    let Some(value) = value else {
        return rule
            .required
            .then(|| FieldError::new(rule.name, format!("{} is required", rule.label)));
    };

    rule.constraints
        .iter()
        .find_map(|constraint| check_constraint(rule, *constraint, value, today))
}

fn check_constraint(
    rule: &FieldRule,
    constraint: Constraint,
    value: &str,
    today: Date,
) -> Option<FieldError> {
    let fail = |message: String| Some(FieldError::new(rule.name, message));

    match constraint {
        Constraint::MinLength(min) => {
            if value.chars().count() < min {
                return fail(format!("{} must be at least {min} characters", rule.label));
            }
        }
        Constraint::Email => {
            if !EMAIL_REGEX.is_match(value) {
                return fail(String::from("Please enter a valid email"));
            }
        }
        Constraint::Alphanumeric => {
            if !ALPHANUMERIC_REGEX.is_match(value) {
                return fail(format!(
                    "{} should contain only letters and numbers",
                    rule.label
                ));
            }
        }
        Constraint::Phone => {
            if !PHONE_REGEX.is_match(value) {
                return fail(String::from("Please enter a valid phone number"));
            }
        }
        Constraint::ZipCode => {
            if !ZIP_CODE_REGEX.is_match(value) {
                return fail(String::from("Please enter a valid ZIP code"));
            }
        }
        Constraint::Date => {
            if parse_iso_date(value).is_err() {
                return fail(format!("{} must be a date in YYYY-MM-DD format", rule.label));
            }
        }
        Constraint::AgeBetween { min, max } => {
            // Unparseable dates are reported by `Constraint::Date`.
            if let Ok(born) = parse_iso_date(value) {
                let age: i32 = years_between(born, today);
                if age < min || age > max {
                    return fail(format!("Age must be between {min} and {max} years"));
                }
            }
        }
        Constraint::OneOf(options) => {
            if !options.contains(&value) {
                return fail(format!(
                    "{} must be one of: {}",
                    rule.label,
                    options.join(", ")
                ));
            }
        }
    }

    None
}
