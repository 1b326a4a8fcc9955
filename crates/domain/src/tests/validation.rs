// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{TODAY, create_valid_student_draft, create_valid_teacher_draft};
use crate::{
    Constraint, Draft, FieldError, FieldRule, Record, RuleValidator, Student, Teacher, Validator,
    validate_field,
};

fn student_validator() -> RuleValidator {
    RuleValidator::new(Student::RULES, TODAY)
}

fn messages(errors: &[FieldError]) -> Vec<&str> {
    errors.iter().map(|e| e.message.as_str()).collect()
}

#[test]
fn test_valid_student_draft_passes_every_rule() {
    let validator: RuleValidator = student_validator();
    let draft: Draft = create_valid_student_draft();

    let errors: Vec<FieldError> = validator.validate(&validator.all_fields(), &draft);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn test_missing_required_field_is_reported_by_label() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();
    draft.remove("name");

    let errors: Vec<FieldError> = validator.validate(&["name"], &draft);
    assert_eq!(errors, vec![FieldError::new("name", "Full Name is required")]);
}

#[test]
fn test_blank_value_counts_as_missing() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();
    draft.set("city", "   ");

    let errors: Vec<FieldError> = validator.validate(&["city"], &draft);
    assert_eq!(messages(&errors), vec!["City is required"]);
}

#[test]
fn test_short_name_is_rejected() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();
    draft.set("name", "Al");

    let errors: Vec<FieldError> = validator.validate(&["name"], &draft);
    assert_eq!(
        messages(&errors),
        vec!["Full Name must be at least 3 characters"]
    );
}

#[test]
fn test_invalid_email_is_rejected() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();
    draft.set("email", "aarav@school");

    let errors: Vec<FieldError> = validator.validate(&["email"], &draft);
    assert_eq!(messages(&errors), vec!["Please enter a valid email"]);
}

#[test]
fn test_roll_number_must_be_alphanumeric() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();
    draft.set("rollNumber", "STU-001");

    let errors: Vec<FieldError> = validator.validate(&["rollNumber"], &draft);
    assert_eq!(
        messages(&errors),
        vec!["Roll Number should contain only letters and numbers"]
    );
}

#[test]
fn test_phone_formats() {
    let rule: FieldRule = FieldRule::required("contact", "Contact Number", &[Constraint::Phone]);

    for accepted in ["+91 9876543210", "(555) 123-4567", "555.123.4567", "9876543210"] {
        assert_eq!(validate_field(&rule, Some(accepted), TODAY), None, "{accepted}");
    }
    for rejected in ["call me", "12-34-56-78-90", "+"] {
        assert!(validate_field(&rule, Some(rejected), TODAY).is_some(), "{rejected}");
    }
}

#[test]
fn test_zip_code_length() {
    let rule: FieldRule = FieldRule::required("zipCode", "ZIP Code", &[Constraint::ZipCode]);

    assert_eq!(validate_field(&rule, Some("12345"), TODAY), None);
    assert_eq!(validate_field(&rule, Some("400001"), TODAY), None);
    assert_eq!(
        validate_field(&rule, Some("1234"), TODAY),
        Some(FieldError::new("zipCode", "Please enter a valid ZIP code"))
    );
    assert!(validate_field(&rule, Some("1234567"), TODAY).is_some());
}

#[test]
fn test_date_of_birth_age_range() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();

    draft.set("dateOfBirth", "2024-01-01");
    assert_eq!(
        messages(&validator.validate(&["dateOfBirth"], &draft)),
        vec!["Age must be between 5 and 25 years"]
    );

    draft.set("dateOfBirth", "1990-01-01");
    assert_eq!(
        messages(&validator.validate(&["dateOfBirth"], &draft)),
        vec!["Age must be between 5 and 25 years"]
    );

    draft.set("dateOfBirth", "2021-06-01");
    assert!(validator.validate(&["dateOfBirth"], &draft).is_empty());
}

#[test]
fn test_malformed_date_reports_format_not_age() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();
    draft.set("dateOfBirth", "15/04/2012");

    assert_eq!(
        messages(&validator.validate(&["dateOfBirth"], &draft)),
        vec!["Date of Birth must be a date in YYYY-MM-DD format"]
    );
}

#[test]
fn test_option_fields_list_the_choices() {
    let validator: RuleValidator = RuleValidator::new(Teacher::RULES, TODAY);
    let mut draft: Draft = create_valid_teacher_draft();
    draft.set("department", "Sports");

    assert_eq!(
        messages(&validator.validate(&["department"], &draft)),
        vec!["Department must be one of: Science, Arts, Commerce, Humanities"]
    );
}

#[test]
fn test_optional_field_may_be_absent_but_is_checked_when_present() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();

    assert!(validator.validate(&["status"], &draft).is_empty());

    draft.set("status", "graduated");
    assert_eq!(validator.validate(&["status"], &draft).len(), 1);
}

#[test]
fn test_only_requested_fields_are_validated() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();
    draft.set("email", "not-an-email");

    assert!(validator.validate(&["name", "gender"], &draft).is_empty());
}

#[test]
fn test_fields_without_rules_are_accepted() {
    let validator: RuleValidator = student_validator();
    let draft: Draft = Draft::new();

    assert!(validator.validate(&["favouriteColour"], &draft).is_empty());
}

#[test]
fn test_errors_follow_requested_field_order() {
    let validator: RuleValidator = student_validator();
    let draft: Draft = Draft::new();

    let errors: Vec<FieldError> = validator.validate(&["email", "name"], &draft);
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["email", "name"]);
}

#[test]
fn test_validation_is_deterministic() {
    let validator: RuleValidator = student_validator();
    let mut draft: Draft = create_valid_student_draft();
    draft.set("zipCode", "abc");
    draft.remove("city");

    let first: Vec<FieldError> = validator.validate(&validator.all_fields(), &draft);
    let second: Vec<FieldError> = validator.validate(&validator.all_fields(), &draft);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
