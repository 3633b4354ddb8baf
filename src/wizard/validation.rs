//! Per-step blocking validation.
//!
//! Errors are recomputed wholesale on every advance attempt; nothing is
//! merged with a previous run.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::job_post::{DraftField, JobPostDraft};
use crate::wizard::step::WizardStep;

pub type FieldErrors = BTreeMap<DraftField, String>;

pub const MIN_EXPERIENCE_YEARS: f64 = 0.0;
pub const MAX_EXPERIENCE_YEARS: f64 = 50.0;

pub fn validate_step(draft: &JobPostDraft, step: WizardStep) -> FieldErrors {
    match step {
        WizardStep::GeneralInfo => validate_general_info(draft),
        WizardStep::ApplicationForm => validate_application_form(draft),
        WizardStep::Review => FieldErrors::new(),
    }
}

fn validate_general_info(draft: &JobPostDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.job_title.trim().is_empty() {
        errors.insert(DraftField::JobTitle, "Job title is required".to_string());
    }
    if draft.department.is_none() {
        errors.insert(DraftField::Department, "Department is required".to_string());
    }
    if draft.job_description.trim().is_empty() {
        errors.insert(
            DraftField::JobDescription,
            "Job description is required".to_string(),
        );
    }

    if draft.location_type.requires_address() {
        if draft.country().is_none() {
            errors.insert(DraftField::Country, "Country is required".to_string());
        }
        if draft.state().is_none() {
            errors.insert(DraftField::State, "State is required".to_string());
        }
        if draft.city().is_none() {
            errors.insert(DraftField::City, "City is required".to_string());
        }
    }

    match parse_experience(&draft.experience_level) {
        Some(years) if (MIN_EXPERIENCE_YEARS..=MAX_EXPERIENCE_YEARS).contains(&years) => {}
        _ => {
            errors.insert(
                DraftField::ExperienceLevel,
                format!(
                    "Experience must be a number between {} and {} years",
                    MIN_EXPERIENCE_YEARS, MAX_EXPERIENCE_YEARS
                ),
            );
        }
    }

    if draft.required_skills.is_empty() {
        errors.insert(
            DraftField::RequiredSkills,
            "Select at least one skill".to_string(),
        );
    }

    validate_salary_range(draft, &mut errors);

    errors
}

fn validate_salary_range(draft: &JobPostDraft, errors: &mut FieldErrors) {
    let min = parse_salary(&draft.salary_min);
    let max = parse_salary(&draft.salary_max);

    if min.is_err() {
        errors.insert(
            DraftField::SalaryMin,
            "Minimum salary must be a number".to_string(),
        );
    }
    if max.is_err() {
        errors.insert(
            DraftField::SalaryMax,
            "Maximum salary must be a number".to_string(),
        );
    }
    if let (Ok(Some(min)), Ok(Some(max))) = (min, max) {
        if min > max {
            errors.insert(
                DraftField::SalaryMax,
                "Maximum salary cannot be lower than minimum salary".to_string(),
            );
        }
    }
}

fn validate_application_form(draft: &JobPostDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.education_level.trim().is_empty() {
        errors.insert(
            DraftField::EducationLevel,
            "Education level is required".to_string(),
        );
    }
    errors
}

/// Years of experience; `None` for blank or non-numeric input.
pub fn parse_experience(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|years| years.is_finite())
}

/// Blank salary is `Ok(None)`; anything else must parse as a decimal.
pub fn parse_salary(raw: &str) -> Result<Option<Decimal>, rust_decimal::Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(trimmed).map(Some)
}
