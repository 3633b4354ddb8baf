use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::custom_form::{CustomFormQuestion, QuestionId};
use crate::models::job_post::{Currency, JobPostDraft, JobType, LocationType, PayPeriod};
use crate::models::option::SelectOption;
use crate::wizard::validation::{parse_experience, parse_salary};

/// Request body for the job-posting backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobPostPayload {
    #[validate(length(min = 1, message = "Job title is required"))]
    pub job_title: String,
    pub department: Option<String>,
    pub job_type: JobType,
    pub location_type: LocationType,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub salary_from: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub salary_to: Option<Decimal>,
    pub currency: Currency,
    pub period: PayPeriod,
    #[validate(length(min = 1, message = "Job description is required"))]
    pub job_description: String,
    #[validate(range(min = 0.0, max = 50.0))]
    pub experience_level: Option<f64>,
    pub job_deadline: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub required_skills: Vec<SelectOption>,
    pub job_schema: JobSchema,
}

/// Which applicant fields the posted job collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSchema {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub resume_url: bool,
    pub gender: bool,
    pub address: bool,
    pub cover_letter_url: bool,
    pub dob: bool,
    pub education: bool,
    pub experience: bool,
    /// No longer collected; kept for backend compatibility.
    pub skills: bool,
}

impl JobSchema {
    pub fn from_questions(questions: &[CustomFormQuestion]) -> Self {
        let mut schema = JobSchema::default();
        for question in questions.iter().filter(|q| q.enabled()) {
            let flag = match question.id() {
                QuestionId::Name => &mut schema.name,
                QuestionId::Email => &mut schema.email,
                QuestionId::Phone => &mut schema.phone,
                QuestionId::Resume => &mut schema.resume_url,
                QuestionId::Gender => &mut schema.gender,
                QuestionId::Address => &mut schema.address,
                QuestionId::CoverLetter => &mut schema.cover_letter_url,
                QuestionId::Dob => &mut schema.dob,
                QuestionId::Education => &mut schema.education,
                QuestionId::Experience => &mut schema.experience,
            };
            *flag = true;
        }
        schema.skills = false;
        schema
    }
}

impl From<&JobPostDraft> for JobPostPayload {
    fn from(draft: &JobPostDraft) -> Self {
        let remote = !draft.location_type.requires_address();
        let place = |option: Option<&SelectOption>| {
            if remote {
                None
            } else {
                option.map(|o| o.label.clone())
            }
        };

        Self {
            job_title: draft.job_title.trim().to_string(),
            department: draft.department.as_ref().map(|d| d.value.clone()),
            job_type: draft.job_type,
            location_type: draft.location_type,
            city: place(draft.city()),
            state: place(draft.state()),
            country: place(draft.country()),
            salary_from: parse_salary(&draft.salary_min).ok().flatten(),
            salary_to: parse_salary(&draft.salary_max).ok().flatten(),
            currency: draft.currency,
            period: draft.period,
            job_description: draft.job_description.trim().to_string(),
            experience_level: parse_experience(&draft.experience_level),
            job_deadline: draft
                .deadline
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc()),
            required_skills: draft.required_skills.clone(),
            job_schema: JobSchema::from_questions(draft.custom_form_questions()),
        }
    }
}

fn deserialize_id_flexible<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => Ok(s),
        StringOrInt::Int(i) => Ok(i.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostJobResponse {
    pub success: bool,
    #[serde(alias = "jobId", deserialize_with = "deserialize_id_flexible")]
    pub job_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInResponse {
    pub message: String,
}
