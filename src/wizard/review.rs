use chrono::NaiveDate;
use serde::Serialize;

use crate::models::custom_form::{CustomAnswer, QuestionId, QuestionKind};
use crate::models::job_post::{Currency, JobPostDraft, JobType, LocationType, PayPeriod};
use crate::models::option::SelectOption;

#[derive(Debug, Clone, Serialize)]
pub struct ReviewProjection<'a> {
    pub job_title: &'a str,
    pub department: Option<&'a SelectOption>,
    pub job_type: JobType,
    pub location_type: LocationType,
    pub location: String,
    pub salary: Option<String>,
    pub currency: Currency,
    pub period: PayPeriod,
    pub job_description: &'a str,
    pub experience_level: &'a str,
    pub education_level: &'a str,
    pub required_skills: &'a [SelectOption],
    pub deadline: Option<NaiveDate>,
    pub screening_questions: Vec<&'a str>,
    pub custom_questions: Vec<ReviewedQuestion<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewedQuestion<'a> {
    pub id: QuestionId,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub answer: Option<&'a CustomAnswer>,
}

pub fn project(draft: &JobPostDraft) -> ReviewProjection<'_> {
    let custom_questions = draft
        .custom_form_questions()
        .iter()
        .filter(|q| q.enabled())
        .map(|q| ReviewedQuestion {
            id: q.id(),
            label: q.label(),
            kind: q.kind(),
            answer: draft.custom_form_answers().get(q.id()),
        })
        .collect();

    ReviewProjection {
        job_title: &draft.job_title,
        department: draft.department.as_ref(),
        job_type: draft.job_type,
        location_type: draft.location_type,
        location: describe_location(draft),
        salary: describe_salary(draft),
        currency: draft.currency,
        period: draft.period,
        job_description: &draft.job_description,
        experience_level: &draft.experience_level,
        education_level: &draft.education_level,
        required_skills: &draft.required_skills,
        deadline: draft.deadline,
        screening_questions: draft
            .screening_questions()
            .iter()
            .map(|q| q.trim())
            .filter(|q| !q.is_empty())
            .collect(),
        custom_questions,
    }
}

fn describe_location(draft: &JobPostDraft) -> String {
    if !draft.location_type.requires_address() {
        return LocationType::Remote.as_str().to_string();
    }
    let parts: Vec<&str> = [draft.city(), draft.state(), draft.country()]
        .into_iter()
        .flatten()
        .map(|o| o.label.as_str())
        .collect();
    if parts.is_empty() {
        draft.location_type.as_str().to_string()
    } else {
        format!("{} ({})", parts.join(", "), draft.location_type.as_str())
    }
}

fn describe_salary(draft: &JobPostDraft) -> Option<String> {
    let min = draft.salary_min.trim();
    let max = draft.salary_max.trim();
    let range = match (min.is_empty(), max.is_empty()) {
        (true, true) => return None,
        (false, true) => format!("from {}", min),
        (true, false) => format!("up to {}", max),
        (false, false) => format!("{} - {}", min, max),
    };
    Some(format!(
        "{} {} / {}",
        draft.currency.as_str(),
        range,
        draft.period.as_str()
    ))
}
