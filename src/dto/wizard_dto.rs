use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::custom_form::{EducationField, ExperienceField};
use crate::models::job_post::{JobPostDraft, SelectField};
use crate::models::option::SelectOption;
use crate::wizard::form::{JobPostForm, Notice};
use crate::wizard::progress::StepState;
use crate::wizard::step::WizardStep;
use crate::wizard::validation::FieldErrors;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectChangeRequest {
    pub field: SelectField,
    pub option: Option<SelectOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsChangeRequest {
    pub skills: Vec<SelectOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningQuestionRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationChangeRequest {
    pub field: EducationField,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceChangeRequest {
    pub field: ExperienceField,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub enabled: bool,
    pub show_custom_form: bool,
}

/// Everything a client needs to render the wizard after any operation.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    pub id: Uuid,
    pub current_step: WizardStep,
    pub steps: Vec<StepState>,
    pub errors: FieldErrors,
    pub review_completed: bool,
    pub show_custom_form: bool,
    pub show_confirmation: bool,
    pub posted_job_id: Option<String>,
    pub notice: Option<Notice>,
    pub draft: JobPostDraft,
}

impl WizardSnapshot {
    pub fn new(id: Uuid, form: &JobPostForm) -> Self {
        Self {
            id,
            current_step: form.current_step(),
            steps: form.step_indicator(),
            errors: form.errors().clone(),
            review_completed: form.review_completed(),
            show_custom_form: form.show_custom_form(),
            show_confirmation: form.show_confirmation(),
            posted_job_id: form.posted_job_id().map(str::to_string),
            notice: form.notice().cloned(),
            draft: form.draft().clone(),
        }
    }
}
