use serde::Serialize;
use tracing::{debug, error, info};
use validator::Validate;

use crate::dto::job_post_dto::{JobPostPayload, LinkedInResponse, PostJobResponse};
use crate::error::{Error, Result};
use crate::models::custom_form::{EducationField, ExperienceField, QuestionId};
use crate::models::job_post::{DraftField, DraftInput, JobPostDraft, SelectField};
use crate::models::option::SelectOption;
use crate::services::job_board_service::JobBoard;
use crate::wizard::builder::{self, CustomFormBuilder, CustomFormPreview};
use crate::wizard::progress::{step_indicator, StepState};
use crate::wizard::review::{self, ReviewProjection};
use crate::wizard::step::WizardStep;
use crate::wizard::validation::{validate_step, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Toast-style feedback for the last submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Orchestrates one job-post wizard session: the draft, the current step,
/// the field errors of the last advance attempt and the submission state.
#[derive(Debug, Clone, Default)]
pub struct JobPostForm {
    draft: JobPostDraft,
    current_step: WizardStep,
    errors: FieldErrors,
    review_completed: bool,
    show_custom_form: bool,
    show_confirmation: bool,
    posted_job_id: Option<String>,
    notice: Option<Notice>,
}

impl JobPostForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &JobPostDraft {
        &self.draft
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn review_completed(&self) -> bool {
        self.review_completed
    }

    pub fn show_custom_form(&self) -> bool {
        self.show_custom_form
    }

    pub fn show_confirmation(&self) -> bool {
        self.show_confirmation
    }

    pub fn posted_job_id(&self) -> Option<&str> {
        self.posted_job_id.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn handle_input_change(&mut self, input: DraftInput) {
        self.errors.remove(&input.field());
        self.draft.apply_input(input);
    }

    /// Country and state changes also clear their dependent selections.
    pub fn handle_select_change(
        &mut self,
        field: SelectField,
        option: Option<SelectOption>,
    ) -> Result<()> {
        let cleared = self.draft.apply_select(field, option)?;
        self.errors.remove(&field.field());
        if !cleared.is_empty() {
            debug!(field = %field.field(), cleared = ?cleared, "Cleared dependent selections");
        }
        Ok(())
    }

    pub fn handle_skills_change(&mut self, skills: Vec<SelectOption>) {
        self.draft.required_skills = skills;
        self.errors.remove(&DraftField::RequiredSkills);
    }

    /// Flips a custom-form question and always closes the preview.
    pub fn toggle_question(&mut self, id: QuestionId) -> Result<bool> {
        let question = self
            .draft
            .custom_form_questions
            .iter_mut()
            .find(|q| q.id() == id)
            .ok_or_else(|| Error::NotFound(format!("Unknown question '{}'", id.as_str())))?;
        let enabled = question.toggle();
        self.show_custom_form = false;
        Ok(enabled)
    }

    pub fn open_custom_form(&mut self) {
        self.show_custom_form = true;
    }

    /// Only available while the preview is open. Any toggle closes it.
    pub fn custom_form_preview(&self) -> Result<CustomFormPreview> {
        if !self.show_custom_form {
            return Err(Error::Conflict(
                "Custom form preview is closed, open it first".to_string(),
            ));
        }
        Ok(builder::preview(&self.draft))
    }

    pub fn set_custom_answer(&mut self, id: QuestionId, value: String) -> Result<()> {
        CustomFormBuilder::new(&mut self.draft).set_answer(id, value)
    }

    pub fn add_education_block(&mut self) -> usize {
        CustomFormBuilder::new(&mut self.draft).add_education_block()
    }

    pub fn add_experience_block(&mut self) -> usize {
        CustomFormBuilder::new(&mut self.draft).add_experience_block()
    }

    pub fn handle_education_change(
        &mut self,
        idx: usize,
        field: EducationField,
        value: String,
    ) -> Result<()> {
        CustomFormBuilder::new(&mut self.draft).handle_education_change(idx, field, value)
    }

    pub fn handle_experience_change(
        &mut self,
        idx: usize,
        field: ExperienceField,
        value: String,
    ) -> Result<()> {
        CustomFormBuilder::new(&mut self.draft).handle_experience_change(idx, field, value)
    }

    pub fn add_screening_question(&mut self) -> usize {
        self.draft.add_screening_question()
    }

    pub fn update_screening_question(&mut self, idx: usize, text: String) -> Result<()> {
        self.draft.update_screening_question(idx, text)
    }

    pub fn remove_screening_question(&mut self, idx: usize) -> Result<()> {
        self.draft.remove_screening_question(idx)
    }

    pub fn validate_step(&self) -> FieldErrors {
        validate_step(&self.draft, self.current_step)
    }

    /// Advances one step when the current step validates. On failure the
    /// stored errors are replaced and the step is unchanged.
    pub fn handle_next(&mut self) -> Result<WizardStep> {
        let errors = self.validate_step();
        if !errors.is_empty() {
            debug!(
                step = self.current_step.number(),
                invalid = errors.len(),
                "Step validation failed"
            );
            self.errors = errors.clone();
            return Err(Error::StepValidation {
                step: self.current_step.number(),
                errors,
            });
        }
        self.errors.clear();

        let next = self.current_step.next().ok_or_else(|| {
            Error::BadRequest("Already on the review step, post the job instead".to_string())
        })?;
        self.current_step = next;
        Ok(next)
    }

    pub fn handle_previous(&mut self) -> WizardStep {
        self.current_step = self.current_step.previous();
        self.current_step
    }

    pub fn step_indicator(&self) -> Vec<StepState> {
        step_indicator(self.current_step, self.review_completed)
    }

    pub fn review(&self) -> ReviewProjection<'_> {
        review::project(&self.draft)
    }

    pub fn build_payload(&self) -> Result<JobPostPayload> {
        let payload = JobPostPayload::from(&self.draft);
        payload.validate()?;
        Ok(payload)
    }

    /// Submits the draft from the review step. Failures are logged, leave
    /// the draft and step untouched and set an error notice.
    pub async fn handle_post_job(&mut self, board: &dyn JobBoard) -> Result<PostJobResponse> {
        if self.current_step != WizardStep::Review {
            return Err(Error::BadRequest(
                "Jobs can only be posted from the review step".to_string(),
            ));
        }
        if self.review_completed {
            return Err(Error::BadRequest(
                "This job has already been posted".to_string(),
            ));
        }

        let result = match self.build_payload() {
            Ok(payload) => board.post_job(&payload).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(reply) => {
                info!(job_id = %reply.job_id, "Job post wizard completed");
                self.review_completed = true;
                self.show_confirmation = true;
                self.notice = Some(Notice::success(
                    reply
                        .message
                        .clone()
                        .unwrap_or_else(|| "Job posted successfully".to_string()),
                ));
                self.posted_job_id = Some(reply.job_id.clone());
                Ok(reply)
            }
            Err(err) => {
                error!(error = %err, "Failed to post job");
                self.notice = Some(Notice::error(format!("Failed to post job: {}", err)));
                Err(err)
            }
        }
    }

    pub async fn post_to_linkedin(&mut self, board: &dyn JobBoard) -> Result<LinkedInResponse> {
        let job_id = self.posted_job_id.clone().ok_or_else(|| {
            Error::BadRequest("Post the job before sharing it to LinkedIn".to_string())
        })?;

        match board.post_job_to_linkedin(&job_id).await {
            Ok(reply) => {
                self.notice = Some(Notice::success(reply.message.clone()));
                Ok(reply)
            }
            Err(err) => {
                error!(error = %err, job_id = %job_id, "Failed to share job to LinkedIn");
                self.notice = Some(Notice::error(format!(
                    "Failed to share job to LinkedIn: {}",
                    err
                )));
                Err(err)
            }
        }
    }

    pub fn close_confirmation(&mut self) {
        self.show_confirmation = false;
    }
}
