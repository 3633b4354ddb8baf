use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::wizard_dto::{
        AnswerRequest, EducationChangeRequest, ExperienceChangeRequest, IndexResponse,
        ScreeningQuestionRequest, SelectChangeRequest, SkillsChangeRequest, ToggleResponse,
        WizardSnapshot,
    },
    error::Result,
    models::custom_form::QuestionId,
    models::job_post::DraftInput,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts",
    responses(
        (status = 201, description = "Wizard session started", body = Json<WizardSnapshot>)
    )
)]
#[axum::debug_handler]
pub async fn create_draft(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let (id, form) = state.sessions.create()?;
    let form = form.lock().await;
    Ok((StatusCode::CREATED, Json(WizardSnapshot::new(id, &form))))
}

#[utoipa::path(
    get,
    path = "/api/job-posts/drafts/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Current wizard state", body = Json<WizardSnapshot>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn get_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let form = form.lock().await;
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    delete,
    path = "/api/job-posts/drafts/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 204, description = "Session discarded"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.sessions.discard(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/job-posts/drafts/{id}/fields",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    request_body = DraftInput,
    responses(
        (status = 200, description = "Field updated", body = Json<WizardSnapshot>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn update_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<DraftInput>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.handle_input_change(input);
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    put,
    path = "/api/job-posts/drafts/{id}/selects",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    request_body = SelectChangeRequest,
    responses(
        (status = 200, description = "Selection updated, dependents cleared", body = Json<WizardSnapshot>),
        (status = 400, description = "Selection does not belong to its parent"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn update_select(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SelectChangeRequest>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.handle_select_change(payload.field, payload.option)?;
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    put,
    path = "/api/job-posts/drafts/{id}/skills",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    request_body = SkillsChangeRequest,
    responses(
        (status = 200, description = "Skills replaced", body = Json<WizardSnapshot>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn update_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SkillsChangeRequest>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.handle_skills_change(payload.skills);
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/screening-questions",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 201, description = "Empty screening question appended", body = Json<IndexResponse>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn add_screening_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let index = form.lock().await.add_screening_question();
    Ok((StatusCode::CREATED, Json(IndexResponse { index })))
}

#[utoipa::path(
    patch,
    path = "/api/job-posts/drafts/{id}/screening-questions/{idx}",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("idx" = usize, Path, description = "Question index")
    ),
    request_body = ScreeningQuestionRequest,
    responses(
        (status = 200, description = "Screening question updated", body = Json<WizardSnapshot>),
        (status = 400, description = "Index out of range"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn update_screening_question(
    State(state): State<AppState>,
    Path((id, idx)): Path<(Uuid, usize)>,
    Json(payload): Json<ScreeningQuestionRequest>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.update_screening_question(idx, payload.text)?;
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    delete,
    path = "/api/job-posts/drafts/{id}/screening-questions/{idx}",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("idx" = usize, Path, description = "Question index")
    ),
    responses(
        (status = 200, description = "Screening question removed", body = Json<WizardSnapshot>),
        (status = 400, description = "Index out of range"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn remove_screening_question(
    State(state): State<AppState>,
    Path((id, idx)): Path<(Uuid, usize)>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.remove_screening_question(idx)?;
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/questions/{question}/toggle",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("question" = String, Path, description = "Question key, e.g. gender")
    ),
    responses(
        (status = 200, description = "Question toggled", body = Json<ToggleResponse>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn toggle_question(
    State(state): State<AppState>,
    Path((id, question)): Path<(Uuid, QuestionId)>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    let enabled = form.toggle_question(question)?;
    Ok(Json(ToggleResponse {
        enabled,
        show_custom_form: form.show_custom_form(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/custom-form/show",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Preview opened", body = Json<WizardSnapshot>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn show_custom_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.open_custom_form();
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    get,
    path = "/api/job-posts/drafts/{id}/custom-form",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Rendered custom form of the enabled questions"),
        (status = 409, description = "Preview is closed"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn get_custom_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let preview = form.lock().await.custom_form_preview()?;
    Ok(Json(preview))
}

#[utoipa::path(
    put,
    path = "/api/job-posts/drafts/{id}/answers/{question}",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("question" = String, Path, description = "Question key")
    ),
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Answer stored", body = Json<WizardSnapshot>),
        (status = 400, description = "Question takes repeatable entries"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn set_answer(
    State(state): State<AppState>,
    Path((id, question)): Path<(Uuid, QuestionId)>,
    Json(payload): Json<AnswerRequest>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.set_custom_answer(question, payload.value)?;
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/answers/education/blocks",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 201, description = "Empty education entry appended", body = Json<IndexResponse>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn add_education_block(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let index = form.lock().await.add_education_block();
    Ok((StatusCode::CREATED, Json(IndexResponse { index })))
}

#[utoipa::path(
    patch,
    path = "/api/job-posts/drafts/{id}/answers/education/blocks/{idx}",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("idx" = usize, Path, description = "Entry index")
    ),
    request_body = EducationChangeRequest,
    responses(
        (status = 200, description = "Entry updated", body = Json<WizardSnapshot>),
        (status = 400, description = "Index out of range"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn update_education_block(
    State(state): State<AppState>,
    Path((id, idx)): Path<(Uuid, usize)>,
    Json(payload): Json<EducationChangeRequest>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.handle_education_change(idx, payload.field, payload.value)?;
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/answers/experience/blocks",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 201, description = "Empty experience entry appended", body = Json<IndexResponse>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn add_experience_block(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let index = form.lock().await.add_experience_block();
    Ok((StatusCode::CREATED, Json(IndexResponse { index })))
}

#[utoipa::path(
    patch,
    path = "/api/job-posts/drafts/{id}/answers/experience/blocks/{idx}",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("idx" = usize, Path, description = "Entry index")
    ),
    request_body = ExperienceChangeRequest,
    responses(
        (status = 200, description = "Entry updated", body = Json<WizardSnapshot>),
        (status = 400, description = "Index out of range"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn update_experience_block(
    State(state): State<AppState>,
    Path((id, idx)): Path<(Uuid, usize)>,
    Json(payload): Json<ExperienceChangeRequest>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.handle_experience_change(idx, payload.field, payload.value)?;
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/next",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Advanced to the next step", body = Json<WizardSnapshot>),
        (status = 400, description = "Already on the review step"),
        (status = 422, description = "Current step has invalid fields"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn next_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.handle_next()?;
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/previous",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Moved back one step", body = Json<WizardSnapshot>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn previous_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.handle_previous();
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    get,
    path = "/api/job-posts/drafts/{id}/progress",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Step indicator"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let steps = form.lock().await.step_indicator();
    Ok(Json(steps))
}

#[utoipa::path(
    get,
    path = "/api/job-posts/drafts/{id}/review",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Read-only summary of the draft"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let form = form.lock().await;
    let review = serde_json::to_value(form.review())?;
    Ok(Json(review))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/submit",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Job posted", body = Json<WizardSnapshot>),
        (status = 400, description = "Not on the review step or already posted"),
        (status = 502, description = "Job board rejected the post"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.handle_post_job(state.job_board.as_ref()).await?;
    Ok(Json(WizardSnapshot::new(id, &form)))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/linkedin",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Job shared to LinkedIn", body = Json<LinkedInResponse>),
        (status = 400, description = "Job not posted yet"),
        (status = 502, description = "Job board rejected the request"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn post_to_linkedin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    let reply = form.post_to_linkedin(state.job_board.as_ref()).await?;
    Ok(Json(reply))
}

#[utoipa::path(
    post,
    path = "/api/job-posts/drafts/{id}/confirmation/close",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Confirmation dismissed", body = Json<WizardSnapshot>),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn close_confirmation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let form = state.sessions.get(id)?;
    let mut form = form.lock().await;
    form.close_confirmation();
    Ok(Json(WizardSnapshot::new(id, &form)))
}
