use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use job_post_wizard::{
    dto::job_post_dto::{JobPostPayload, LinkedInResponse, PostJobResponse},
    error::{Error, Result},
    routes,
    services::{job_board_service::JobBoard, session_service::SessionService},
    AppState,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

#[derive(Default)]
struct StubJobBoard {
    posted: Mutex<Vec<JobPostPayload>>,
    reject: bool,
}

#[async_trait]
impl JobBoard for StubJobBoard {
    async fn post_job(&self, payload: &JobPostPayload) -> Result<PostJobResponse> {
        if self.reject {
            return Err(Error::Upstream {
                status: 500,
                message: "database unavailable".to_string(),
            });
        }
        self.posted.lock().unwrap().push(payload.clone());
        Ok(PostJobResponse {
            success: true,
            job_id: "job-42".to_string(),
            message: Some("Job created".to_string()),
        })
    }

    async fn post_job_to_linkedin(&self, job_id: &str) -> Result<LinkedInResponse> {
        Ok(LinkedInResponse {
            message: format!("Job {} shared", job_id),
        })
    }
}

fn app_with(board: Arc<StubJobBoard>) -> Router {
    routes::router(AppState::new(board))
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn new_draft(app: &Router) -> String {
    let (status, body) = call(app, "POST", "/api/job-posts/drafts", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn fill_general_info(app: &Router, base: &str) {
    for input in [
        json!({"field": "job_title", "value": "Backend Engineer"}),
        json!({"field": "job_description", "value": "Build services"}),
        json!({"field": "experience_level", "value": "4"}),
        json!({"field": "salary_min", "value": "90000"}),
        json!({"field": "salary_max", "value": "120000"}),
    ] {
        let (status, _) = call(app, "PATCH", &format!("{}/fields", base), Some(input)).await;
        assert_eq!(status, StatusCode::OK);
    }
    for select in [
        json!({"field": "department", "option": {"value": "it", "label": "IT"}}),
        json!({"field": "country", "option": {"value": "US", "label": "United States"}}),
        json!({"field": "state", "option": {"value": "TX", "label": "Texas"}}),
        json!({"field": "city", "option": {"value": "Austin", "label": "Austin"}}),
    ] {
        let (status, _) = call(app, "PUT", &format!("{}/selects", base), Some(select)).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = call(
        app,
        "PUT",
        &format!("{}/skills", base),
        Some(json!({"skills": [{"value": "rust", "label": "Rust"}]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn wizard_flow_end_to_end() {
    let board = Arc::new(StubJobBoard::default());
    let app = app_with(board.clone());
    let id = new_draft(&app).await;
    let base = format!("/api/job-posts/drafts/{}", id);

    let (status, body) = call(&app, "POST", &format!("{}/next", base), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["step"], 1);
    assert!(body["errors"]["job_title"].is_string());
    assert!(body["errors"]["required_skills"].is_string());

    let (_, snapshot) = call(&app, "GET", &base, None).await;
    assert_eq!(snapshot["current_step"], 1);
    assert!(snapshot["errors"]["job_title"].is_string());

    fill_general_info(&app, &base).await;

    let (status, snapshot) = call(&app, "POST", &format!("{}/next", base), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["current_step"], 2);
    assert_eq!(snapshot["errors"], json!({}));

    let (status, body) = call(&app, "POST", &format!("{}/next", base), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["education_level"].is_string());

    let (status, toggled) = call(
        &app,
        "POST",
        &format!("{}/questions/education/toggle", base),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["enabled"], true);
    assert_eq!(toggled["show_custom_form"], false);

    let (status, added) = call(
        &app,
        "POST",
        &format!("{}/answers/education/blocks", base),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(added["index"], 0);
    let (status, _) = call(
        &app,
        "PATCH",
        &format!("{}/answers/education/blocks/0", base),
        Some(json!({"field": "institution_name", "value": "MIT"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        &app,
        "PATCH",
        &format!("{}/fields", base),
        Some(json!({"field": "education_level", "value": "bachelors"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, snapshot) = call(&app, "POST", &format!("{}/next", base), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["current_step"], 3);

    let (status, review) = call(&app, "GET", &format!("{}/review", base), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(review["job_title"], "Backend Engineer");
    assert_eq!(review["location"], "Austin, Texas, United States (On-site)");

    let (status, snapshot) = call(&app, "POST", &format!("{}/submit", base), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["review_completed"], true);
    assert_eq!(snapshot["show_confirmation"], true);
    assert_eq!(snapshot["posted_job_id"], "job-42");
    assert_eq!(snapshot["notice"]["level"], "success");

    {
        let posted = board.posted.lock().unwrap();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].job_title, "Backend Engineer");
        assert_eq!(posted[0].country.as_deref(), Some("United States"));
        assert!(posted[0].job_schema.education);
        assert!(!posted[0].job_schema.skills);
    }

    let (status, _) = call(&app, "POST", &format!("{}/submit", base), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, shared) = call(&app, "POST", &format!("{}/linkedin", base), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shared["message"], "Job job-42 shared");

    let (_, snapshot) = call(
        &app,
        "POST",
        &format!("{}/confirmation/close", base),
        None,
    )
    .await;
    assert_eq!(snapshot["show_confirmation"], false);

    let (_, snapshot) = call(&app, "POST", &format!("{}/previous", base), None).await;
    assert_eq!(snapshot["current_step"], 2);
    let (_, steps) = call(&app, "GET", &format!("{}/progress", base), None).await;
    assert_eq!(steps[2]["is_completed"], true);
    assert_eq!(steps[2]["is_current"], false);
}

#[tokio::test]
async fn rejected_submission_keeps_the_draft_and_reports() {
    let board = Arc::new(StubJobBoard {
        reject: true,
        ..Default::default()
    });
    let app = app_with(board);
    let id = new_draft(&app).await;
    let base = format!("/api/job-posts/drafts/{}", id);

    fill_general_info(&app, &base).await;
    call(&app, "POST", &format!("{}/next", base), None).await;
    call(
        &app,
        "PATCH",
        &format!("{}/fields", base),
        Some(json!({"field": "education_level", "value": "masters"})),
    )
    .await;
    call(&app, "POST", &format!("{}/next", base), None).await;

    let (status, body) = call(&app, "POST", &format!("{}/submit", base), None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("database unavailable"));

    let (_, snapshot) = call(&app, "GET", &base, None).await;
    assert_eq!(snapshot["current_step"], 3);
    assert_eq!(snapshot["review_completed"], false);
    assert_eq!(snapshot["notice"]["level"], "error");
    assert_eq!(snapshot["draft"]["job_title"], "Backend Engineer");
}

#[tokio::test]
async fn country_change_clears_state_and_city() {
    let app = app_with(Arc::new(StubJobBoard::default()));
    let id = new_draft(&app).await;
    let base = format!("/api/job-posts/drafts/{}", id);
    fill_general_info(&app, &base).await;

    let (status, body) = call(
        &app,
        "PUT",
        &format!("{}/selects", base),
        Some(json!({"field": "city", "option": {"value": "Pune", "label": "Pune"}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = call(
        &app,
        "PUT",
        &format!("{}/selects", base),
        Some(json!({"field": "country", "option": {"value": "ZZ", "label": "Nowhere"}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, snapshot) = call(&app, "GET", &base, None).await;
    assert_eq!(snapshot["draft"]["country"]["value"], "US");
    assert_eq!(snapshot["draft"]["city"]["value"], "Austin");

    let (status, snapshot) = call(
        &app,
        "PUT",
        &format!("{}/selects", base),
        Some(json!({"field": "country", "option": {"value": "IN", "label": "India"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["draft"]["country"]["value"], "IN");
    assert!(snapshot["draft"]["state"].is_null());
    assert!(snapshot["draft"]["city"].is_null());
}

#[tokio::test]
async fn screening_questions_keep_one_slot() {
    let app = app_with(Arc::new(StubJobBoard::default()));
    let id = new_draft(&app).await;
    let base = format!("/api/job-posts/drafts/{}", id);

    let (status, added) = call(
        &app,
        "POST",
        &format!("{}/screening-questions", base),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(added["index"], 1);

    let (_, snapshot) = call(
        &app,
        "PATCH",
        &format!("{}/screening-questions/1", base),
        Some(json!({"text": "Are you willing to relocate?"})),
    )
    .await;
    assert_eq!(
        snapshot["draft"]["screening_questions"],
        json!(["", "Are you willing to relocate?"])
    );

    call(&app, "DELETE", &format!("{}/screening-questions/0", base), None).await;
    let (_, snapshot) = call(
        &app,
        "DELETE",
        &format!("{}/screening-questions/0", base),
        None,
    )
    .await;
    assert_eq!(snapshot["draft"]["screening_questions"], json!([""]));

    let (status, _) = call(
        &app,
        "DELETE",
        &format!("{}/screening-questions/5", base),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn custom_form_preview_follows_toggles() {
    let app = app_with(Arc::new(StubJobBoard::default()));
    let id = new_draft(&app).await;
    let base = format!("/api/job-posts/drafts/{}", id);

    let (_, snapshot) = call(&app, "POST", &format!("{}/custom-form/show", base), None).await;
    assert_eq!(snapshot["show_custom_form"], true);

    call(&app, "POST", &format!("{}/questions/gender/toggle", base), None).await;
    let (_, snapshot) = call(&app, "GET", &base, None).await;
    assert_eq!(snapshot["show_custom_form"], false);

    let (status, _) = call(
        &app,
        "PUT",
        &format!("{}/answers/gender", base),
        Some(json!({"value": "female"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, "GET", &format!("{}/custom-form", base), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    call(&app, "POST", &format!("{}/custom-form/show", base), None).await;
    let (status, preview) = call(&app, "GET", &format!("{}/custom-form", base), None).await;
    assert_eq!(status, StatusCode::OK);
    let gender = preview["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["id"] == "gender")
        .unwrap();
    assert_eq!(gender["input"]["input"], "scalar");
    assert_eq!(gender["input"]["value"], "female");
    assert!(!gender["input"]["options"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn option_lists_and_cascades() {
    let app = app_with(Arc::new(StubJobBoard::default()));

    let (status, health) = call(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    let (status, currencies) = call(&app, "GET", "/api/options/currencies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(currencies[0]["value"], "USD");

    let (status, countries) = call(&app, "GET", "/api/options/countries", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(countries
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["value"] == "GB"));

    let (_, states) = call(&app, "GET", "/api/options/countries/US/states", None).await;
    assert!(states.as_array().unwrap().iter().any(|s| s["value"] == "CA"));

    let (_, cities) = call(
        &app,
        "GET",
        "/api/options/countries/US/states/TX/cities",
        None,
    )
    .await;
    assert!(cities
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["value"] == "Austin"));

    let (_, none) = call(&app, "GET", "/api/options/countries/ZZ/states", None).await;
    assert_eq!(none, json!([]));

    let (status, _) = call(&app, "GET", "/api/options/salaries", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn discarded_sessions_are_gone() {
    let app = app_with(Arc::new(StubJobBoard::default()));
    let id = new_draft(&app).await;
    let base = format!("/api/job-posts/drafts/{}", id);

    let (status, _) = call(&app, "DELETE", &base, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&app, "GET", &base, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = call(&app, "DELETE", &base, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn abandoned_sessions_expire() {
    let state = AppState::with_sessions(
        SessionService::new(Duration::from_millis(100)),
        Arc::new(StubJobBoard::default()),
    );
    let sessions = state.sessions.clone();
    let app = routes::router(state);

    let abandoned = new_draft(&app).await;
    tokio::time::sleep(Duration::from_millis(150)).await;
    let active = new_draft(&app).await;

    assert_eq!(sessions.len(), 1);
    let (status, _) = call(
        &app,
        "GET",
        &format!("/api/job-posts/drafts/{}", abandoned),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, "GET", &format!("/api/job-posts/drafts/{}", active), None).await;
    assert_eq!(status, StatusCode::OK);
}
