pub mod health;
pub mod options;
pub mod wizard;

use axum::{
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    let base_routes = Router::new().route("/health", get(health::health));

    let options_api = Router::new()
        .route("/api/options/countries", get(options::list_countries))
        .route("/api/options/:kind", get(options::list_options))
        .route(
            "/api/options/countries/:country/states",
            get(options::list_states),
        )
        .route(
            "/api/options/countries/:country/states/:state/cities",
            get(options::list_cities),
        );

    let wizard_api = Router::new()
        .route("/api/job-posts/drafts", post(wizard::create_draft))
        .route(
            "/api/job-posts/drafts/:id",
            get(wizard::get_draft).delete(wizard::delete_draft),
        )
        .route("/api/job-posts/drafts/:id/fields", patch(wizard::update_field))
        .route("/api/job-posts/drafts/:id/selects", put(wizard::update_select))
        .route("/api/job-posts/drafts/:id/skills", put(wizard::update_skills))
        .route(
            "/api/job-posts/drafts/:id/screening-questions",
            post(wizard::add_screening_question),
        )
        .route(
            "/api/job-posts/drafts/:id/screening-questions/:idx",
            patch(wizard::update_screening_question).delete(wizard::remove_screening_question),
        )
        .route(
            "/api/job-posts/drafts/:id/questions/:question/toggle",
            post(wizard::toggle_question),
        )
        .route(
            "/api/job-posts/drafts/:id/custom-form",
            get(wizard::get_custom_form),
        )
        .route(
            "/api/job-posts/drafts/:id/custom-form/show",
            post(wizard::show_custom_form),
        )
        .route(
            "/api/job-posts/drafts/:id/answers/:question",
            put(wizard::set_answer),
        )
        .route(
            "/api/job-posts/drafts/:id/answers/education/blocks",
            post(wizard::add_education_block),
        )
        .route(
            "/api/job-posts/drafts/:id/answers/education/blocks/:idx",
            patch(wizard::update_education_block),
        )
        .route(
            "/api/job-posts/drafts/:id/answers/experience/blocks",
            post(wizard::add_experience_block),
        )
        .route(
            "/api/job-posts/drafts/:id/answers/experience/blocks/:idx",
            patch(wizard::update_experience_block),
        )
        .route("/api/job-posts/drafts/:id/next", post(wizard::next_step))
        .route("/api/job-posts/drafts/:id/previous", post(wizard::previous_step))
        .route("/api/job-posts/drafts/:id/progress", get(wizard::get_progress))
        .route("/api/job-posts/drafts/:id/review", get(wizard::get_review))
        .route("/api/job-posts/drafts/:id/submit", post(wizard::submit))
        .route("/api/job-posts/drafts/:id/linkedin", post(wizard::post_to_linkedin))
        .route(
            "/api/job-posts/drafts/:id/confirmation/close",
            post(wizard::close_confirmation),
        );

    base_routes
        .merge(options_api)
        .merge(wizard_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
