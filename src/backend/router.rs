//! Route table for the public form endpoints.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::{handlers::*, middlewares::rate_limit, AppState};

/// Builds the application router around the given state
pub fn get_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/csrf", get(issue_token))
        .route("/contact", post(submit_contact))
        .route("/reviews", get(list_reviews).post(submit_review))
        .route("/admissions", post(submit_admission))
        .route("/gallery", get(list_gallery))
        .layer(from_fn_with_state(state.clone(), rate_limit))
        .with_state(state);

    // Any origin is accepted in debug builds only
    if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}
