use axum::Router;
use axum::http::Uri;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use newwork_core::AppError;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route("/api/auth/logout", post(handlers::auth::logout_handler))
        .route("/api/auth/me", get(handlers::auth::me_handler))
        .route(
            "/api/profiles/list/all",
            get(handlers::profiles::list_all_profiles_handler),
        )
        .route(
            "/api/profiles/browse",
            get(handlers::profiles::browse_profiles_handler),
        )
        .route(
            "/api/profiles/departments/list",
            get(handlers::profiles::list_departments_handler),
        )
        .route(
            "/api/profiles/{profile_id}",
            get(handlers::profiles::get_profile_handler)
                .put(handlers::profiles::update_profile_handler),
        )
        .route(
            "/api/feedback",
            get(handlers::feedback::received_feedback_handler),
        )
        .route(
            "/api/feedback/enhance",
            post(handlers::feedback::enhance_text_handler),
        )
        .route(
            "/api/feedback/profile/{profile_id}",
            get(handlers::feedback::profile_feedback_handler)
                .post(handlers::feedback::create_feedback_handler),
        )
        .route(
            "/api/feedback/{feedback_id}",
            get(handlers::feedback::get_feedback_handler)
                .put(handlers::feedback::update_feedback_handler)
                .delete(handlers::feedback::delete_feedback_handler),
        )
        .route(
            "/api/absence",
            post(handlers::absence::request_absence_handler),
        )
        .route("/api/absence/my", get(handlers::absence::my_absences_handler))
        .route(
            "/api/absence/team",
            get(handlers::absence::team_absences_handler),
        )
        .route(
            "/api/absence/{absence_id}/status",
            put(handlers::absence::decide_absence_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_auth,
        ));

    let cors_layer = cors::build_cors_layer(frontend_url)?;

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/api/auth/login", post(handlers::auth::login_handler))
        .merge(protected_routes)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}

async fn route_not_found(uri: Uri) -> ApiResult<()> {
    tracing::debug!(%uri, "no route matched");
    Err(ApiError(AppError::NotFound("Route not found".to_owned())))
}
