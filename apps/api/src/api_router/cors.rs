use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use newwork_core::AppError;
use tower_http::cors::{AllowOrigin, CorsLayer};

const LOCAL_DEV_ORIGIN: &str = "http://localhost:5173";

pub(super) fn build_cors_layer(frontend_url: &str) -> Result<CorsLayer, AppError> {
    let mut origins = vec![
        HeaderValue::from_str(frontend_url)
            .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
    ];
    if frontend_url != LOCAL_DEV_ORIGIN {
        origins.push(HeaderValue::from_static(LOCAL_DEV_ORIGIN));
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]))
}
