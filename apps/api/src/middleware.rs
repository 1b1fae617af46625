use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiResult;
use crate::state::AppState;

/// Resolves the bearer token and exposes the session identity and token to
/// handlers through request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    let (token, identity) = state
        .session_service
        .authenticate(authorization.as_deref())
        .await?;
    tracing::debug!(user_id = identity.id(), "request authenticated");

    request.extensions_mut().insert(identity);
    request.extensions_mut().insert(token);
    Ok(next.run(request).await)
}
