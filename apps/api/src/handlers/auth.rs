use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use newwork_core::SessionToken;
use newwork_domain::UserIdentity;

use crate::dto::{LoginRequest, LoginResponse, MeResponse, MessageResponse, UserResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(payload) = payload?;
    let outcome = state.auth_service.login(payload.into()).await?;

    Ok(Json(LoginResponse {
        user: UserResponse::from(&outcome.identity),
        token: outcome.token.as_str().to_owned(),
    }))
}

pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> ApiResult<Json<MessageResponse>> {
    state.auth_service.logout(&token).await?;

    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_owned(),
    }))
}

pub async fn me_handler(Extension(user): Extension<UserIdentity>) -> Json<MeResponse> {
    Json(MeResponse {
        user: UserResponse::from(&user),
    })
}
