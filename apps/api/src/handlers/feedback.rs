use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use newwork_domain::UserIdentity;

use crate::dto::{
    CreateFeedbackRequest, EnhanceTextRequest, EnhanceTextResponse, FeedbackItemResponse,
    FeedbackListResponse, MessageResponse, UpdateFeedbackRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn received_feedback_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<FeedbackListResponse>> {
    let feedback = state.feedback_service.received(&user).await?;
    Ok(Json(feedback.into()))
}

pub async fn profile_feedback_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(profile_id): Path<String>,
) -> ApiResult<Json<FeedbackListResponse>> {
    let feedback = state.feedback_service.for_profile(&user, &profile_id).await?;
    Ok(Json(feedback.into()))
}

pub async fn create_feedback_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(profile_id): Path<String>,
    payload: Result<Json<CreateFeedbackRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<FeedbackItemResponse>)> {
    let Json(payload) = payload?;
    let created = state
        .feedback_service
        .create(&user, &profile_id, payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FeedbackItemResponse {
            feedback: created.into(),
            message: Some("Feedback submitted successfully".to_owned()),
        }),
    ))
}

pub async fn enhance_text_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    payload: Result<Json<EnhanceTextRequest>, JsonRejection>,
) -> ApiResult<Json<EnhanceTextResponse>> {
    let Json(payload) = payload?;
    let original = payload.text.clone().unwrap_or_default();
    let outcome = state
        .feedback_service
        .enhance_text(&user, payload.text, payload.employee_name.as_deref())
        .await?;

    Ok(Json(EnhanceTextResponse::new(original, outcome)))
}

pub async fn get_feedback_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(feedback_id): Path<String>,
) -> ApiResult<Json<FeedbackItemResponse>> {
    let feedback = state.feedback_service.get(&user, &feedback_id).await?;

    Ok(Json(FeedbackItemResponse {
        feedback: feedback.into(),
        message: None,
    }))
}

pub async fn update_feedback_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(feedback_id): Path<String>,
    payload: Result<Json<UpdateFeedbackRequest>, JsonRejection>,
) -> ApiResult<Json<FeedbackItemResponse>> {
    let Json(payload) = payload?;
    let feedback = state
        .feedback_service
        .update(&user, &feedback_id, payload.content)
        .await?;

    Ok(Json(FeedbackItemResponse {
        feedback: feedback.into(),
        message: Some("Feedback updated successfully".to_owned()),
    }))
}

pub async fn delete_feedback_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(feedback_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.feedback_service.delete(&user, &feedback_id).await?;

    Ok(Json(MessageResponse {
        message: "Feedback deleted successfully".to_owned(),
    }))
}
