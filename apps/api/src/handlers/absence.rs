use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use newwork_domain::UserIdentity;

use crate::dto::{
    AbsenceItemResponse, AbsenceListResponse, CreateAbsenceRequest, DecideAbsenceRequest,
    TeamAbsenceListResponse, TeamAbsenceQuery,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn my_absences_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<AbsenceListResponse>> {
    let requests = state.absence_service.my_requests(&user).await?;
    Ok(Json(requests.into()))
}

pub async fn request_absence_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    payload: Result<Json<CreateAbsenceRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AbsenceItemResponse>)> {
    let Json(payload) = payload?;
    let request = state
        .absence_service
        .request(&user, payload.into_input()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AbsenceItemResponse {
            request: request.into(),
            message: Some("Absence request submitted successfully".to_owned()),
        }),
    ))
}

pub async fn team_absences_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Query(query): Query<TeamAbsenceQuery>,
) -> ApiResult<Json<TeamAbsenceListResponse>> {
    let requests = state
        .absence_service
        .team_requests(&user, query.status()?)
        .await?;
    Ok(Json(requests.into()))
}

pub async fn decide_absence_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(absence_id): Path<String>,
    payload: Result<Json<DecideAbsenceRequest>, JsonRejection>,
) -> ApiResult<Json<AbsenceItemResponse>> {
    let Json(payload) = payload?;
    let request = state
        .absence_service
        .decide(&user, &absence_id, payload.status()?)
        .await?;

    Ok(Json(AbsenceItemResponse {
        message: Some(format!(
            "Absence request {}",
            request.status.as_str().to_ascii_lowercase()
        )),
        request: request.into(),
    }))
}
