use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query, State};
use newwork_domain::{ProfileFilter, PublicProfile, UserIdentity, project_profile};

use crate::dto::{
    DepartmentsResponse, DirectoryQuery, DirectoryResponse, DirectoryRowResponse, ProfileBody,
    ProfileResponse, PublicDirectoryResponse, PublicDirectoryRowResponse, UpdateProfileRequest,
    UpdateProfileResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn get_profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(profile_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let lookup = state.profile_service.get_profile(&user, &profile_id).await?;

    Ok(Json(ProfileResponse {
        profile: lookup.view.into(),
        feedback_count: lookup.feedback_count,
    }))
}

pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(profile_id): Path<String>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let Json(payload) = payload?;
    let updated = state
        .profile_service
        .update_profile(&user, &profile_id, payload.into())
        .await?;

    // The response follows the caller's own read projection.
    let profile = match project_profile(&user, &updated) {
        Some(view) => ProfileBody::from(view),
        None => ProfileBody::Public(PublicProfile::from(&updated).into()),
    };

    Ok(Json(UpdateProfileResponse {
        profile,
        message: "Profile updated successfully".to_owned(),
    }))
}

pub async fn list_all_profiles_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Query(query): Query<DirectoryQuery>,
) -> ApiResult<Json<DirectoryResponse>> {
    let profiles: Vec<DirectoryRowResponse> = state
        .profile_service
        .list_all(&user, &ProfileFilter::from(query))
        .await?
        .into_iter()
        .map(DirectoryRowResponse::from)
        .collect();

    Ok(Json(DirectoryResponse {
        total: profiles.len(),
        profiles,
    }))
}

pub async fn browse_profiles_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Query(query): Query<DirectoryQuery>,
) -> ApiResult<Json<PublicDirectoryResponse>> {
    let profiles: Vec<PublicDirectoryRowResponse> = state
        .profile_service
        .browse(&user, &ProfileFilter::from(query))
        .await?
        .into_iter()
        .map(PublicDirectoryRowResponse::from)
        .collect();

    Ok(Json(PublicDirectoryResponse {
        total: profiles.len(),
        profiles,
    }))
}

pub async fn list_departments_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<DepartmentsResponse>> {
    let departments = state.profile_service.departments(&user).await?;
    Ok(Json(DepartmentsResponse { departments }))
}
