use newwork_application::LoginInput;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::UserResponse;

/// Incoming payload for login.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-request.ts"
)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<LoginRequest> for LoginInput {
    fn from(value: LoginRequest) -> Self {
        Self {
            email: value.email,
            role: value.role,
        }
    }
}

/// Successful login payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-response.ts"
)]
pub struct LoginResponse {
    pub user: UserResponse,
    /// Bearer token for the `Authorization` header.
    pub token: String,
}

/// Current session identity.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/me-response.ts"
)]
pub struct MeResponse {
    pub user: UserResponse,
}
