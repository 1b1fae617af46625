use chrono::{DateTime, SecondsFormat, Utc};
use newwork_domain::UserIdentity;
use serde::Serialize;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since the process started.
    pub uptime: f64,
    pub environment: String,
    pub version: &'static str,
}

impl HealthResponse {
    /// Builds a healthy response stamped with the current time.
    pub fn ok(environment: String, uptime: f64) -> Self {
        Self {
            status: "OK",
            timestamp: timestamp(Utc::now()),
            uptime,
            environment,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Generic message response.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/message-response.ts"
)]
pub struct MessageResponse {
    pub message: String,
}

/// API representation of the authenticated user.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    /// Permission wire values captured at login.
    pub permissions: Vec<String>,
}

impl From<&UserIdentity> for UserResponse {
    fn from(identity: &UserIdentity) -> Self {
        Self {
            id: identity.id().to_owned(),
            email: identity.email().to_owned(),
            first_name: identity.first_name().to_owned(),
            last_name: identity.last_name().to_owned(),
            role: identity.role().as_str().to_owned(),
            permissions: identity.permissions().to_wire_values(),
        }
    }
}

pub(crate) fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
