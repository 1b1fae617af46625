mod absence;
mod auth;
mod common;
mod feedback;
mod profiles;

pub use absence::{
    AbsenceItemResponse, AbsenceListResponse, AbsenceRequestResponse, CreateAbsenceRequest,
    DecideAbsenceRequest, TeamAbsenceListResponse, TeamAbsenceQuery,
};
pub use auth::{LoginRequest, LoginResponse, MeResponse};
pub use common::{HealthResponse, MessageResponse, UserResponse};
pub use feedback::{
    CreateFeedbackRequest, EnhanceTextRequest, EnhanceTextResponse, FeedbackItemResponse,
    FeedbackListResponse, UpdateFeedbackRequest,
};
pub use profiles::{
    DepartmentsResponse, DirectoryQuery, DirectoryResponse, DirectoryRowResponse, ProfileBody,
    ProfileResponse, PublicDirectoryResponse, PublicDirectoryRowResponse, UpdateProfileRequest,
    UpdateProfileResponse,
};
