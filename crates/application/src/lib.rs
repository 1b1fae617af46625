//! Application services and ports.

#![forbid(unsafe_code)]

mod absence_service;
mod auth_service;
mod authorization;
mod directory_ports;
mod enhancement;
mod feedback_service;
mod profile_service;
mod session_service;

#[cfg(test)]
mod test_support;

pub use absence_service::{AbsenceInput, AbsenceService, TeamAbsence};
pub use auth_service::{AuthService, LoginInput, LoginOutcome};
pub use directory_ports::{FeedbackRepository, ProfileRepository};
pub use enhancement::{
    EnhancementFailure, EnhancementOutcome, FeedbackEnhancer, enhancement_prompt,
};
pub use feedback_service::{CreateFeedbackInput, FeedbackService, FeedbackView};
pub use profile_service::{
    DirectoryEntry, ProfileLookup, ProfileService, PublicDirectoryEntry,
};
pub use session_service::{SessionRepository, SessionService};
