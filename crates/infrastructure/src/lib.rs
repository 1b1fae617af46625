//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod gemini_feedback_enhancer;
mod id_sequence;
mod in_memory_feedback_repository;
mod in_memory_profile_repository;
mod in_memory_session_repository;
mod passthrough_feedback_enhancer;

pub use gemini_feedback_enhancer::{DEFAULT_GEMINI_API_URL, GeminiFeedbackEnhancer};
pub use in_memory_feedback_repository::InMemoryFeedbackRepository;
pub use in_memory_profile_repository::InMemoryProfileRepository;
pub use in_memory_session_repository::InMemorySessionRepository;
pub use passthrough_feedback_enhancer::PassthroughFeedbackEnhancer;
