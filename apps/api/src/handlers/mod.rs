pub mod absence;
pub mod auth;
pub mod feedback;
pub mod health;
pub mod profiles;
