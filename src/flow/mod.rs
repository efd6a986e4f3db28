//! Orchestration of user actions: build the request, await it, classify the
//! outcome, and keep the busy flag balanced on every exit path.

pub mod auth;
pub mod profile;

pub use auth::{AuthFlow, AuthRequest, FormMode, LoginForm};
pub use profile::{ProfileFlow, ProfileState};
