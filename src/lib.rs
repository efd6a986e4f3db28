//! Client for the not-so-realworld user API.
//!
//! [`flow::AuthFlow`] and [`flow::ProfileFlow`] are the entry points a
//! presentation layer calls on submit. Both return `Result<_, FlowError>` and
//! keep a shared [`LoadingGuard`] balanced so a submit control can be bound
//! to its busy flag.

pub mod api;
pub mod cli;
pub mod config;
pub mod flow;
pub mod loading;
pub mod logging;
pub mod model;

pub use api::{ApiClient, ApiError, FlowError, HttpTransport};
pub use loading::LoadingGuard;
pub use model::{Credentials, NewUser, ProfileUpdate, User};
