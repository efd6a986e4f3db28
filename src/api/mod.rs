//! HTTP plumbing for the user API: request construction, transport, and
//! response classification.

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

pub use client::ApiClient;
pub use error::{ApiError, ApiErrorDetail, FlowError, TransportError};
pub use request::{ApiRequest, RequestBuilder, LOGIN_PATH, USER_PATH};
pub use response::{decode, ApiResponse, RawResponse};
pub use transport::{HttpTransport, Transport};
