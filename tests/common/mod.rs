//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use realworld_client::api::{ApiClient, HttpTransport, RequestBuilder};
use realworld_client::User;
use std::net::TcpListener;

/// Build an HTTP client pointed at `base_url`.
pub fn http_client(base_url: &str) -> ApiClient<HttpTransport> {
    let transport = HttpTransport::new("realworld-client-tests").expect("Failed to build client");
    ApiClient::new(transport, RequestBuilder::new(base_url))
}

/// A base URL nothing is listening on.
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn user(username: &str, email: &str, token: &str) -> User {
    User {
        username: username.to_string(),
        email: email.to_string(),
        token: token.to_string(),
    }
}
