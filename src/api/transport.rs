use async_trait::async_trait;
use reqwest::Client;

use crate::api::error::TransportError;
use crate::api::request::ApiRequest;
use crate::api::response::RawResponse;

/// Sends a request and returns the raw reply.
///
/// The HTTP implementation is [`HttpTransport`]; tests plug in scripted
/// transports to drive flows without a server.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(TransportError::Request)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|_| TransportError::InvalidUrl(request.url.clone()))?;

        let mut builder = self
            .client
            .request(request.method, url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(TransportError::Request)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(TransportError::ReadBody)?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
