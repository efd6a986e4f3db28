use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::error::{FlowError, TransportError};
use crate::api::request::{ApiRequest, RequestBuilder};
use crate::api::response::{self, ApiResponse};
use crate::api::transport::{HttpTransport, Transport};
use crate::config::Config;

/// A transport bound to one server.
pub struct ApiClient<T> {
    transport: Arc<T>,
    requests: RequestBuilder,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            requests: self.requests.clone(),
        }
    }
}

impl ApiClient<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.server.user_agent)?;
        Ok(Self::new(transport, RequestBuilder::new(config.server.base_url.clone())))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, requests: RequestBuilder) -> Self {
        Self {
            transport: Arc::new(transport),
            requests,
        }
    }

    pub fn requests(&self) -> &RequestBuilder {
        &self.requests
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and decode the reply as an envelope around `R`.
    pub async fn call<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<ApiResponse<R>, FlowError> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "api_call",
            %request_id,
            method = %request.method,
            path = %request.path
        );

        async move {
            let sent = self.transport.send(request).await;
            match &sent {
                Ok(raw) => tracing::debug!(status = raw.status, bytes = raw.body.len(), "response received"),
                Err(err) => tracing::warn!(error = %err, "request failed"),
            }

            let decoded = response::decode_result(sent);
            if let Err(FlowError::Decode(err)) = &decoded {
                tracing::warn!(error = %err, "response did not decode");
            }
            decoded
        }
        .instrument(span)
        .await
    }
}
