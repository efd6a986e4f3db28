//! Response classification.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::error::{ApiError, FlowError, TransportError};

/// Status code that marks a success envelope. Anything else is an error body.
pub const SUCCESS_STATUS: u16 = 200;

/// Success envelope wrapping every 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

/// Status and body as read off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Decode a raw response into the success envelope, or classify the failure.
pub fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<ApiResponse<T>, FlowError> {
    if response.is_success() {
        return serde_json::from_slice(&response.body).map_err(FlowError::Decode);
    }

    let error: ApiError = serde_json::from_slice(&response.body).map_err(FlowError::Decode)?;
    Err(FlowError::Api(error))
}

/// Same as [`decode`], folding a failed send into [`FlowError::Unknown`].
pub fn decode_result<T: DeserializeOwned>(
    response: Result<RawResponse, TransportError>,
) -> Result<ApiResponse<T>, FlowError> {
    decode(&response?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[test]
    fn ok_status_decodes_envelope() {
        let raw = RawResponse::new(
            200,
            r#"{"message":"ok","data":{"username":"a","email":"a@x.com","token":"t"}}"#,
        );
        let envelope = decode::<User>(&raw).unwrap();
        assert_eq!(envelope.message, "ok");
        assert_eq!(
            envelope.data,
            User {
                username: "a".to_string(),
                email: "a@x.com".to_string(),
                token: "t".to_string(),
            }
        );
    }

    #[test]
    fn ok_status_with_wrong_shape_is_decode_error() {
        let raw = RawResponse::new(200, r#"{"message":"ok","data":{"username":"a"}}"#);
        assert!(matches!(decode::<User>(&raw), Err(FlowError::Decode(_))));
    }

    #[test]
    fn error_status_with_api_error_body() {
        let raw = RawResponse::new(
            401,
            r#"{"title":"登入失敗","message":"帳號或密碼不正確。"}"#,
        );
        match decode::<User>(&raw) {
            Err(FlowError::Api(error)) => {
                assert_eq!(error.title, "登入失敗");
                assert_eq!(error.message, "帳號或密碼不正確。");
            }
            other => panic!("expected api failure, got {:?}", other),
        }
    }

    #[test]
    fn error_status_with_malformed_body_is_decode_error() {
        let raw = RawResponse::new(422, r#"{"error":"nope"}"#);
        assert!(matches!(decode::<User>(&raw), Err(FlowError::Decode(_))));

        let raw = RawResponse::new(500, "NOT FOUND");
        assert!(matches!(decode::<User>(&raw), Err(FlowError::Decode(_))));
    }

    #[test]
    fn non_200_success_codes_are_still_errors() {
        let raw = RawResponse::new(
            201,
            r#"{"message":"ok","data":{"username":"a","email":"a@x.com","token":"t"}}"#,
        );
        assert!(matches!(decode::<User>(&raw), Err(FlowError::Decode(_))));
    }

    #[test]
    fn transport_failure_is_unknown() {
        let result = decode_result::<User>(Err(TransportError::InvalidUrl("x".to_string())));
        assert!(matches!(result, Err(FlowError::Unknown(_))));
    }
}
