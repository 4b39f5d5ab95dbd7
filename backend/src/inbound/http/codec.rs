//! Byte-payload codec bridging the wire and the typed request/response
//! values.
//!
//! Decoding is parametrised over the request shape the endpoint expects, so
//! handlers state their contract in the type argument and a payload either
//! yields that exact shape or the call dies at the transport boundary.
//! An empty body is a decode failure, not an implicit empty request; only
//! [`decode_empty`] represents "this operation takes no input".

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::EmptyRequest;
use crate::inbound::http::error::{ApiResult, TransportError};

/// Produce the request value for operations without a body. Always succeeds.
pub fn decode_empty() -> EmptyRequest {
    EmptyRequest
}

/// Decode a JSON payload into the exact request shape `T`.
///
/// # Errors
///
/// [`TransportError::Decode`] when the body is empty, truncated, or not
/// valid JSON for `T`.
pub fn decode_request<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    if body.is_empty() {
        return Err(TransportError::decode("request body is empty"));
    }
    serde_json::from_slice(body).map_err(|err| TransportError::decode(err.to_string()))
}

/// Encode any response value as the JSON wire payload.
///
/// # Errors
///
/// [`TransportError::Encode`] when the value cannot be serialised; with the
/// envelope types this does not happen in normal operation.
pub fn encode_response<T: Serialize>(response: &T) -> ApiResult<HttpResponse> {
    let body =
        serde_json::to_vec(response).map_err(|err| TransportError::encode(err.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Serializer;

    use super::*;
    use crate::domain::{IdRequest, UsernamePasswordEmailRequest, UsernamePasswordRequest};

    #[test]
    fn empty_decode_always_succeeds() {
        assert_eq!(decode_empty(), EmptyRequest);
    }

    #[test]
    fn decodes_the_expected_shape() {
        let request: IdRequest = decode_request(br#"{"id": 3}"#).expect("valid payload");
        assert_eq!(request.id, 3);

        let request: UsernamePasswordEmailRequest =
            decode_request(br#"{"username":"alice","password":"pw1","email":"a@x.com"}"#)
                .expect("valid payload");
        assert_eq!(request.username, "alice");
        assert_eq!(request.email, "a@x.com");
    }

    #[test]
    fn empty_body_is_a_decode_failure() {
        let result = decode_request::<IdRequest>(b"");
        assert_eq!(
            result,
            Err(TransportError::decode("request body is empty"))
        );
    }

    #[rstest]
    #[case::truncated(br#"{"id": 3"#.as_slice())]
    #[case::not_json(b"id=3".as_slice())]
    #[case::wrong_field_type(br#"{"id": "three"}"#.as_slice())]
    fn malformed_payloads_fail_before_business_logic(#[case] body: &[u8]) {
        assert!(matches!(
            decode_request::<IdRequest>(body),
            Err(TransportError::Decode { .. })
        ));
    }

    #[test]
    fn missing_fields_fail_shape_validation() {
        assert!(matches!(
            decode_request::<UsernamePasswordRequest>(br#"{"username":"alice"}"#),
            Err(TransportError::Decode { .. })
        ));
    }

    #[test]
    fn encode_produces_a_json_body() {
        let response = encode_response(&IdRequest { id: 5 }).expect("encodable value");
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialise"))
        }
    }

    #[test]
    fn unserialisable_values_are_encode_failures() {
        assert!(matches!(
            encode_response(&Unencodable),
            Err(TransportError::Encode { .. })
        ));
    }
}
