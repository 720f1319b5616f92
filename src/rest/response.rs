//! Response decoding — ECSM envelope handling and typed materialization.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::EcsmError;

/// Envelope code the server uses for an application-level success.
const ENVELOPE_OK: i64 = 200;

/// Standard ECSM response envelope: `{"status": .., "message": .., "data": ..}`.
#[derive(Debug, Deserialize)]
struct Envelope {
    status: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// The outcome of one executed request.
///
/// Holds the raw status and body; nothing is interpreted until the caller
/// asks for a shape via [`decode`](Response::decode) or explicitly drops the
/// payload via [`discard`](Response::discard).
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    body: Vec<u8>,
}

impl Response {
    pub(crate) fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// HTTP status code of the response.
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Decode the success payload into `T`.
    ///
    /// Fails with [`EcsmError::Remote`] when the HTTP status is non-success
    /// or the envelope reports a domain error, and with [`EcsmError::Decode`]
    /// when the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, EcsmError> {
        let envelope = self.envelope()?;
        Ok(serde_json::from_value(envelope.data)?)
    }

    /// Check the response for success and drop the payload. Used by
    /// operations whose success carries no meaningful body.
    pub fn discard(self) -> Result<(), EcsmError> {
        self.envelope().map(|_| ())
    }

    fn envelope(self) -> Result<Envelope, EcsmError> {
        if !self.status.is_success() {
            // Prefer the envelope message when the error body carries one.
            let message = serde_json::from_slice::<Envelope>(&self.body)
                .ok()
                .map(|e| e.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    tracing::warn!(status = self.status.as_u16(), "non-JSON error body");
                    String::from_utf8_lossy(&self.body).into_owned()
                });
            return Err(EcsmError::Remote {
                code: i64::from(self.status.as_u16()),
                message,
            });
        }

        let envelope: Envelope = serde_json::from_slice(&self.body)?;
        if envelope.status != ENVELOPE_OK {
            return Err(EcsmError::Remote {
                code: envelope.status,
                message: envelope.message,
            });
        }
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_response(json: &str) -> Response {
        Response::new(StatusCode::OK, json.as_bytes().to_vec())
    }

    #[test]
    fn decode_materializes_envelope_data() {
        let resp = ok_response(r#"{"status":200,"message":"success","data":{"id":"svc-1"}}"#);

        #[derive(Deserialize)]
        struct Created {
            id: String,
        }
        let created: Created = resp.decode().unwrap();
        assert_eq!(created.id, "svc-1");
    }

    #[test]
    fn decode_primitive_data() {
        let resp = ok_response(r#"{"status":200,"message":"","data":true}"#);
        let exists: bool = resp.decode().unwrap();
        assert!(exists);
    }

    #[test]
    fn envelope_domain_error_surfaces_as_remote() {
        let resp = ok_response(r#"{"status":1404,"message":"record not found"}"#);
        let err = resp.decode::<serde_json::Value>().unwrap_err();
        match err {
            EcsmError::Remote { code, message } => {
                assert_eq!(code, 1404);
                assert_eq!(message, "record not found");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn http_error_status_surfaces_as_remote() {
        let resp = Response::new(StatusCode::NOT_FOUND, b"no such route".to_vec());
        let err = resp.decode::<serde_json::Value>().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn http_error_prefers_envelope_message() {
        let resp = Response::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"status":500,"message":"database offline"}"#.to_vec(),
        );
        match resp.decode::<serde_json::Value>().unwrap_err() {
            EcsmError::Remote { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn discard_ignores_payload_but_checks_status() {
        ok_response(r#"{"status":200,"message":"success","data":"ignored"}"#)
            .discard()
            .unwrap();

        let err = ok_response(r#"{"status":1500,"message":"deploy failed"}"#)
            .discard()
            .unwrap_err();
        assert!(matches!(err, EcsmError::Remote { code: 1500, .. }));
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        let resp = ok_response(r#"{"status":200,"data":{"id":42}}"#);

        #[derive(Debug, Deserialize)]
        struct Created {
            #[allow(dead_code)]
            id: String,
        }
        let err = resp.decode::<Created>().unwrap_err();
        assert!(matches!(err, EcsmError::Decode(_)));
    }
}
