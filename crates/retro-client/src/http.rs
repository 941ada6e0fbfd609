//! Shared HTTP response helpers for the backend and LLM clients.
//!
//! Centralizes status-code checks (non-success → [`ClientError::Api`] carrying
//! the body's `error` field when there is one) and JSON body decoding
//! (invalid JSON or missing fields → [`ClientError::Malformed`], raw body
//! logged).

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Message used when a non-success body is not JSON at all.
pub const NOT_OK_MESSAGE: &str = "Network response was not ok";

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise the body is read. A
/// body that is not JSON yields [`NOT_OK_MESSAGE`]; JSON with an `error`
/// string uses that string; other JSON falls back to
/// `HTTP error! status: {code}`.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %body, "non-success response");
    let message = match serde_json::from_str::<Value>(&body) {
        Err(_) => NOT_OK_MESSAGE.to_string(),
        Ok(value) => error_message(&value)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16())),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Decode a JSON body into `T`.
///
/// The raw body is logged at `error` level when it does not decode; the
/// returned error only carries the parser's message.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    decode_json(&body)
}

/// Decode already-read JSON text into `T`.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|error| {
        tracing::error!(%error, %body, "response body did not decode");
        ClientError::Malformed(format!("invalid JSON response: {error}"))
    })
}

/// Decode a 2xx backend body that may still report a failure.
///
/// A body carrying `error` becomes [`ClientError::Backend`] before `T` is
/// decoded, so `T` can require every field of the success shape.
pub async fn read_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    decode_envelope(&body)
}

/// Already-read counterpart of [`read_envelope`].
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    let value: Value = decode_json(body)?;
    if let Some(message) = error_message(&value) {
        return Err(ClientError::Backend(message));
    }
    serde_json::from_value(value).map_err(|error| {
        tracing::error!(%error, %body, "response body has the wrong shape");
        ClientError::Malformed(format!("unexpected response shape: {error}"))
    })
}

fn error_message(body: &Value) -> Option<String> {
    // The backend sends `{"error": "..."}`; Google APIs nest it as
    // `{"error": {"message": "..."}}`.
    let message = match body.get("error")? {
        Value::String(message) => message.clone(),
        Value::Object(map) => map.get("message")?.as_str()?.to_string(),
        _ => return None,
    };
    (!message.is_empty()).then_some(message)
}
