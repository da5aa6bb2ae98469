//! HTTP helper functions for Crux Core
//!
//! Turn raw `crux_http` results into typed `Result<T, ClientError>` values so
//! that the request macros stay thin and the classification stays testable.

use crux_http::Response;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::ApiReply;

/// Base URL for the plug API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires absolute
/// URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The shell strips this prefix before sending requests via `fetch()`,
/// making them relative to the page origin.
pub const BASE_URL: &str = "https://relative";

pub const STATUS_ENDPOINT: &str = "/api/status";
pub const REQUEST_VERIFICATION_ENDPOINT: &str = "/api/request_verification";
pub const CONTROL_ENDPOINT: &str = "/api/control";
pub const REFRESH_ENDPOINT: &str = "/api/refresh";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use plug_panel_core::http_helpers::build_url;
/// let url = build_url("/api/status");
/// assert_eq!(url, "https://relative/api/status");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Classify the body of a `{success, message}` reply.
///
/// The endpoints answer rejections with a JSON body, sometimes together with a
/// non-2xx status, so the body decides. A body that is not a reply at all is a
/// transport failure.
pub fn classify_reply(action: &str, status: &str, body: &[u8]) -> Result<ApiReply, ClientError> {
    match serde_json::from_slice::<ApiReply>(body) {
        Ok(reply) if reply.success => Ok(reply),
        Ok(reply) => Err(ClientError::Rejected {
            message: reply.message,
        }),
        Err(e) => Err(ClientError::transport(
            action,
            format!("HTTP {status}: invalid reply ({e})"),
        )),
    }
}

/// Parse a `{success, message}` reply from the response.
pub fn parse_reply(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<ApiReply, ClientError> {
    let status = response.status().to_string();
    let body = response.take_body().unwrap_or_default();
    classify_reply(action, &status, &body)
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::transport(action, format!("HTTP {status}")));
    }

    match response.take_body() {
        Some(body) => serde_json::from_slice(&body)
            .map_err(|e| ClientError::transport(action, format!("JSON parse error: {e}"))),
        None => Err(ClientError::transport(action, "empty response body")),
    }
}

/// Process HTTP response result and parse a `{success, message}` reply
pub fn process_reply(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<ApiReply, ClientError> {
    match result {
        Ok(mut response) => parse_reply(action, &mut response),
        Err(e) => Err(ClientError::transport(action, e)),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, ClientError> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(ClientError::transport(action, e)),
    }
}

// `crux_http::Response` has no public constructor, so the response-level
// wrappers are covered through the update handlers; the body classification
// is tested directly.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_reply() {
        let reply = classify_reply("Refresh", "200", br#"{"success":true,"message":"ok"}"#);

        assert_eq!(
            reply,
            Ok(ApiReply {
                success: true,
                message: Some("ok".to_string()),
                device_offline: false,
            })
        );
    }

    #[test]
    fn rejected_reply_keeps_message() {
        let reply = classify_reply("Control", "200", br#"{"success":false,"message":"wrong code"}"#);

        assert_eq!(
            reply,
            Err(ClientError::Rejected {
                message: Some("wrong code".to_string())
            })
        );
    }

    #[test]
    fn rejection_on_error_status_is_still_a_rejection() {
        let reply = classify_reply("Control", "400", br#"{"success":false}"#);

        assert_eq!(reply, Err(ClientError::Rejected { message: None }));
    }

    #[test]
    fn non_json_body_is_transport_error() {
        let reply = classify_reply("Control", "502", b"<html>Bad Gateway</html>");

        assert!(matches!(reply, Err(ClientError::Transport { .. })));
    }
}
