use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{ApiError, Error, Result};

/// A successfully classified Spotify response.
///
/// `body` holds the parsed JSON document. Responses without content (for
/// example the `204 No Content` returned by most player and library writes)
/// carry a status marker instead: `{"status": 204}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
    no_content: bool,
}

impl Response {
    /// Decodes the body into `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.body)?)
    }

    /// Whether the response carried no content and `body` is the status marker.
    ///
    /// Decided from the raw body: a JSON document reading `{"status": 200}`
    /// is content, not a marker.
    pub fn is_status_marker(&self) -> bool {
        self.no_content
    }
}

/// Reads the body of `response` and turns it into an outcome.
pub(crate) async fn classify(response: reqwest::Response) -> Result<Response> {
    let status = response.status();
    let body = response.bytes().await?;

    debug!(target: "spotify", "response status: {}", status);

    classify_parts(status, &body)
}

/// Classification rules, applied to a status and a fully read body.
///
/// - 2xx, JSON with an `error` field: [`Error::Api`]
/// - 2xx, JSON without an `error` field: success with the parsed body
/// - 2xx, empty body: success with the `{"status": code}` marker
/// - 2xx, non-empty body that is not JSON: [`Error::Decode`]
/// - non-2xx, JSON with an `error` payload: [`Error::Api`]
/// - non-2xx otherwise: [`Error::Http`] with the reason phrase
pub(crate) fn classify_parts(status: StatusCode, body: &[u8]) -> Result<Response> {
    let empty = body.iter().all(u8::is_ascii_whitespace);
    let parsed: Option<std::result::Result<Value, serde_json::Error>> =
        (!empty).then(|| serde_json::from_slice(body));

    if !status.is_success() {
        return match parsed {
            Some(Ok(value)) => match ApiError::from_body(status, &value) {
                Some(error) => Err(Error::Api {
                    status: status.as_u16(),
                    error,
                }),
                None => Err(Error::http(status)),
            },
            _ => Err(Error::http(status)),
        };
    }

    match parsed {
        None => Ok(Response {
            status: status.as_u16(),
            body: json!({ "status": status.as_u16() }),
            no_content: true,
        }),
        Some(Ok(value)) => match ApiError::from_body(status, &value) {
            Some(error) => Err(Error::Api {
                status: status.as_u16(),
                error,
            }),
            None => Ok(Response {
                status: status.as_u16(),
                body: value,
                no_content: false,
            }),
        },
        Some(Err(e)) => Err(Error::Decode(e)),
    }
}
