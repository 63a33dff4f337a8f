use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::Serialize;
use serde_json::Value;
use tracing::trace;
use url::Url;

use crate::error::{Error, Result};

/// HTTP methods used by the Spotify Web API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "PUT" => Ok(Method::Put),
            "POST" => Ok(Method::Post),
            "DELETE" => Ok(Method::Delete),
            other => Err(Error::InvalidRequest(format!(
                "unsupported HTTP method: {other}"
            ))),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Request payload.
///
/// Structured values are serialized to JSON when the request is sent. Raw
/// strings are passed through untouched, which is what the playlist cover
/// upload needs (a base64 encoded JPEG, not a JSON document).
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Raw(String),
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

impl From<String> for Body {
    fn from(raw: String) -> Self {
        Body::Raw(raw)
    }
}

impl From<&str> for Body {
    fn from(raw: &str) -> Self {
        Body::Raw(raw.to_string())
    }
}

/// Description of one outbound call.
///
/// A request is built per call and handed to
/// [`Client::send`](crate::spotify::Client::send), which may issue it a second
/// time after refreshing the access token. Nothing in here depends on the
/// token, so reissuing the same value is always safe.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sporlapi::spotify::{Method, Request};
///
/// let request = Request::put("https://api.spotify.com/v1/me/player/play")
///     .with_body(json!({ "context_uri": "spotify:album:abc123" }));
///
/// assert_eq!(request.method(), Method::Put);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    path: String,
    method: Method,
    body: Option<Body>,
    headers: BTreeMap<String, String>,
}

impl Request {
    /// Creates a `GET` request with the default `Content-Type: application/json` header.
    pub fn new(path: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            path: path.into(),
            method: Method::Get,
            body: None,
            headers,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(path).with_method(Method::Put)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path).with_method(Method::Post)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path).with_method(Method::Delete)
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `payload` into a JSON body.
    pub fn with_json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        Ok(self.with_body(serde_json::to_value(payload)?))
    }

    /// Replaces the whole header map, dropping the default `Content-Type`.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Sets a single header, overriding any previous value with the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.keys().any(|existing| existing.eq_ignore_ascii_case(name))
    }
}

/// Issues `request` once with `token` as bearer credential.
///
/// The token is passed in rather than read from the session so that a retry
/// after a refresh uses exactly the token that refresh produced. The raw
/// response is returned uninterpreted; network failures surface as
/// [`Error::Transport`] and are never retried here. An `Authorization`
/// header set on the request replaces the bearer credential.
pub(crate) async fn execute(
    http: &reqwest::Client,
    request: &Request,
    token: &str,
) -> Result<reqwest::Response> {
    let url = parse_path(&request.path)?;

    trace!(target: "spotify", "{} {}", request.method, url);

    let mut builder = http.request(request.method.into(), url);
    if !request.has_header("authorization") {
        builder = builder.bearer_auth(token);
    }

    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder = match &request.body {
        Some(Body::Json(value)) => builder.body(serde_json::to_vec(value)?),
        Some(Body::Raw(raw)) => builder.body(raw.clone()),
        None => builder,
    };

    Ok(builder.send().await?)
}

fn parse_path(path: &str) -> Result<Url> {
    if path.trim().is_empty() {
        return Err(Error::InvalidRequest("request path is empty".to_string()));
    }

    Url::parse(path)
        .map_err(|e| Error::InvalidRequest(format!("request path must be an absolute URL: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("Put".parse::<Method>().unwrap(), Method::Put);
        assert_eq!("POST".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
        assert!("PATCH".parse::<Method>().is_err());
    }

    #[test]
    fn test_request_defaults() {
        let request = Request::new("https://api.spotify.com/v1/me");

        assert_eq!(request.method(), Method::Get);
        assert!(request.body().is_none());
        assert_eq!(
            request.headers().get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_header_override_replaces_case_insensitively() {
        let request = Request::put("https://api.spotify.com/v1/playlists/p/images")
            .with_header("content-type", "image/jpeg");

        assert_eq!(request.headers().len(), 1);
        assert_eq!(
            request.headers().get("content-type").map(String::as_str),
            Some("image/jpeg")
        );
    }

    #[test]
    fn test_headers_replace_defaults() {
        let request = Request::get("https://api.spotify.com/v1/me").with_headers([("Accept", "text/plain")]);

        assert!(request.headers().get("Content-Type").is_none());
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn test_body_conversions() {
        let json_body = Request::post("https://x.test/").with_body(json!({"a": 1}));
        assert_eq!(json_body.body(), Some(&Body::Json(json!({"a": 1}))));

        let raw_body = Request::post("https://x.test/").with_body("aGVsbG8=");
        assert_eq!(raw_body.body(), Some(&Body::Raw("aGVsbG8=".to_string())));
    }

    #[test]
    fn test_parse_path_rejects_relative_and_empty() {
        assert!(matches!(parse_path(""), Err(Error::InvalidRequest(_))));
        assert!(matches!(parse_path("/artists/abc"), Err(Error::InvalidRequest(_))));
        assert!(parse_path("https://api.spotify.com/v1/artists/abc").is_ok());
    }
}
