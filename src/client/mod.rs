//! Request gateway for the booking backend.
//!
//! Every domain call funnels through [`ApiClient::request`], which:
//! - merges the default `Content-Type: application/json` header with any
//!   caller-supplied headers
//! - attaches `Authorization: Bearer <token>` when the session holds a token
//! - performs exactly one round trip (no retry, no backoff)
//! - turns non-success responses into [`ClientError::Http`] carrying the
//!   server's `detail`/`message` text
//! - returns JSON bodies as JSON and everything else as text

pub mod error;

pub use error::{ClientError, CONNECTION_ERROR_MESSAGE};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::session::Session;
use error::extract_error_message;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Validate the payload against the endpoint's result type.
    ///
    /// Text payloads only decode into string-shaped targets. An empty JSON
    /// body (`null`) that `T` rejects is retried as `{}`, so acknowledgement
    /// types whose fields are all optional decode to their empty form.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T> {
        let value = match self {
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        };
        if value.is_null() {
            return serde_json::from_value(Value::Null)
                .or_else(|_| serde_json::from_value(Value::Object(Map::new())))
                .map_err(|e| ClientError::Decode(e.to_string()));
        }
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Json(_) => None,
        }
    }
}

/// Per-call options. Defaults to a bodiless GET.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Extra headers, applied over the default `Content-Type`.
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// HTTP client bound to one backend and one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    session: Session,
}

impl ApiClient {
    /// Create a client with no request timeout.
    pub fn new(base_url: &str, session: Session) -> Result<Self> {
        Self::build(base_url, None, None, session)
    }

    /// Create a client from the `[client]` config section.
    pub fn from_config(config: &ClientConfig, session: Session) -> Result<Self> {
        Self::build(
            &config.api_url,
            config.request_timeout_secs.map(Duration::from_secs),
            Some(&config.user_agent),
            session,
        )
    }

    fn build(
        base_url: &str,
        timeout: Option<Duration>,
        user_agent: Option<&str>,
        session: Session,
    ) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::InvalidUrl(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            http,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Perform one request against `<base><path>`.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Payload> {
        let raw_url = format!("{}{}", self.base_url, path);
        let url = Url::parse(&raw_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
            headers.insert(name, value);
        }

        // Read at dispatch time; a later logout does not affect this request.
        let token = self.session.token()?;
        if let Some(token) = &token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ClientError::InvalidHeader("stored token is not a valid header value".to_string())
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        debug!(method = %options.method, path, authenticated = token.is_some(), "Sending API request");

        let mut builder = self.http.request(options.method.clone(), url).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_builder() {
                ClientError::InvalidUrl(e.to_string())
            } else {
                warn!(error = %e, path, "Failed to reach API server");
                ClientError::connection()
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(status.as_u16(), &body);

            if status == StatusCode::UNAUTHORIZED && token.is_some() {
                info!(path, "Server rejected session, clearing stored token");
                if let Err(e) = self.session.clear() {
                    warn!(error = %e, "Failed to clear rejected token");
                }
            }

            warn!(status = status.as_u16(), path, message = %message, "API request failed");
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        let text = response.text().await.map_err(|e| {
            warn!(error = %e, path, "Failed to read API response body");
            ClientError::connection()
        })?;

        if !is_json {
            return Ok(Payload::Text(text));
        }
        if text.trim().is_empty() {
            return Ok(Payload::Json(Value::Null));
        }

        serde_json::from_str(&text)
            .map(Payload::Json)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// GET `path` and decode the body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::default())
            .await?
            .into_typed()
    }

    /// POST a JSON body to `path` and decode the response as `T`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ClientError::Encode(e.to_string()))?;
        self.request(path, RequestOptions::new(Method::POST).with_body(body))
            .await?
            .into_typed()
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::new(Method::POST))
            .await?
            .into_typed()
    }

    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::new(Method::PUT))
            .await?
            .into_typed()
    }
}

/// Percent-encode a path segment or query value.
///
/// Letters, digits and `- _ . ! ~ * ' ( )` pass through; a space becomes
/// `%20`.
pub(crate) fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%7E", "~")
}

/// Build a `?a=b&c=d` query string, or an empty string for no pairs.
pub(crate) fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    format!("?{}", serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActionResponse;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Slot {
        time_slot: String,
    }

    #[test]
    fn test_json_payload_into_typed() {
        let payload = Payload::Json(json!({"time_slot": "09:30"}));
        let slot: Slot = payload.into_typed().unwrap();
        assert_eq!(slot.time_slot, "09:30");
    }

    #[test]
    fn test_text_payload_into_string() {
        let payload = Payload::Text("ok".to_string());
        assert_eq!(payload.as_text(), Some("ok"));
        let text: String = payload.into_typed().unwrap();
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_mismatched_payload_is_decode_error() {
        let payload = Payload::Text("not json".to_string());
        let result: Result<Slot> = payload.into_typed();
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_null_payload_decodes_empty_ack() {
        let ack: ActionResponse = Payload::Json(Value::Null).into_typed().unwrap();
        assert_eq!(ack.message, None);
        assert!(ack.extra.is_empty());

        let nothing: Option<Slot> = Payload::Json(Value::Null).into_typed().unwrap();
        assert_eq!(nothing, None);
    }

    #[test]
    fn test_null_payload_still_rejected_by_required_fields() {
        let result: Result<Slot> = Payload::Json(Value::Null).into_typed();
        assert!(matches!(result, Err(ClientError::Decode(_))));

        let result: Result<Vec<Slot>> = Payload::Json(Value::Null).into_typed();
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = ApiClient::new("not a url", Session::in_memory());
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3000/", Session::in_memory()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("General Surgery"), "General%20Surgery");
        assert_eq!(encode_segment("cardiology"), "cardiology");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("Clinic & Care"), "Clinic%20%26%20Care");
        assert_eq!(encode_segment("ENT (Head)!~'*"), "ENT%20(Head)!~'*");
        assert_eq!(encode_segment("a+b"), "a%2Bb");
    }

    #[test]
    fn test_query_string() {
        assert_eq!(query_string(&[]), "");
        assert_eq!(
            query_string(&[("doctor_id", "7".to_string()), ("date", "2025-01-05".to_string())]),
            "?doctor_id=7&date=2025-01-05"
        );
    }
}
