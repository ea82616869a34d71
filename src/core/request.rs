//! A description of one call against the Ghostfolio REST API.

use reqwest::Method;
use serde::Serialize;

use crate::core::GfError;

/// The version prefix of an endpoint (`/api/v1/...`, `/api/v2/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
}

impl ApiVersion {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

/// Method, path, query and body of a single API call.
///
/// Every wrapped endpoint builds one of these; it is public so that endpoints
/// without a dedicated method can still be reached through
/// [`GhostfolioClient::execute`](crate::GhostfolioClient::execute).
///
/// ```
/// use ghostfolio_rs::{ApiRequest, ApiVersion};
///
/// let req = ApiRequest::get("portfolio/performance")
///     .version(ApiVersion::V2)
///     .query("range", "ytd");
/// assert_eq!(req.endpoint(), "portfolio/performance");
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) version: ApiVersion,
    pub(crate) segments: Vec<String>,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Starts a request for `endpoint`, a slash-separated path relative to `/api/<version>/`.
    pub fn new(method: Method, endpoint: &str) -> Self {
        Self {
            method,
            version: ApiVersion::V1,
            segments: endpoint
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(endpoint: &str) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: &str) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn put(endpoint: &str) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    /// Selects the API version. Defaults to [`ApiVersion::V1`].
    #[must_use]
    pub const fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Appends one path segment verbatim; slashes inside it are percent-encoded.
    ///
    /// Use this for identifiers and symbols that come from user input.
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::InvalidParams`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, GfError> {
        let value = serde_json::to_value(body).map_err(|e| {
            GfError::InvalidParams(format!("request body for {}: {e}", self.endpoint()))
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// The endpoint path without host or version, used in errors and logs.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.segments.join("/")
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Update bodies repeat the id next to the fields.
#[derive(Serialize)]
pub(crate) struct WithId<'a, T> {
    pub(crate) id: &'a str,
    #[serde(flatten)]
    pub(crate) inner: &'a T,
}

/// Rejects empty identifiers before they turn into a malformed path.
pub(crate) fn require_id(kind: &str, value: &str) -> Result<(), GfError> {
    if value.trim().is_empty() {
        return Err(GfError::InvalidParams(format!("{kind} must not be empty")));
    }
    Ok(())
}
