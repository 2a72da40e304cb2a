use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde_json::Value as JsonValue;

pub mod addresses;
pub mod classrooms;
pub mod educators;
pub mod events;
pub mod extracur;

use crate::error::{ApiError, Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://timetable.spbu.ru/api/v1/";

/// A raw HTTP answer, before any interpretation of the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

/// Issues a GET request relative to the API root.
///
/// `segments` are unencoded path segments; implementations are responsible
/// for percent-encoding them.
pub trait Transport {
    /// # Errors
    /// Fails only if no response could be obtained at all.
    fn get(&self, segments: &[&str], query: &[(&str, String)]) -> Result<RawResponse>;
}

/// Blocking [`reqwest`] transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// # Errors
    /// Fails if `base_url` is not an absolute http(s) URL or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::build(base_url, Client::builder())
    }

    /// Same as [`Self::new`], with a per-request timeout.
    ///
    /// # Errors
    /// See [`Self::new`].
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Self::build(base_url, Client::builder().timeout(timeout))
    }

    fn build(base_url: &str, builder: reqwest::blocking::ClientBuilder) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| Error::BaseUrl(format!("{base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::BaseUrl(format!("{base_url} cannot be a base")));
        }
        let http_client = builder
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::BaseUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Transport for HttpTransport {
    fn get(&self, segments: &[&str], query: &[(&str, String)]) -> Result<RawResponse> {
        let url = self.url_for(segments)?;
        log::debug!("GET {url}");
        let resp: Response = self.http_client.get(url).query(query).send()?;
        let status = resp.status();
        let body: String = resp.text()?;
        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        })
    }
}

/// Entry point to every endpoint of the timetable API.
#[derive(Debug, Clone)]
pub struct TimetableClient<T = HttpTransport> {
    transport: T,
}

impl TimetableClient<HttpTransport> {
    /// A client for the public API at [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(DEFAULT_BASE_URL)?))
    }
}

impl<T: Transport> TimetableClient<T> {
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a GET request and maps the JSON body with `parse`.
    ///
    /// Any status other than 200 fails with [`ApiError`] before the body is
    /// looked at.
    fn get_json<R>(
        &self,
        operation: &'static str,
        segments: &[&str],
        query: &[(&str, String)],
        parse: impl FnOnce(&JsonValue) -> Result<R>,
    ) -> Result<R> {
        let resp = self.transport.get(segments, query)?;
        let json = handle_response(operation, resp)?;
        parse(&json)
    }
}

fn handle_response(operation: &'static str, resp: RawResponse) -> Result<JsonValue> {
    if resp.status != 200 {
        log::warn!(
            "{operation}: request failed with status {} {}",
            resp.status,
            resp.reason
        );
        return Err(ApiError {
            operation,
            status: resp.status,
            reason: resp.reason,
            body: resp.body,
        }
        .into());
    }

    serde_json::from_str(&resp.body).map_err(|source| Error::Decode { operation, source })
}
