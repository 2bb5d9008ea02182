//! [`HttpClient`] backed by reqwest.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Largest response body read before giving up. An address in text form
/// is at most 45 bytes.
pub(super) const MAX_BODY_BYTES: usize = 1024;

/// The client used for the real IP-echo request.
///
/// ```no_run
/// use std::time::Duration;
///
/// use route53_ddns::transport::{HttpClient, HttpRequest, ReqwestClient};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_timeout(Duration::from_secs(10))?;
/// let answer = client
///     .request(HttpRequest::get("https://api.ipify.org".parse()?).accept("text/plain"))
///     .await?;
/// println!("{:?}", answer.text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// A client with reqwest's defaults and no request timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::from_client(reqwest::Client::new())
    }

    /// A client that gives up on a request after `timeout`, counting
    /// connect, send and body read together.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Setup`] if reqwest cannot build the client,
    /// for example when no TLS backend is usable.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(Self::from_client)
            .map_err(|e| HttpError::Setup(Box::new(e)))
    }

    /// Wraps a preconfigured reqwest client.
    #[must_use]
    pub const fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = self
            .inner
            .request(req.method, req.url.as_str())
            .headers(req.headers)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = read_capped(response).await?;

        Ok(HttpResponse::new(status, body))
    }
}

async fn read_capped(mut response: reqwest::Response) -> Result<Vec<u8>, HttpError> {
    if response
        .content_length()
        .is_some_and(|len| len > MAX_BODY_BYTES as u64)
    {
        return Err(HttpError::BodyTooLarge {
            limit: MAX_BODY_BYTES,
        });
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(classify)? {
        append_capped(&mut body, &chunk)?;
    }
    Ok(body)
}

/// Appends `chunk` unless that would grow `body` past [`MAX_BODY_BYTES`].
pub(super) fn append_capped(body: &mut Vec<u8>, chunk: &[u8]) -> Result<(), HttpError> {
    if body.len() + chunk.len() > MAX_BODY_BYTES {
        return Err(HttpError::BodyTooLarge {
            limit: MAX_BODY_BYTES,
        });
    }
    body.extend_from_slice(chunk);
    Ok(())
}

fn classify(e: reqwest::Error) -> HttpError {
    match e {
        e if e.is_timeout() => HttpError::Timeout,
        e if e.is_builder() => HttpError::InvalidUrl(e.to_string()),
        e => HttpError::Connection(Box::new(e)),
    }
}
