//! Request and response values exchanged through [`HttpClient`].

use http::header::{ACCEPT, HeaderValue};

use super::HttpError;

/// A request with no body.
///
/// IP-echo services only need a `GET` and an `Accept` header, so that is
/// all this type can express.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Always `GET`
    pub method: http::Method,
    /// Where to send it
    pub url: url::Url,
    /// Header map, empty unless [`HttpRequest::accept`] was called
    pub headers: http::HeaderMap,
}

impl HttpRequest {
    /// Starts a `GET` for `url`.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self {
            method: http::Method::GET,
            url,
            headers: http::HeaderMap::new(),
        }
    }

    /// Sets the `Accept` header, replacing any earlier value.
    #[must_use]
    pub fn accept(mut self, media_type: &'static str) -> Self {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static(media_type));
        self
    }
}

/// Status and fully read body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Response status
    pub status: http::StatusCode,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A response with `status` and an already buffered `body`.
    #[must_use]
    pub fn new(status: http::StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` carrying `body`.
    #[must_use]
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(http::StatusCode::OK, body)
    }

    /// `true` for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as text, or `None` when it is not UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Sends one request and buffers the answer.
///
/// The public IP resolver is written against this trait so that tests can
/// answer from memory; [`ReqwestClient`](super::ReqwestClient) is the
/// production implementation.
///
/// ```ignore
/// use route53_ddns::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Echo;
///
/// impl HttpClient for Echo {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::ok("203.0.113.7"))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Performs `req`.
    ///
    /// A non-2xx status is still `Ok`; callers decide what it means.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response arrives: connection or TLS
    /// failure, timeout, or a URL the client refuses.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
