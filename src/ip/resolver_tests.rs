//! Tests for `PublicIpResolver` and `PublicIpAddress`.

use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{AddressResolver, IpFamily, PublicIpAddress, PublicIpResolver, ResolveError};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that returns one canned result and records requests.
#[derive(Debug)]
struct MockClient {
    response: Mutex<Option<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(response: Result<HttpResponse, HttpError>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn body(body: &str) -> Self {
        Self::new(Ok(HttpResponse::ok(body)))
    }

    fn status(status: http::StatusCode, body: &str) -> Self {
        Self::new(Ok(HttpResponse::new(status, body)))
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.response
            .lock()
            .unwrap()
            .take()
            .expect("resolver must issue exactly one request")
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

fn endpoint() -> url::Url {
    url::Url::parse("https://api.ipify.org").unwrap()
}

fn resolver(client: MockClient) -> PublicIpResolver<MockClient> {
    PublicIpResolver::new(client, endpoint())
}

mod successful_resolution {
    use super::*;

    #[tokio::test]
    async fn trims_trailing_newline() {
        let resolver = resolver(MockClient::body("203.0.113.7\n"));

        let address = resolver.resolve().await.unwrap();

        assert_eq!(address.to_string(), "203.0.113.7");
        assert_eq!(address.family(), IpFamily::V4);
    }

    #[tokio::test]
    async fn trims_surrounding_whitespace() {
        let resolver = resolver(MockClient::body("  \t198.51.100.9 \r\n"));

        let address = resolver.resolve().await.unwrap();

        assert_eq!(address.to_string(), "198.51.100.9");
    }

    #[tokio::test]
    async fn accepts_ipv6_literal() {
        let resolver = resolver(MockClient::body("2001:db8::1\n")).with_family(IpFamily::V6);

        let address = resolver.resolve().await.unwrap();

        assert_eq!(address.to_string(), "2001:db8::1");
        assert_eq!(address.family(), IpFamily::V6);
    }

    #[tokio::test]
    async fn issues_exactly_one_get_to_endpoint() {
        let client = Arc::new(MockClient::body("203.0.113.7"));
        let resolver = PublicIpResolver::new(Arc::clone(&client), endpoint());

        resolver.resolve().await.unwrap();

        assert_eq!(client.calls(), 1);
        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].method, http::Method::GET);
        assert_eq!(requests[0].url, endpoint());
        assert_eq!(
            requests[0].headers.get(http::header::ACCEPT).unwrap(),
            "text/plain"
        );
    }
}

mod failed_resolution {
    use super::*;

    #[tokio::test]
    async fn non_2xx_status_is_error() {
        let resolver = resolver(MockClient::status(
            http::StatusCode::SERVICE_UNAVAILABLE,
            "203.0.113.7",
        ));

        let result = resolver.resolve().await;

        assert!(matches!(
            result,
            Err(ResolveError::NonSuccessStatus { status }) if status == http::StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn empty_body_is_error() {
        let resolver = resolver(MockClient::body(""));
        assert!(matches!(
            resolver.resolve().await,
            Err(ResolveError::EmptyBody)
        ));
    }

    #[tokio::test]
    async fn whitespace_only_body_is_error() {
        let resolver = resolver(MockClient::body(" \n"));
        assert!(matches!(
            resolver.resolve().await,
            Err(ResolveError::EmptyBody)
        ));
    }

    #[tokio::test]
    async fn connection_failure_is_error() {
        let resolver = resolver(MockClient::new(Err(HttpError::Connection(Box::new(
            std::io::Error::other("connection refused"),
        )))));

        let result = resolver.resolve().await;

        assert!(matches!(
            result,
            Err(ResolveError::Http(HttpError::Connection(_)))
        ));
    }

    #[tokio::test]
    async fn timeout_is_error() {
        let resolver = resolver(MockClient::new(Err(HttpError::Timeout)));
        assert!(matches!(
            resolver.resolve().await,
            Err(ResolveError::Http(HttpError::Timeout))
        ));
    }

    #[tokio::test]
    async fn html_body_is_invalid_address() {
        let resolver = resolver(MockClient::body("<html>rate limited</html>"));

        let result = resolver.resolve().await;

        assert!(matches!(
            result,
            Err(ResolveError::InvalidAddress { ref body }) if body == "<html>rate limited</html>"
        ));
    }

    #[tokio::test]
    async fn long_invalid_body_is_truncated_in_error() {
        let resolver = resolver(MockClient::body(&"x".repeat(500)));

        match resolver.resolve().await {
            Err(ResolveError::InvalidAddress { body }) => assert_eq!(body.len(), 64),
            other => panic!("Expected InvalidAddress, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_utf8_body_is_error() {
        let resolver = resolver(MockClient::new(Ok(HttpResponse::ok(vec![0xFF, 0xFE]))));
        assert!(matches!(
            resolver.resolve().await,
            Err(ResolveError::NonUtf8Body)
        ));
    }

    #[tokio::test]
    async fn ipv4_answer_rejected_when_ipv6_expected() {
        let resolver = resolver(MockClient::body("203.0.113.7")).with_family(IpFamily::V6);

        let result = resolver.resolve().await;

        assert!(matches!(
            result,
            Err(ResolveError::UnexpectedFamily {
                expected: IpFamily::V6,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn error_messages_are_readable() {
        let resolver = resolver(MockClient::status(http::StatusCode::NOT_FOUND, ""));
        let error = resolver.resolve().await.unwrap_err();

        assert_eq!(error.to_string(), "IP-echo endpoint returned HTTP 404 Not Found");
    }
}

mod address {
    use super::*;

    #[test]
    fn parses_and_displays_both_families() {
        let v4: PublicIpAddress = "203.0.113.7".parse().unwrap();
        let v6: PublicIpAddress = "2001:db8::1".parse().unwrap();

        assert_eq!(v4.to_string(), "203.0.113.7");
        assert_eq!(v6.to_string(), "2001:db8::1");
        assert_eq!(v6.family(), IpFamily::V6);
    }

    #[test]
    fn rejects_hostnames() {
        assert!("example.com".parse::<PublicIpAddress>().is_err());
    }

    #[test]
    fn from_ip_addr_round_trips() {
        let addr: IpAddr = "198.51.100.9".parse().unwrap();
        assert_eq!(PublicIpAddress::from(addr).addr(), addr);
    }

    #[test]
    fn serializes_as_string() {
        let addr: PublicIpAddress = "198.51.100.9".parse().unwrap();
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"198.51.100.9\"");
    }

    #[test]
    fn family_matches_ipv6_flag() {
        assert_eq!(IpFamily::from_ipv6_flag(false), IpFamily::V4);
        assert_eq!(IpFamily::from_ipv6_flag(true), IpFamily::V6);
        assert_eq!(IpFamily::V6.to_string(), "IPv6");
    }
}
