//! Tests for HTTP request/response types.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://api.ipify.org/").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn get_starts_without_headers() {
        let req = HttpRequest::get(test_url());

        assert_eq!(req.method, http::Method::GET);
        assert_eq!(req.url, test_url());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn accept_sets_single_header() {
        let req = HttpRequest::get(test_url())
            .accept("*/*")
            .accept("text/plain");

        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.headers.get(http::header::ACCEPT).unwrap(), "text/plain");
    }
}

mod http_response {
    use super::*;

    #[test]
    fn ok_is_200_with_body() {
        let resp = HttpResponse::ok("203.0.113.7");

        assert_eq!(resp.status, http::StatusCode::OK);
        assert_eq!(resp.body, b"203.0.113.7".to_vec());
    }

    #[test]
    fn only_2xx_is_success() {
        let success = [http::StatusCode::OK, http::StatusCode::NO_CONTENT];
        let failure = [
            http::StatusCode::MOVED_PERMANENTLY,
            http::StatusCode::TOO_MANY_REQUESTS,
            http::StatusCode::BAD_GATEWAY,
        ];

        for status in success {
            assert!(HttpResponse::new(status, "").is_success(), "{status}");
        }
        for status in failure {
            assert!(!HttpResponse::new(status, "").is_success(), "{status}");
        }
    }

    #[test]
    fn text_decodes_utf8() {
        assert_eq!(HttpResponse::ok("2001:db8::1\n").text(), Some("2001:db8::1\n"));
        assert_eq!(HttpResponse::ok(Vec::new()).text(), Some(""));
    }

    #[test]
    fn text_is_none_for_invalid_utf8() {
        assert!(HttpResponse::ok(vec![0xFF, 0xFE]).text().is_none());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("network unavailable")));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("network unavailable")
        );
    }

    #[test]
    fn timeout_displays_message() {
        let error = HttpError::Timeout;

        assert_eq!(error.to_string(), "Request timed out");
        assert!(error.source().is_none());
    }

    #[test]
    fn setup_error_displays_message() {
        let error = HttpError::Setup(Box::new(std::io::Error::other("no tls backend")));
        assert!(error.to_string().starts_with("Failed to build HTTP client"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;

    struct FixedClient(HttpResponse);

    impl HttpClient for FixedClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn implementations_return_their_response() {
        let client = FixedClient(HttpResponse::ok("198.51.100.9"));

        let resp = client.request(HttpRequest::get(test_url())).await.unwrap();

        assert_eq!(resp.text(), Some("198.51.100.9"));
    }
}
