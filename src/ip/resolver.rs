//! IP-echo based public address resolver.

use crate::transport::{HttpClient, HttpRequest};

use super::{IpFamily, PublicIpAddress, ResolveError};

/// Maximum number of body characters echoed back in error messages.
const MAX_ECHOED_BODY: usize = 64;

/// Trait for discovering the public IP address of this host.
///
/// Implementations perform a single attempt; there is no retry.
pub trait AddressResolver: Send + Sync {
    /// Resolves the current public IP address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the address cannot be determined.
    fn resolve(
        &self,
    ) -> impl std::future::Future<Output = Result<PublicIpAddress, ResolveError>> + Send;
}

/// Resolves the public address with one `GET` to an IP-echo service.
///
/// The service must answer with the caller's address as plain text,
/// like `https://api.ipify.org` does. Surrounding whitespace is trimmed
/// and the remainder must parse as an IPv4 or IPv6 literal.
///
/// # Example
///
/// ```
/// use route53_ddns::ip::{IpFamily, PublicIpResolver};
/// use route53_ddns::transport::ReqwestClient;
/// use url::Url;
///
/// let resolver = PublicIpResolver::new(
///     ReqwestClient::new(),
///     Url::parse("https://api.ipify.org").unwrap(),
/// )
/// .with_family(IpFamily::V4);
/// assert_eq!(resolver.endpoint().as_str(), "https://api.ipify.org/");
/// ```
#[derive(Debug)]
pub struct PublicIpResolver<H> {
    client: H,
    endpoint: url::Url,
    family: Option<IpFamily>,
}

impl<H> PublicIpResolver<H> {
    /// Creates a resolver that accepts addresses of either family.
    #[must_use]
    pub const fn new(client: H, endpoint: url::Url) -> Self {
        Self {
            client,
            endpoint,
            family: None,
        }
    }

    /// Rejects addresses that are not of the given family.
    #[must_use]
    pub const fn with_family(mut self, family: IpFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }
}

impl<H: HttpClient> PublicIpResolver<H> {
    fn parse_body(&self, body: &str) -> Result<PublicIpAddress, ResolveError> {
        let text = body.trim();

        if text.is_empty() {
            return Err(ResolveError::EmptyBody);
        }

        let address: PublicIpAddress =
            text.parse().map_err(|_| ResolveError::InvalidAddress {
                body: text.chars().take(MAX_ECHOED_BODY).collect(),
            })?;

        match self.family {
            Some(expected) if address.family() != expected => {
                return Err(ResolveError::UnexpectedFamily {
                    expected,
                    actual: address.to_string(),
                });
            }
            _ => {}
        }

        Ok(address)
    }
}

impl<H: HttpClient> AddressResolver for PublicIpResolver<H> {
    async fn resolve(&self) -> Result<PublicIpAddress, ResolveError> {
        let request = HttpRequest::get(self.endpoint.clone()).accept("text/plain");

        tracing::debug!("Requesting public IP address from {}", self.endpoint);
        let response = self.client.request(request).await?;

        if !response.is_success() {
            return Err(ResolveError::NonSuccessStatus {
                status: response.status,
            });
        }

        let body = response.text().ok_or(ResolveError::NonUtf8Body)?;
        let address = self.parse_body(body)?;

        tracing::debug!("Public IP address is {address}");
        Ok(address)
    }
}
