//! Identity provider — who is calling, and where to send them to log in.
//!
//! tubctl never authenticates anyone itself. It sits behind an
//! authenticating reverse proxy (oauth2-proxy or similar) that forwards the
//! signed-in user in a request header and exposes a sign-in endpoint taking
//! the return target in `rd`.

use axum::http::HeaderMap;
use axum::http::header::{HeaderName, InvalidHeaderName};
use tubctl_domain::identity::Identity;

/// Header oauth2-proxy uses for the authenticated user.
pub const DEFAULT_IDENTITY_HEADER: &str = "x-auth-request-user";
/// oauth2-proxy sign-in endpoint.
pub const DEFAULT_LOGIN_URL: &str = "/oauth2/start";

/// External capability answering "who is this" and "where do they log in".
pub trait IdentityProvider {
    /// The authenticated caller, if any.
    fn current_identity(&self, headers: &HeaderMap) -> Option<Identity>;

    /// Login URL that sends the caller back to `return_to` afterwards.
    fn login_url(&self, return_to: &str) -> String;
}

/// Trusts the identity forwarded by the reverse proxy in a single header.
#[derive(Debug, Clone)]
pub struct ProxyHeaderIdentity {
    header: HeaderName,
    login_url: String,
}

impl ProxyHeaderIdentity {
    /// # Errors
    ///
    /// Returns an error when `header` is not a valid HTTP header name.
    pub fn new(header: &str, login_url: impl Into<String>) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            header: HeaderName::try_from(header)?,
            login_url: login_url.into(),
        })
    }
}

impl Default for ProxyHeaderIdentity {
    fn default() -> Self {
        Self {
            header: HeaderName::from_static(DEFAULT_IDENTITY_HEADER),
            login_url: DEFAULT_LOGIN_URL.to_string(),
        }
    }
}

impl IdentityProvider for ProxyHeaderIdentity {
    fn current_identity(&self, headers: &HeaderMap) -> Option<Identity> {
        let value = headers.get(&self.header)?.to_str().ok()?.trim();
        if value.is_empty() {
            return None;
        }
        Some(Identity::new(value))
    }

    fn login_url(&self, return_to: &str) -> String {
        let separator = if self.login_url.contains('?') { '&' } else { '?' };
        let encoded: String = url::form_urlencoded::byte_serialize(return_to.as_bytes()).collect();
        format!("{}{separator}rd={encoded}", self.login_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(name: &'static str, value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn should_read_identity_from_proxy_header() {
        let provider = ProxyHeaderIdentity::default();
        let identity = provider.current_identity(&headers_with("x-auth-request-user", "alice"));
        assert_eq!(identity, Some(Identity::new("alice")));
    }

    #[test]
    fn should_return_none_without_header() {
        let provider = ProxyHeaderIdentity::default();
        assert!(provider.current_identity(&HeaderMap::new()).is_none());
    }

    #[test]
    fn should_return_none_for_blank_header() {
        let provider = ProxyHeaderIdentity::default();
        assert!(
            provider
                .current_identity(&headers_with("x-auth-request-user", "  "))
                .is_none()
        );
    }

    #[test]
    fn should_honour_custom_header() {
        let provider = ProxyHeaderIdentity::new("X-Forwarded-Email", "/login").unwrap();
        let identity = provider.current_identity(&headers_with("x-forwarded-email", "bob@example.com"));
        assert_eq!(identity.unwrap().as_str(), "bob@example.com");
    }

    #[test]
    fn should_reject_invalid_header_name() {
        assert!(ProxyHeaderIdentity::new("not a header", "/login").is_err());
    }

    #[test]
    fn should_encode_return_target_in_login_url() {
        let provider = ProxyHeaderIdentity::default();
        assert_eq!(
            provider.login_url("/settub?value=off"),
            "/oauth2/start?rd=%2Fsettub%3Fvalue%3Doff"
        );
    }

    #[test]
    fn should_append_to_existing_login_query() {
        let provider =
            ProxyHeaderIdentity::new("x-auth-request-user", "https://auth.example/start?x=1").unwrap();
        assert_eq!(
            provider.login_url("/"),
            "https://auth.example/start?x=1&rd=%2F"
        );
    }
}
