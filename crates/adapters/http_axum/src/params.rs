//! Request parameters read from the query string and a urlencoded body.
//!
//! Both sources are merged for every method. Body pairs come first, then
//! query pairs, and a lookup returns the first value of a key, so a body
//! value shadows the same key in the query and repeated keys never fail.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use url::form_urlencoded;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered `key=value` pairs of one request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    /// Merge a urlencoded body with a raw query string, body first.
    #[must_use]
    pub fn parse(body: &[u8], query: Option<&str>) -> Self {
        let query = query.unwrap_or_default().as_bytes();
        Self(
            form_urlencoded::parse(body)
                .chain(form_urlencoded::parse(query))
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
        )
    }

    /// First value of `key`, treating an empty value as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

impl<S: Send + Sync> FromRequest<S> for FormValues {
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_owned);
        let body = if is_form(req.headers()) {
            Bytes::from_request(req, state).await?
        } else {
            Bytes::new()
        };

        Ok(Self::parse(&body, query.as_deref()))
    }
}
