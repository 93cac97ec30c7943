//! Builders for transport-level fetch responses.

use bytes::Bytes;
use riak_fetch::{HeaderSet, HttpResponse};

use crate::SiblingBody;

/// Result alias for fallible tests.
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Fluent builder for [`HttpResponse`] values.
#[derive(Clone, Debug)]
pub struct ResponseBuilder {
    status: u16,
    headers: HeaderSet,
    body: Bytes,
    bucket: String,
    key: String,
}

impl ResponseBuilder {
    /// Start a `200 OK` response for `bucket/key` with no headers.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: HeaderSet::new(),
            body: Bytes::new(),
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Set the status code.
    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add or replace a header.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Turn the response into a `300 Multiple Choices` carrying `siblings`.
    #[must_use]
    pub fn siblings(self, siblings: SiblingBody) -> Self {
        let content_type = siblings.content_type();
        self.status(300)
            .header("Content-Type", &content_type)
            .body(siblings.to_bytes())
    }

    /// Finish the response.
    #[must_use]
    pub fn build(self) -> HttpResponse {
        HttpResponse {
            status: self.status,
            headers: self.headers,
            body: self.body,
            bucket: self.bucket,
            key: self.key,
        }
    }
}
