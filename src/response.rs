//! Fetch responses as handed over by a transport and as seen by callers.
//!
//! A transport adapter buffers the HTTP exchange into an [`HttpResponse`].
//! [`FetchResponse`] pairs that response with its decoded [`Outcome`] and
//! offers a read-only view over both.

use bytes::Bytes;

use crate::{
    error::Result,
    headers::HeaderSet,
    object::RawObject,
    outcome::Outcome,
    resolver::{ResponseResolver, is_success},
};

/// Fully buffered HTTP response for a fetch of `bucket/key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, last value winning for repeated names.
    pub headers: HeaderSet,
    /// Raw response body.
    pub body: Bytes,
    /// Bucket the request addressed.
    pub bucket: String,
    /// Key the request addressed.
    pub key: String,
}

impl HttpResponse {
    /// Whether the status lies in the `2xx` range.
    #[must_use]
    pub const fn is_success(&self) -> bool { is_success(self.status) }

    /// Whether the status signals a client or server error (`4xx`/`5xx`).
    #[must_use]
    pub const fn is_error(&self) -> bool { self.status >= 400 }
}

/// Decoded fetch response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResponse {
    response: HttpResponse,
    outcome: Outcome,
}

impl FetchResponse {
    /// Decode `response` with the default multipart limits.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`](crate::FetchError) when a sibling response
    /// cannot be decoded.
    pub fn from_response(response: HttpResponse) -> Result<Self> {
        Self::with_resolver(response, &ResponseResolver::new())
    }

    /// Decode `response` using `resolver`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`](crate::FetchError) when a sibling response
    /// cannot be decoded.
    pub fn with_resolver(response: HttpResponse, resolver: &ResponseResolver) -> Result<Self> {
        let outcome = resolver.resolve(
            response.status,
            &response.headers,
            &response.body,
            &response.bucket,
            &response.key,
        )?;
        Ok(Self { response, outcome })
    }

    /// Whether an object was decoded.
    #[must_use]
    pub fn has_object(&self) -> bool { self.outcome.has_object() }

    /// The decoded object; for siblings this is the first one listed.
    #[must_use]
    pub fn object(&self) -> Option<&RawObject> { self.outcome.object() }

    /// Whether the response carried siblings.
    #[must_use]
    pub fn has_siblings(&self) -> bool { self.outcome.has_siblings() }

    /// Sibling versions in body order.
    #[must_use]
    pub fn siblings(&self) -> &[RawObject] { self.outcome.siblings() }

    /// The decoded outcome.
    #[must_use]
    pub fn outcome(&self) -> &Outcome { &self.outcome }

    /// Consume the response, keeping only the decoded outcome.
    #[must_use]
    pub fn into_outcome(self) -> Outcome { self.outcome }

    /// HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 { self.response.status }

    /// Response headers as received.
    #[must_use]
    pub fn headers(&self) -> &HeaderSet { &self.response.headers }

    /// Raw response body.
    #[must_use]
    pub fn body(&self) -> &Bytes { &self.response.body }

    /// Bucket the request addressed.
    #[must_use]
    pub fn bucket(&self) -> &str { &self.response.bucket }

    /// Key the request addressed.
    #[must_use]
    pub fn key(&self) -> &str { &self.response.key }

    /// Whether the status lies in the `2xx` range.
    #[must_use]
    pub fn is_success(&self) -> bool { self.response.is_success() }

    /// Whether the status signals a client or server error.
    #[must_use]
    pub fn is_error(&self) -> bool { self.response.is_error() }
}
