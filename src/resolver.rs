//! Status-driven decoding of a buffered fetch response.
//!
//! The resolver is a pure function of its inputs: it performs no I/O and
//! treats any status it does not decode as an empty outcome, leaving the
//! caller to interpret the status itself.

use bytes::Bytes;

use crate::{
    constants::STATUS_MULTIPLE_CHOICES,
    error::Result,
    headers::HeaderSet,
    multipart::{MultipartConfig, decode_siblings},
    object::RawObject,
    outcome::Outcome,
};

/// Decodes fetch responses under a fixed [`MultipartConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ResponseResolver {
    config: MultipartConfig,
}

impl ResponseResolver {
    /// Create a resolver with the default multipart limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: MultipartConfig::DEFAULT,
        }
    }

    /// Create a resolver enforcing `config` on sibling bodies.
    #[must_use]
    pub const fn with_config(config: MultipartConfig) -> Self { Self { config } }

    /// Limits applied to sibling bodies.
    #[must_use]
    pub const fn config(&self) -> &MultipartConfig { &self.config }

    /// Decode a response for `bucket/key` according to its status code.
    ///
    /// - `300` decodes the multipart body into siblings, or
    ///   [`Outcome::Empty`] when the body holds no parts.
    /// - `2xx` decodes a single object from the headers and body.
    /// - Anything else yields [`Outcome::Empty`].
    ///
    /// # Errors
    ///
    /// Fails only for `300` responses whose body is not a well-formed
    /// `multipart/mixed` document.
    pub fn resolve(
        &self,
        status: u16,
        headers: &HeaderSet,
        body: &Bytes,
        bucket: &str,
        key: &str,
    ) -> Result<Outcome> {
        tracing::debug!(status, bucket, key, "resolving fetch response");

        if status == STATUS_MULTIPLE_CHOICES {
            let siblings = decode_siblings(headers, body, bucket, key, &self.config)?;
            if siblings.is_empty() {
                log::warn!("sibling response contained no parts: bucket={bucket}, key={key}");
            }
            return Ok(Outcome::from(siblings));
        }

        if is_success(status) {
            return Ok(Outcome::Single(RawObject::from_headers(
                bucket,
                key,
                body.clone(),
                headers,
            )));
        }

        Ok(Outcome::Empty)
    }
}

/// Decode a response with the default multipart limits.
///
/// # Errors
///
/// See [`ResponseResolver::resolve`].
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use riak_fetch::{HeaderSet, resolve};
///
/// let headers: HeaderSet = [("Content-Type", "text/plain")].into_iter().collect();
/// let outcome = resolve(200, &headers, &Bytes::from_static(b"hello"), "b", "k")?;
/// assert!(outcome.has_object());
/// assert!(!outcome.has_siblings());
/// # Ok::<(), riak_fetch::FetchError>(())
/// ```
pub fn resolve(
    status: u16,
    headers: &HeaderSet,
    body: &Bytes,
    bucket: &str,
    key: &str,
) -> Result<Outcome> {
    ResponseResolver::new().resolve(status, headers, body, bucket, key)
}

pub(crate) const fn is_success(status: u16) -> bool { matches!(status, 200..=299) }
