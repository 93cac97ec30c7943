//! Errors raised while framing a multipart body.

use std::num::NonZeroUsize;

use thiserror::Error;

/// Byte-level multipart framing failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MultipartError {
    /// The content type carries no usable `boundary` parameter.
    #[error("multipart content type has no boundary parameter")]
    MissingBoundary,

    /// The boundary exceeds the 70 characters RFC 2046 permits.
    #[error("multipart boundary too long: {length} > 70 characters")]
    InvalidBoundary {
        /// Length of the rejected boundary.
        length: usize,
    },

    /// The body holds more parts than the configured cap.
    #[error("multipart body exceeds part limit of {max}")]
    TooManyParts {
        /// Configured part cap.
        max: NonZeroUsize,
    },

    /// A part body exceeds the configured size cap.
    #[error("multipart part {index} too large: {size} bytes > {max} bytes")]
    PartTooLarge {
        /// Zero-based position of the offending part.
        index: usize,
        /// Size of the part body.
        size: usize,
        /// Configured size cap.
        max: NonZeroUsize,
    },
}
