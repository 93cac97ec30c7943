//! Canonical error and result types for the crate.
//!
//! Only sibling responses can fail to decode. Malformed link entries and
//! missing optional headers are tolerated and never surface here.

use thiserror::Error;

use crate::multipart::MultipartError;

/// Top-level error type exposed by `riak_fetch`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// A sibling response did not declare a `multipart/mixed` body.
    #[error("multipart/mixed content expected when object has siblings, got {content_type:?}")]
    MalformedMultipart {
        /// Content type the response declared, if any.
        content_type: Option<String>,
    },

    /// The multipart body could not be framed.
    #[error("invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),
}

/// Canonical result alias used by `riak_fetch` public APIs.
pub type Result<T> = std::result::Result<T, FetchError>;
