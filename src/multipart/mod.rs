//! Multipart decoding for responses that carry sibling versions.
//!
//! [`framing`] splits an RFC 2046 body into raw parts; [`decode_siblings`]
//! turns those parts into [`RawObject`](crate::RawObject) values using the
//! document headers as defaults.

pub mod config;
pub mod decoder;
pub mod error;
pub mod framing;

pub use config::MultipartConfig;
pub use decoder::decode_siblings;
pub use error::MultipartError;
pub use framing::{Part, boundary_from_content_type, split_parts};

#[cfg(test)]
mod tests;
