//! Public API for the `riak_fetch` library.
//!
//! This crate decodes buffered Riak HTTP fetch responses into domain
//! objects. It resolves sibling responses by splitting their
//! `multipart/mixed` bodies and extracts link relations, user metadata and
//! causality tokens from headers. Choosing between siblings is left to the
//! caller.

pub mod constants;
pub mod error;
pub mod headers;
pub mod link;
pub mod multipart;
pub mod object;
pub mod outcome;
pub mod resolver;
pub mod response;
pub mod usermeta;

pub use error::{FetchError, Result};
pub use headers::HeaderSet;
pub use link::{Link, parse_links};
pub use multipart::{MultipartConfig, MultipartError, decode_siblings};
pub use object::RawObject;
pub use outcome::{Outcome, Siblings};
pub use resolver::{ResponseResolver, resolve};
pub use response::{FetchResponse, HttpResponse};
pub use usermeta::extract_usermeta;
