//! Protocol constants shared by the response decoders.
//!
//! Header names are compared byte-for-byte; the store's HTTP interface emits
//! them in the casing below.

/// Header carrying link relations to other objects.
pub const HDR_LINK: &str = "Link";

/// Link parameter naming the relation tag.
pub const LINK_TAG_PARAM: &str = "riaktag";

/// Prefix shared by all user metadata headers.
pub const HDR_USERMETA_PREFIX: &str = "X-Riak-Meta-";

/// Header carrying the opaque causality token.
pub const HDR_VCLOCK: &str = "X-Riak-Vclock";

/// Header carrying the last modification timestamp.
pub const HDR_LAST_MODIFIED: &str = "Last-Modified";

/// Header carrying the entity tag.
pub const HDR_ETAG: &str = "ETag";

/// Header carrying the media type of the body.
pub const HDR_CONTENT_TYPE: &str = "Content-Type";

/// Media type used when a fetch returns several sibling versions.
pub const CTYPE_MULTIPART_MIXED: &str = "multipart/mixed";

/// Status code signalling multiple representations (siblings).
pub const STATUS_MULTIPLE_CHOICES: u16 = 300;
