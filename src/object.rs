//! Decoded representation of a single stored object version.

use std::collections::HashMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{HDR_CONTENT_TYPE, HDR_ETAG, HDR_LAST_MODIFIED, HDR_LINK, HDR_VCLOCK},
    headers::HeaderSet,
    link::{Link, parse_links},
    usermeta::extract_usermeta,
};

/// One version of the object stored under `bucket/key`.
///
/// Values are immutable once built; every accessor borrows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObject {
    bucket: String,
    key: String,
    body: Bytes,
    content_type: Option<String>,
    vclock: Option<String>,
    last_modified: Option<String>,
    etag: Option<String>,
    links: Vec<Link>,
    usermeta: HashMap<String, String>,
}

impl RawObject {
    /// Build an object from the headers and body describing one version.
    ///
    /// Optional headers that are absent leave the matching field empty.
    #[must_use]
    pub fn from_headers(bucket: &str, key: &str, body: Bytes, headers: &HeaderSet) -> Self {
        let header = |name: &str| headers.get(name).map(str::to_owned);
        Self {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            body,
            content_type: header(HDR_CONTENT_TYPE),
            vclock: header(HDR_VCLOCK),
            last_modified: header(HDR_LAST_MODIFIED),
            etag: header(HDR_ETAG),
            links: parse_links(headers.get(HDR_LINK)),
            usermeta: extract_usermeta(headers),
        }
    }

    /// Bucket the object was fetched from.
    #[must_use]
    pub fn bucket(&self) -> &str { &self.bucket }

    /// Key the object was fetched from.
    #[must_use]
    pub fn key(&self) -> &str { &self.key }

    /// Raw body bytes.
    #[must_use]
    pub fn body(&self) -> &Bytes { &self.body }

    /// Body decoded as UTF-8, if valid.
    #[must_use]
    pub fn body_str(&self) -> Option<&str> { std::str::from_utf8(&self.body).ok() }

    /// Media type of the body.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> { self.content_type.as_deref() }

    /// Opaque causality token to send back with updates.
    #[must_use]
    pub fn vclock(&self) -> Option<&str> { self.vclock.as_deref() }

    /// Last modification timestamp as sent by the server.
    #[must_use]
    pub fn last_modified(&self) -> Option<&str> { self.last_modified.as_deref() }

    /// Entity tag of this version.
    #[must_use]
    pub fn etag(&self) -> Option<&str> { self.etag.as_deref() }

    /// Links to other objects.
    #[must_use]
    pub fn links(&self) -> &[Link] { &self.links }

    /// User metadata entries.
    #[must_use]
    pub fn usermeta(&self) -> &HashMap<String, String> { &self.usermeta }
}
