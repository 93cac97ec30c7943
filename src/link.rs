//! Link relations carried by the `Link` response header.
//!
//! The store encodes each relation as `</riak/bucket/key>; riaktag="tag"`.
//! Parsing is permissive: any entry that cannot be turned into a complete
//! [`Link`] is dropped rather than reported.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::LINK_TAG_PARAM;

/// Tagged relation from one stored object to another.
///
/// Deserialisation rejects links whose bucket, key or tag is empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LinkFields")]
pub struct Link {
    bucket: String,
    key: String,
    tag: String,
}

#[derive(Deserialize)]
struct LinkFields {
    bucket: String,
    key: String,
    tag: String,
}

impl TryFrom<LinkFields> for Link {
    type Error = &'static str;

    fn try_from(fields: LinkFields) -> Result<Self, Self::Error> {
        if fields.bucket.is_empty() || fields.key.is_empty() || fields.tag.is_empty() {
            return Err("link bucket, key and tag must be non-empty");
        }
        Ok(Self::new(fields.bucket, fields.key, fields.tag))
    }
}

impl Link {
    /// Construct a link to `bucket/key` carrying `tag`.
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            tag: tag.into(),
        }
    }

    /// Bucket of the link target.
    #[must_use]
    pub fn bucket(&self) -> &str { &self.bucket }

    /// Key of the link target.
    #[must_use]
    pub fn key(&self) -> &str { &self.key }

    /// Relation tag.
    #[must_use]
    pub fn tag(&self) -> &str { &self.tag }
}

/// Parse a `Link` header value into the links it describes.
///
/// Absent or blank input yields no links. Entries without a `riaktag`
/// parameter, or whose target has fewer than two path segments, are skipped.
/// Duplicate links are reported once, in first-seen order.
///
/// # Examples
///
/// ```
/// use riak_fetch::{Link, parse_links};
///
/// let links = parse_links(Some(r#"</riak/b>; rel="up", </riak/b/k>; riaktag="tag1""#));
/// assert_eq!(links, vec![Link::new("b", "k", "tag1")]);
/// ```
#[must_use]
pub fn parse_links(header: Option<&str>) -> Vec<Link> {
    let Some(header) = header.filter(|value| !value.trim().is_empty()) else {
        return Vec::new();
    };

    let mut links: Vec<Link> = Vec::new();
    for raw in split_unquoted(header, ',') {
        let Some(link) = parse_entry(raw) else {
            debug!("dropping link entry: entry={raw:?}");
            continue;
        };
        if !links.contains(&link) {
            links.push(link);
        }
    }
    links
}

fn parse_entry(raw: &str) -> Option<Link> {
    let raw = raw.trim();
    let rest = raw.strip_prefix('<')?;
    let (target, params) = rest.split_once('>')?;

    let tag = split_unquoted(params, ';')
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case(LINK_TAG_PARAM))
        .map(|(_, value)| unquote(value.trim()))
        .filter(|tag| !tag.is_empty())?;

    link_from_target(target, tag)
}

/// Split the target path; the final segment names the key and the one
/// before it names the bucket.
fn link_from_target(target: &str, tag: String) -> Option<Link> {
    let mut segments = target.split('/').filter(|segment| !segment.is_empty());
    let key = segments.next_back()?;
    let bucket = segments.next_back()?;
    Some(Link::new(bucket, key, tag))
}

/// Split `input` on `separator`, ignoring separators inside `<...>` targets
/// and double-quoted strings.
fn split_unquoted(input: &str, separator: char) -> impl Iterator<Item = &str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut in_target = false;
    let mut escaped = false;

    for (idx, ch) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' if !in_target => in_quotes = !in_quotes,
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            c if c == separator && !in_quotes && !in_target => {
                pieces.push(&input[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&input[start..]);
    pieces.into_iter().filter(|piece| !piece.trim().is_empty())
}

fn unquote(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .map(|rest| rest.strip_suffix('"').unwrap_or(rest))
    else {
        return value.to_owned();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests;
