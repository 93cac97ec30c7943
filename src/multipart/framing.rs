//! Generic RFC 2046 framing for multipart bodies.
//!
//! This layer knows nothing about stored objects: it finds delimiter lines,
//! separates each part's header block from its body, and hands back the
//! pieces in body order. Part bodies are zero-copy slices of the input.
//!
//! The framing accepts both CRLF and bare LF line endings. Preamble text
//! before the first delimiter and epilogue text after the closing delimiter
//! are discarded. Content after the last delimiter that is never closed by
//! another delimiter is not treated as a part.

use bytes::Bytes;
use log::debug;

use super::{MultipartConfig, MultipartError};
use crate::headers::HeaderSet;

const MAX_BOUNDARY_LEN: usize = 70;

/// One body part with its own headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    headers: HeaderSet,
    body: Bytes,
}

impl Part {
    /// Headers declared inside the part.
    #[must_use]
    pub fn headers(&self) -> &HeaderSet { &self.headers }

    /// Body bytes of the part.
    #[must_use]
    pub fn body(&self) -> &Bytes { &self.body }

    /// Split the part into its headers and body.
    #[must_use]
    pub fn into_parts(self) -> (HeaderSet, Bytes) { (self.headers, self.body) }
}

/// Extract the `boundary` parameter from a multipart content type.
///
/// # Errors
///
/// Returns [`MultipartError::MissingBoundary`] when no non-empty boundary is
/// declared and [`MultipartError::InvalidBoundary`] when it is longer than
/// RFC 2046 allows.
///
/// # Examples
///
/// ```
/// use riak_fetch::multipart::boundary_from_content_type;
///
/// let boundary = boundary_from_content_type(r#"multipart/mixed; boundary="YinLMzyUR9feB17okMytgKsylvh""#);
/// assert_eq!(boundary.as_deref(), Ok("YinLMzyUR9feB17okMytgKsylvh"));
/// ```
pub fn boundary_from_content_type(content_type: &str) -> Result<String, MultipartError> {
    let boundary = content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("boundary"))
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
        .ok_or(MultipartError::MissingBoundary)?;

    if boundary.len() > MAX_BOUNDARY_LEN {
        return Err(MultipartError::InvalidBoundary {
            length: boundary.len(),
        });
    }
    Ok(boundary.to_owned())
}

/// Split `body` into the parts delimited by `boundary`.
///
/// # Errors
///
/// Returns [`MultipartError::TooManyParts`] or
/// [`MultipartError::PartTooLarge`] when the body breaches `config`.
pub fn split_parts(
    body: &Bytes,
    boundary: &str,
    config: &MultipartConfig,
) -> Result<Vec<Part>, MultipartError> {
    let delimiter = format!("--{boundary}");
    let delimiter = delimiter.as_bytes();
    let mut parts = Vec::new();

    let Some(mut at) = find_delimiter(body, delimiter, 0) else {
        debug!("multipart body contains no delimiter: boundary={boundary}");
        return Ok(parts);
    };

    loop {
        let after = at + delimiter.len();
        if body[after..].starts_with(b"--") {
            break;
        }
        let Some(start) = next_line(body, after) else {
            break;
        };
        let Some(next) = find_delimiter(body, delimiter, start) else {
            debug!("discarding unterminated multipart part: boundary={boundary}");
            break;
        };

        if parts.len() == config.max_parts.get() {
            return Err(MultipartError::TooManyParts {
                max: config.max_parts,
            });
        }
        let end = strip_line_break(body, start, next);
        let part = parse_part(&body.slice(start..end));
        if part.body.len() > config.max_part_size.get() {
            return Err(MultipartError::PartTooLarge {
                index: parts.len(),
                size: part.body.len(),
                max: config.max_part_size,
            });
        }
        parts.push(part);
        at = next;
    }

    Ok(parts)
}

/// Find the next delimiter line, starting the scan at `from`.
///
/// A delimiter begins a line and is followed either by `--` (closing
/// delimiter) or by nothing but linear whitespace up to the line break.
fn find_delimiter(body: &[u8], delimiter: &[u8], from: usize) -> Option<usize> {
    let mut pos = from;
    while pos + delimiter.len() <= body.len() {
        let offset = body[pos..]
            .windows(delimiter.len())
            .position(|window| window == delimiter)?;
        let at = pos + offset;
        let starts_line = at == 0 || body[at - 1] == b'\n';
        if starts_line && ends_delimiter_line(&body[at + delimiter.len()..]) {
            return Some(at);
        }
        pos = at + 1;
    }
    None
}

fn ends_delimiter_line(rest: &[u8]) -> bool {
    if rest.starts_with(b"--") {
        return true;
    }
    rest.iter()
        .take_while(|&&byte| byte != b'\n')
        .all(|&byte| matches!(byte, b' ' | b'\t' | b'\r'))
}

/// Index just past the line break that ends the line containing `from`.
fn next_line(body: &[u8], from: usize) -> Option<usize> {
    body[from..]
        .iter()
        .position(|&byte| byte == b'\n')
        .map(|offset| from + offset + 1)
}

/// Drop the line break that belongs to the delimiter found at `end`.
fn strip_line_break(body: &[u8], start: usize, end: usize) -> usize {
    let mut end = end;
    if end > start && body[end - 1] == b'\n' {
        end -= 1;
        if end > start && body[end - 1] == b'\r' {
            end -= 1;
        }
    }
    end
}

fn parse_part(content: &Bytes) -> Part {
    let (header_len, body_start) = header_block_bounds(content);
    Part {
        headers: parse_header_block(&content[..header_len]),
        body: content.slice(body_start..),
    }
}

/// Locate the blank line separating headers from body.
///
/// Returns the header block length and the offset at which the body starts.
/// A part without a blank line is treated as all headers.
fn header_block_bounds(content: &[u8]) -> (usize, usize) {
    if content.starts_with(b"\r\n") {
        return (0, 2);
    }
    if content.starts_with(b"\n") {
        return (0, 1);
    }

    let mut line_start = 0;
    while let Some(offset) = content[line_start..].iter().position(|&b| b == b'\n') {
        let line_end = line_start + offset + 1;
        match &content[line_end..] {
            rest if rest.starts_with(b"\r\n") => return (line_end, line_end + 2),
            rest if rest.starts_with(b"\n") => return (line_end, line_end + 1),
            _ => line_start = line_end,
        }
    }
    (content.len(), content.len())
}

fn parse_header_block(block: &[u8]) -> HeaderSet {
    let text = String::from_utf8_lossy(block);
    let mut headers = HeaderSet::new();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        if line.starts_with([' ', '\t']) {
            if let Some((_, value)) = current.as_mut() {
                value.push(' ');
                value.push_str(line.trim());
            }
            continue;
        }
        if let Some((name, value)) = current.take() {
            headers.insert(name, value);
        }
        match line.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => {
                current = Some((name.trim().to_owned(), value.trim().to_owned()));
            }
            _ => debug!("ignoring malformed multipart header line: line={line:?}"),
        }
    }
    if let Some((name, value)) = current {
        headers.insert(name, value);
    }
    headers
}
