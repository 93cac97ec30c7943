//! Builder for `multipart/mixed` sibling bodies.

use bytes::Bytes;

/// Sibling body under construction.
///
/// Parts are framed with CRLF line endings and a leading line break, as the
/// store writes them.
#[derive(Clone, Debug)]
pub struct SiblingBody {
    boundary: String,
    parts: Vec<(Vec<(String, String)>, Vec<u8>)>,
}

impl SiblingBody {
    /// Start a body delimited by `boundary`.
    #[must_use]
    pub fn new(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    /// Append a part with the given headers and body.
    #[must_use]
    pub fn part<I, N, V>(mut self, headers: I, body: impl AsRef<[u8]>) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self.parts.push((headers, body.as_ref().to_vec()));
        self
    }

    /// Boundary token used between parts.
    #[must_use]
    pub fn boundary(&self) -> &str { &self.boundary }

    /// Number of parts appended so far.
    #[must_use]
    pub fn len(&self) -> usize { self.parts.len() }

    /// Whether no parts were appended.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.parts.is_empty() }

    /// Content type declaring this body's boundary.
    #[must_use]
    pub fn content_type(&self) -> String { format!("multipart/mixed; boundary={}", self.boundary) }

    /// Render the framed body.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        let mut out = Vec::new();
        for (headers, body) in &self.parts {
            out.extend_from_slice(format!("\r\n--{}\r\n", self.boundary).as_bytes());
            for (name, value) in headers {
                out.extend_from_slice(format!("{name}: {value}\r\n").as_bytes());
            }
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(body);
        }
        out.extend_from_slice(format!("\r\n--{}--\r\n", self.boundary).as_bytes());
        Bytes::from(out)
    }
}
