//! Unit tests for multipart framing and sibling assembly.

use std::num::NonZeroUsize;

use bytes::Bytes;
use rstest::rstest;

use super::{
    MultipartConfig,
    MultipartError,
    boundary_from_content_type,
    decode_siblings,
    split_parts,
};
use crate::{error::FetchError, headers::HeaderSet};

fn nz(val: usize) -> NonZeroUsize { NonZeroUsize::new(val).expect("non-zero") }

const SIBLINGS: &str = "\r\n--XYZ\r\n\
Content-Type: text/plain\r\n\
Link: </riak/b>; rel=\"up\"\r\n\
Etag: first\r\n\
\r\n\
one\r\n\
--XYZ\r\n\
Content-Type: application/json\r\n\
X-Riak-Meta-Mood: cheerful\r\n\
\r\n\
{\"two\":2}\r\n\
--XYZ--\r\n";

fn document_headers() -> HeaderSet {
    [
        ("Content-Type", "multipart/mixed; boundary=XYZ"),
        ("X-Riak-Vclock", "a85hYGBgzGDKBVIcR4M2"),
        ("X-Riak-Meta-Mood", "grumpy"),
    ]
    .into_iter()
    .collect()
}

#[rstest]
#[case::bare("multipart/mixed; boundary=abc", "abc")]
#[case::quoted(r#"multipart/mixed; boundary="a b c""#, "a b c")]
#[case::spaced("multipart/mixed ;  Boundary = abc ", "abc")]
#[case::other_params("multipart/mixed; charset=utf-8; boundary=abc", "abc")]
fn boundary_parameter_is_extracted(#[case] content_type: &str, #[case] expected: &str) {
    assert_eq!(
        boundary_from_content_type(content_type).expect("boundary"),
        expected
    );
}

#[rstest]
#[case::absent("multipart/mixed")]
#[case::empty("multipart/mixed; boundary=")]
#[case::empty_quoted(r#"multipart/mixed; boundary="""#)]
fn missing_boundary_is_rejected(#[case] content_type: &str) {
    assert_eq!(
        boundary_from_content_type(content_type),
        Err(MultipartError::MissingBoundary)
    );
}

#[test]
fn overlong_boundary_is_rejected() {
    let content_type = format!("multipart/mixed; boundary={}", "x".repeat(71));
    assert_eq!(
        boundary_from_content_type(&content_type),
        Err(MultipartError::InvalidBoundary { length: 71 })
    );
}

#[test]
fn splits_parts_in_body_order() {
    let body = Bytes::from_static(SIBLINGS.as_bytes());
    let parts = split_parts(&body, "XYZ", &MultipartConfig::default()).expect("split");

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].headers().get("Content-Type"), Some("text/plain"));
    assert_eq!(parts[0].headers().get("Etag"), Some("first"));
    assert_eq!(parts[0].body().as_ref(), b"one");
    assert_eq!(parts[1].headers().get("Content-Type"), Some("application/json"));
    assert_eq!(parts[1].body().as_ref(), br#"{"two":2}"#);
}

#[test]
fn accepts_bare_line_feeds_and_ignores_preamble_and_epilogue() {
    let body = Bytes::from_static(
        b"preamble text\n--b\nContent-Type: text/plain\n\nalpha\n--b\n\nbeta\n--b--\nepilogue",
    );
    let parts = split_parts(&body, "b", &MultipartConfig::default()).expect("split");

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].headers().get("Content-Type"), Some("text/plain"));
    assert_eq!(parts[0].body().as_ref(), b"alpha");
    assert!(parts[1].headers().is_empty());
    assert_eq!(parts[1].body().as_ref(), b"beta");
}

#[test]
fn folded_header_lines_are_joined() {
    let body = Bytes::from_static(b"--b\r\nLink: </riak/b/k>;\r\n riaktag=\"t\"\r\n\r\nx\r\n--b--");
    let parts = split_parts(&body, "b", &MultipartConfig::default()).expect("split");
    assert_eq!(
        parts[0].headers().get("Link"),
        Some("</riak/b/k>; riaktag=\"t\"")
    );
}

#[test]
fn delimiter_must_start_a_line() {
    let body = Bytes::from_static(b"--b\r\n\r\nvalue with --b inside\r\n--b--");
    let parts = split_parts(&body, "b", &MultipartConfig::default()).expect("split");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].body().as_ref(), b"value with --b inside");
}

#[rstest]
#[case::no_delimiter(b"just some text".as_slice())]
#[case::only_closing(b"--b--\r\n".as_slice())]
#[case::unterminated(b"--b\r\n\r\ndangling".as_slice())]
fn bodies_without_complete_parts_yield_nothing(#[case] body: &'static [u8]) {
    let parts =
        split_parts(&Bytes::from_static(body), "b", &MultipartConfig::default()).expect("split");
    assert!(parts.is_empty());
}

#[test]
fn part_count_cap_is_enforced() {
    let config = MultipartConfig::default().with_max_parts(nz(1));
    let body = Bytes::from_static(SIBLINGS.as_bytes());
    assert_eq!(
        split_parts(&body, "XYZ", &config),
        Err(MultipartError::TooManyParts { max: nz(1) })
    );
}

#[test]
fn part_size_cap_is_enforced() {
    let config = MultipartConfig::default().with_max_part_size(nz(4));
    let body = Bytes::from_static(SIBLINGS.as_bytes());
    assert_eq!(
        split_parts(&body, "XYZ", &config),
        Err(MultipartError::PartTooLarge {
            index: 1,
            size: 9,
            max: nz(4),
        })
    );
}

#[test]
fn siblings_inherit_document_headers_with_part_precedence() {
    let body = Bytes::from_static(SIBLINGS.as_bytes());
    let siblings = decode_siblings(
        &document_headers(),
        &body,
        "b",
        "k",
        &MultipartConfig::default(),
    )
    .expect("decode");

    assert_eq!(siblings.len(), 2);
    for sibling in &siblings {
        assert_eq!(sibling.bucket(), "b");
        assert_eq!(sibling.key(), "k");
        assert_eq!(sibling.vclock(), Some("a85hYGBgzGDKBVIcR4M2"));
    }

    assert_eq!(siblings[0].content_type(), Some("text/plain"));
    assert_eq!(siblings[0].body_str(), Some("one"));
    assert!(siblings[0].links().is_empty(), "rel=up carries no riaktag");
    assert_eq!(siblings[0].usermeta()["Mood"], "grumpy");

    assert_eq!(siblings[1].content_type(), Some("application/json"));
    assert_eq!(siblings[1].body_str(), Some(r#"{"two":2}"#));
    assert_eq!(siblings[1].usermeta()["Mood"], "cheerful");
}

#[rstest]
#[case::missing(None)]
#[case::plain_text(Some("text/plain"))]
#[case::form_data(Some("multipart/form-data; boundary=XYZ"))]
fn non_mixed_content_type_is_malformed(#[case] content_type: Option<&str>) {
    let mut headers = HeaderSet::new();
    if let Some(content_type) = content_type {
        headers.insert("Content-Type", content_type);
    }
    let body = Bytes::from_static(SIBLINGS.as_bytes());

    let err = decode_siblings(&headers, &body, "b", "k", &MultipartConfig::default())
        .expect_err("decode should fail");

    assert_eq!(
        err,
        FetchError::MalformedMultipart {
            content_type: content_type.map(str::to_owned),
        }
    );
}

#[test]
fn content_type_check_trims_and_ignores_case() {
    let headers: HeaderSet = [("Content-Type", "  Multipart/Mixed; boundary=XYZ")]
        .into_iter()
        .collect();
    let body = Bytes::from_static(SIBLINGS.as_bytes());
    let siblings = decode_siblings(&headers, &body, "b", "k", &MultipartConfig::default())
        .expect("decode");
    assert_eq!(siblings.len(), 2);
}

#[rstest]
#[case::absent("multipart/mixed")]
#[case::empty("multipart/mixed; boundary=")]
fn missing_boundary_is_malformed(#[case] content_type: &str) {
    let headers: HeaderSet = [("Content-Type", content_type)].into_iter().collect();
    let err = decode_siblings(&headers, &Bytes::new(), "b", "k", &MultipartConfig::default())
        .expect_err("decode should fail");
    assert_eq!(
        err,
        FetchError::MalformedMultipart {
            content_type: Some(content_type.to_owned()),
        }
    );
}

#[test]
fn body_line_extending_the_boundary_is_not_a_delimiter() {
    let body = Bytes::from_static(
        b"--q\r\n\r\nline one\r\n--qq not a delimiter\r\nline three\r\n--q--\r\n",
    );
    let parts = split_parts(&body, "q", &MultipartConfig::default()).expect("split");

    assert_eq!(parts.len(), 1);
    assert_eq!(
        parts[0].body().as_ref(),
        b"line one\r\n--qq not a delimiter\r\nline three"
    );
}

#[test]
fn delimiter_may_carry_trailing_whitespace() {
    let body = Bytes::from_static(b"--q \t\r\n\r\nalpha\r\n--q  \r\n\r\nbeta\r\n--q--");
    let parts = split_parts(&body, "q", &MultipartConfig::default()).expect("split");

    let bodies: Vec<_> = parts.iter().map(|part| part.body().as_ref()).collect();
    assert_eq!(bodies, [b"alpha".as_slice(), b"beta".as_slice()]);
}
