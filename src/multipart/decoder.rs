//! Assembly of sibling objects from a `multipart/mixed` fetch response.

use bytes::Bytes;
use log::debug;

use super::{MultipartConfig, boundary_from_content_type, split_parts};
use crate::{
    constants::{CTYPE_MULTIPART_MIXED, HDR_CONTENT_TYPE},
    error::{FetchError, Result},
    headers::HeaderSet,
    object::RawObject,
};

/// Decode every body part of a sibling response into a [`RawObject`].
///
/// Each part inherits the document headers, with the part's own headers
/// taking precedence. Objects are returned in body order and share the
/// requested `bucket` and `key`.
///
/// # Errors
///
/// Returns [`FetchError::MalformedMultipart`] when the document content type
/// is missing, is not `multipart/mixed`, or declares no usable boundary, and
/// [`FetchError::Multipart`] when the body cannot be framed within `config`.
pub fn decode_siblings(
    document_headers: &HeaderSet,
    body: &Bytes,
    bucket: &str,
    key: &str,
    config: &MultipartConfig,
) -> Result<Vec<RawObject>> {
    let content_type = document_headers.get(HDR_CONTENT_TYPE);
    let Some(content_type) = content_type.filter(|value| is_multipart_mixed(value)) else {
        return Err(FetchError::MalformedMultipart {
            content_type: content_type.map(str::to_owned),
        });
    };

    let boundary = boundary_from_content_type(content_type).map_err(|err| {
        debug!("multipart content type has no usable boundary: error={err}");
        FetchError::MalformedMultipart {
            content_type: Some(content_type.to_owned()),
        }
    })?;
    let parts = split_parts(body, &boundary, config)?;
    debug!(
        "decoded multipart siblings: bucket={bucket}, key={key}, parts={}",
        parts.len()
    );

    Ok(parts
        .into_iter()
        .map(|part| {
            let (part_headers, part_body) = part.into_parts();
            let headers = document_headers.overlay(&part_headers);
            RawObject::from_headers(bucket, key, part_body, &headers)
        })
        .collect())
}

fn is_multipart_mixed(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with(CTYPE_MULTIPART_MIXED)
}
