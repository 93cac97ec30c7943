//! User metadata carried as `X-Riak-Meta-*` headers.

use std::collections::HashMap;

use crate::{constants::HDR_USERMETA_PREFIX, headers::HeaderSet};

/// Collect user metadata from `headers`.
///
/// Each header named `X-Riak-Meta-<name>` contributes `<name>` mapped to the
/// header value, copied verbatim. Matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use riak_fetch::{HeaderSet, extract_usermeta};
///
/// let headers: HeaderSet = [("X-Riak-Meta-Foo", "bar"), ("Content-Type", "text/plain")]
///     .into_iter()
///     .collect();
/// let usermeta = extract_usermeta(&headers);
/// assert_eq!(usermeta.len(), 1);
/// assert_eq!(usermeta.get("Foo").map(String::as_str), Some("bar"));
/// ```
#[must_use]
pub fn extract_usermeta(headers: &HeaderSet) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            name.strip_prefix(HDR_USERMETA_PREFIX)
                .map(|meta| (meta.to_owned(), value.to_owned()))
        })
        .collect()
}
