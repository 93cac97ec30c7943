//! Header map used throughout response decoding.
//!
//! Names are case-sensitive and a later insert under an existing name
//! replaces the earlier value, matching how the transport adapter collapses
//! repeated headers.

use std::collections::{BTreeMap, btree_map};

/// Mapping from header name to header value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: BTreeMap<String, String>,
}

impl HeaderSet {
    /// Create an empty header set.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Insert a header, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    /// Look up a header by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> { self.entries.get(name).map(String::as_str) }

    /// Whether a header with exactly this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool { self.entries.contains_key(name) }

    /// Number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Whether the set holds no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Return a copy of `self` with every header of `overrides` applied on top.
    ///
    /// Values from `overrides` win when both sets carry the same name.
    ///
    /// # Examples
    ///
    /// ```
    /// use riak_fetch::HeaderSet;
    ///
    /// let document: HeaderSet = [("Content-Type", "multipart/mixed"), ("X-Riak-Vclock", "a85h")]
    ///     .into_iter()
    ///     .collect();
    /// let part: HeaderSet = [("Content-Type", "text/plain")].into_iter().collect();
    ///
    /// let merged = document.overlay(&part);
    /// assert_eq!(merged.get("Content-Type"), Some("text/plain"));
    /// assert_eq!(merged.get("X-Riak-Vclock"), Some("a85h"));
    /// ```
    #[must_use]
    pub fn overlay(&self, overrides: &HeaderSet) -> HeaderSet {
        let mut merged = self.clone();
        merged.extend(overrides.iter());
        merged
    }
}

/// Borrowing iterator over a [`HeaderSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<N, V> Extend<(N, V)> for HeaderSet
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderSet
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        headers.extend(iter);
        headers
    }
}
