//! Resource caps applied while splitting multipart bodies.

use std::num::NonZeroUsize;

const fn non_zero(value: usize) -> NonZeroUsize {
    match NonZeroUsize::new(value) {
        Some(value) => value,
        None => NonZeroUsize::MIN,
    }
}

/// Limits bounding the work done for one multipart body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultipartConfig {
    /// Maximum number of parts (siblings) accepted in one body.
    pub max_parts: NonZeroUsize,
    /// Maximum size of a single part body in bytes.
    pub max_part_size: NonZeroUsize,
}

impl MultipartConfig {
    /// Library defaults: 1024 parts of at most 64 MiB each.
    pub const DEFAULT: MultipartConfig = MultipartConfig {
        max_parts: non_zero(1024),
        max_part_size: non_zero(64 * 1024 * 1024),
    };

    /// Replace the part count cap.
    #[must_use]
    pub const fn with_max_parts(mut self, max_parts: NonZeroUsize) -> Self {
        self.max_parts = max_parts;
        self
    }

    /// Replace the per-part size cap.
    #[must_use]
    pub const fn with_max_part_size(mut self, max_part_size: NonZeroUsize) -> Self {
        self.max_part_size = max_part_size;
        self
    }
}

impl Default for MultipartConfig {
    fn default() -> Self { MultipartConfig::DEFAULT }
}
