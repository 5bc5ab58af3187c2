//! Page envelope and the bare-array/envelope union.
//!
//! List endpoints are inconsistent: some return a bare JSON array, the
//! Spring-paginated ones return an envelope with a `content` field plus
//! paging metadata. [`ListResponse`] accepts both so callers never care.

use serde::{Deserialize, Serialize};

/// Spring-style page envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(alias = "number", default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(rename = "totalElements", alias = "total_elements", default)]
    pub total_elements: u64,
    #[serde(rename = "totalPages", alias = "total_pages", default)]
    pub total_pages: u32,
}

/// Either wire shape a list endpoint may produce.
///
/// Untagged: a JSON array matches `Bare`, an object matches `Paged` (all
/// envelope fields default, so even a sparse envelope parses).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Paged(Page<T>),
}

impl<T> ListResponse<T> {
    /// Flatten to the items regardless of shape.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Paged(page) => page.content,
        }
    }

    /// Total element count: envelope metadata when present, list length
    /// otherwise.
    pub fn total_elements(&self) -> u64 {
        match self {
            ListResponse::Bare(items) => items.len() as u64,
            ListResponse::Paged(page) => page.total_elements,
        }
    }
}
