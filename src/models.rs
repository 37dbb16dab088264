//! Frontend Models
//!
//! Data structures matching the review API responses.

use serde::Deserialize;

use crate::rich_text::Block;

/// Shown in place of an author name when the review has none
pub const ANONYMOUS: &str = "Anonymous";

/// Review record (matches API `data` entries)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub document_id: String,
    pub title: String,
    pub rating: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: Vec<Block>,
    #[serde(default)]
    pub author: Option<Author>,
}

impl Review {
    /// Author display name, or "Anonymous" when no author is related
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|author| author.name.as_deref())
            .unwrap_or(ANONYMOUS)
    }
}

/// Author data structure (populated relation)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Server-reported pagination for a collection response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u32,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: crate::config::PAGE_SIZE,
            page_count: 1,
            total: 0,
        }
    }
}

impl PaginationMeta {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// Text shown between the Previous/Next buttons
    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} ({} total reviews)",
            self.page, self.page_count, self.total
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionMeta {
    pub pagination: PaginationMeta,
}

/// `GET /api/reviews` envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewPage {
    pub data: Vec<Review>,
    pub meta: CollectionMeta,
}

impl ReviewPage {
    pub fn pagination(&self) -> PaginationMeta {
        self.meta.pagination
    }
}

/// `GET /api/reviews/{documentId}` envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SingleReview {
    #[serde(default)]
    pub data: Option<Review>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let blocks: Option<Vec<Block>> = Option::deserialize(deserializer)?;
    Ok(blocks.unwrap_or_default())
}
