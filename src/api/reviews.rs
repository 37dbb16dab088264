//! Review Endpoints
//!
//! URL construction and fetch wrappers for `/api/reviews`.

use async_trait::async_trait;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use super::{ApiClient, Result, ReviewSource};
use crate::config::ApiConfig;
use crate::models::{Review, ReviewPage, SingleReview};

/// Characters escaped when a document id is placed in a path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Document id as a single URL path segment
pub fn encode_segment(document_id: &str) -> String {
    utf8_percent_encode(document_id, SEGMENT_ENCODE_SET).to_string()
}

/// Inverse of `encode_segment`, for ids read back from the route
pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// `GET /api/reviews` for one page, with authors and total count
pub fn review_page_url(config: &ApiConfig, page: u32) -> String {
    format!(
        "{}/api/reviews?pagination[page]={}&pagination[pageSize]={}&pagination[withCount]=true&populate=*",
        config.base_url, page, config.page_size
    )
}

/// `GET /api/reviews/{documentId}` with the author populated
pub fn review_url(config: &ApiConfig, document_id: &str) -> String {
    format!(
        "{}/api/reviews/{}?populate=author",
        config.base_url,
        encode_segment(document_id)
    )
}

#[async_trait(?Send)]
impl ReviewSource for ApiClient {
    async fn list_reviews(&self, page: u32) -> Result<ReviewPage> {
        self.get_json(&review_page_url(self.config(), page), "reviews").await
    }

    async fn get_review(&self, document_id: &str) -> Result<Option<Review>> {
        let single: SingleReview = self
            .get_json(&review_url(self.config(), document_id), "review")
            .await?;
        Ok(single.data)
    }
}
