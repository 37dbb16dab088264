//! Content API Client
//!
//! HTTP bindings for the review endpoints, organized by resource.

mod error;
mod reviews;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::models::{Review, ReviewPage};

pub use error::{ApiError, Result};
pub use reviews::*;

/// Where the views get their reviews from
#[async_trait(?Send)]
pub trait ReviewSource {
    /// One page of reviews, with authors and total count
    async fn list_reviews(&self, page: u32) -> Result<ReviewPage>;

    /// One review by document id; `Ok(None)` when the server has no such record
    async fn get_review(&self, document_id: &str) -> Result<Option<Review>>;
}

/// `ReviewSource` backed by the content API
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET `url` and decode the JSON body.
    ///
    /// `resource` names what is being fetched and only feeds the error message.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, resource: &'static str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
