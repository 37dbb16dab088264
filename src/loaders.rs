//! View Loaders
//!
//! The fetch-and-apply step behind the list and detail views. Each loader owns
//! its state signal and request sequence; the components drive it from an
//! effect and only render what the signal holds.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::ReviewSource;
use crate::fetch_state::{FetchState, Notice, RequestSequence};
use crate::models::{Review, ReviewPage};

pub const LIST_LOADING_TEXT: &str = "Loading reviews...";
pub const DETAIL_LOADING_TEXT: &str = "Loading review...";
pub const NOT_FOUND_TEXT: &str = "Review not found";

/// Loads pages of reviews for the list view
pub struct ListLoader<S> {
    source: Rc<S>,
    sequence: RequestSequence,
    state: RwSignal<FetchState<ReviewPage>>,
}

impl<S> Clone for ListLoader<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            sequence: self.sequence.clone(),
            state: self.state,
        }
    }
}

impl<S: ReviewSource> ListLoader<S> {
    pub fn new(source: Rc<S>) -> Self {
        Self {
            source,
            sequence: RequestSequence::new(),
            state: RwSignal::new(FetchState::Loading),
        }
    }

    pub fn state(&self) -> RwSignal<FetchState<ReviewPage>> {
        self.state
    }

    /// Fetch `page`, replacing the current results.
    /// Returns false when a newer request superseded this one.
    pub async fn load(&self, page: u32) -> bool {
        let ticket = self.sequence.issue();
        self.state.set(FetchState::Loading);

        let result = self.source.list_reviews(page).await;
        if !self.sequence.is_current(ticket) {
            log::debug!(target: "ReviewList", "Dropped stale response for page {}", page);
            return false;
        }
        match &result {
            Ok(_) => log::info!(target: "ReviewList", "Page {} loaded successfully", page),
            Err(e) => log::error!(target: "ReviewList", "Error loading page {}: {}", page, e),
        }
        self.state.set(FetchState::from_result(result));
        true
    }
}

/// Loads single reviews for the detail view
pub struct DetailLoader<S> {
    source: Rc<S>,
    sequence: RequestSequence,
    state: RwSignal<FetchState<Option<Review>>>,
}

impl<S> Clone for DetailLoader<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            sequence: self.sequence.clone(),
            state: self.state,
        }
    }
}

impl<S: ReviewSource> DetailLoader<S> {
    pub fn new(source: Rc<S>) -> Self {
        Self {
            source,
            sequence: RequestSequence::new(),
            state: RwSignal::new(FetchState::Loading),
        }
    }

    pub fn state(&self) -> RwSignal<FetchState<Option<Review>>> {
        self.state
    }

    /// Fetch the review with `document_id`, replacing whatever was shown.
    /// Returns false when a newer request superseded this one.
    pub async fn load(&self, document_id: &str) -> bool {
        let ticket = self.sequence.issue();
        self.state.set(FetchState::Loading);

        let result = self.source.get_review(document_id).await;
        if !self.sequence.is_current(ticket) {
            log::debug!(target: "ReviewDetail", "Dropped stale response for {}", document_id);
            return false;
        }
        match &result {
            Ok(Some(_)) => log::info!(target: "ReviewDetail", "Review loaded successfully"),
            Ok(None) => log::info!(target: "ReviewDetail", "Review {} not found", document_id),
            Err(e) => log::error!(target: "ReviewDetail", "Error loading {}: {}", document_id, e),
        }
        self.state.set(FetchState::from_result(result));
        true
    }
}

/// Review to show, or the notice for loading / failure / not found
pub fn detail_content(state: FetchState<Option<Review>>) -> Result<Review, Notice> {
    state
        .into_content(DETAIL_LOADING_TEXT)?
        .ok_or_else(|| Notice::info(NOT_FOUND_TEXT))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::api::{ApiError, Result};
    use crate::models::{CollectionMeta, PaginationMeta};

    /// In-memory source; a gated key waits for its sender before answering.
    #[derive(Default)]
    struct FakeSource {
        pages: HashMap<u32, Result<ReviewPage>>,
        reviews: HashMap<String, Result<Option<Review>>>,
        gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn with_page(mut self, page: u32, result: Result<ReviewPage>) -> Self {
            self.pages.insert(page, result);
            self
        }

        fn with_review(mut self, id: &str, result: Result<Option<Review>>) -> Self {
            self.reviews.insert(id.to_string(), result);
            self
        }

        fn gated(self, key: &str) -> (Self, oneshot::Sender<()>) {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().insert(key.to_string(), rx);
            (self, tx)
        }

        async fn wait_for(&self, key: &str) {
            self.calls.borrow_mut().push(key.to_string());
            let gate = self.gates.borrow_mut().remove(key);
            if let Some(rx) = gate {
                let _ = rx.await;
            }
        }
    }

    #[async_trait(?Send)]
    impl ReviewSource for FakeSource {
        async fn list_reviews(&self, page: u32) -> Result<ReviewPage> {
            self.wait_for(&format!("page-{}", page)).await;
            self.pages[&page].clone()
        }

        async fn get_review(&self, document_id: &str) -> Result<Option<Review>> {
            self.wait_for(document_id).await;
            self.reviews[document_id].clone()
        }
    }

    fn review(document_id: &str, title: &str) -> Review {
        Review {
            id: 1,
            document_id: document_id.to_string(),
            title: title.to_string(),
            rating: 7,
            body: Vec::new(),
            author: None,
        }
    }

    fn page(number: u32, titles: &[&str]) -> ReviewPage {
        ReviewPage {
            data: titles.iter().map(|t| review(&t.to_lowercase(), t)).collect(),
            meta: CollectionMeta {
                pagination: PaginationMeta { page: number, page_size: 10, page_count: 3, total: 23 },
            },
        }
    }

    #[tokio::test]
    async fn test_list_loads_page() {
        let source = FakeSource::default().with_page(1, Ok(page(1, &["Celeste", "Hades"])));
        let loader = ListLoader::new(Rc::new(source));
        assert_eq!(loader.state().get_untracked(), FetchState::Loading);

        assert!(loader.load(1).await);
        let loaded = loader.state().get_untracked().into_content(LIST_LOADING_TEXT).unwrap();
        assert_eq!(loaded.data.len(), 2);
        assert_eq!(loaded.pagination().summary(), "Page 1 of 3 (23 total reviews)");
    }

    #[tokio::test]
    async fn test_page_change_reenters_loading_and_replaces_results() {
        let (source, release) = FakeSource::default()
            .with_page(1, Ok(page(1, &["Celeste", "Hades"])))
            .with_page(2, Ok(page(2, &["Inside"])))
            .gated("page-2");
        let loader = ListLoader::new(Rc::new(source));
        loader.load(1).await;

        let observe = async {
            let during = loader.state().get_untracked();
            let _ = release.send(());
            during
        };
        let (applied, during) = tokio::join!(loader.load(2), observe);

        assert!(applied);
        assert_eq!(during, FetchState::Loading);
        let loaded = loader.state().get_untracked().into_content(LIST_LOADING_TEXT).unwrap();
        assert_eq!(loaded.data.len(), 1);
        assert_eq!(loaded.data[0].title, "Inside");
        assert_eq!(loaded.pagination().page, 2);
    }

    #[tokio::test]
    async fn test_list_error_state() {
        let source = FakeSource::default()
            .with_page(3, Err(ApiError::Status { resource: "reviews", status: 502 }));
        let loader = ListLoader::new(Rc::new(source));

        assert!(loader.load(3).await);
        let notice = loader.state().get_untracked().into_content(LIST_LOADING_TEXT).unwrap_err();
        assert_eq!(notice, Notice::error("Failed to fetch reviews"));
        assert_eq!(notice.text, "Error: Failed to fetch reviews");
    }

    #[tokio::test]
    async fn test_list_drops_stale_page() {
        let (source, release) = FakeSource::default()
            .with_page(1, Ok(page(1, &["Celeste"])))
            .with_page(2, Ok(page(2, &["Inside"])))
            .gated("page-1");
        let loader = ListLoader::new(Rc::new(source));

        let newer = async {
            let applied = loader.load(2).await;
            let _ = release.send(());
            applied
        };
        let (older_applied, newer_applied) = tokio::join!(loader.load(1), newer);

        assert!(!older_applied);
        assert!(newer_applied);
        let loaded = loader.state().get_untracked().into_content(LIST_LOADING_TEXT).unwrap();
        assert_eq!(loaded.pagination().page, 2);
    }

    #[tokio::test]
    async fn test_detail_refetches_for_new_id() {
        let source = Rc::new(
            FakeSource::default()
                .with_review("1", Ok(Some(review("1", "Celeste"))))
                .with_review("2", Ok(Some(review("2", "Hades")))),
        );
        let loader = DetailLoader::new(Rc::clone(&source));

        loader.load("1").await;
        assert_eq!(detail_content(loader.state().get_untracked()).unwrap().title, "Celeste");

        loader.load("2").await;
        assert_eq!(detail_content(loader.state().get_untracked()).unwrap().title, "Hades");
        assert_eq!(*source.calls.borrow(), vec!["1".to_string(), "2".to_string()]);
    }

    #[tokio::test]
    async fn test_detail_drops_stale_review() {
        let (source, release) = FakeSource::default()
            .with_review("1", Ok(Some(review("1", "Celeste"))))
            .with_review("2", Ok(Some(review("2", "Hades"))))
            .gated("1");
        let loader = DetailLoader::new(Rc::new(source));

        let newer = async {
            let applied = loader.load("2").await;
            let _ = release.send(());
            applied
        };
        let (older_applied, _) = tokio::join!(loader.load("1"), newer);

        assert!(!older_applied);
        assert_eq!(detail_content(loader.state().get_untracked()).unwrap().title, "Hades");
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let source = FakeSource::default().with_review("missing", Ok(None));
        let loader = DetailLoader::new(Rc::new(source));

        loader.load("missing").await;
        assert_eq!(
            detail_content(loader.state().get_untracked()),
            Err(Notice::info("Review not found"))
        );
    }

    #[test]
    fn test_detail_content_notices() {
        assert_eq!(
            detail_content(FetchState::Loading),
            Err(Notice::info("Loading review..."))
        );
        assert_eq!(
            detail_content(FetchState::Failed("Failed to fetch review".to_string())),
            Err(Notice::error("Failed to fetch review"))
        );
    }
}
