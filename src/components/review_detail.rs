//! Review Detail Component
//!
//! Single review page keyed by the `document_id` route parameter.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api::{decode_segment, ApiClient};
use crate::components::{NoticeLine, RatingBar, RichTextBody};
use crate::config::use_api_config;
use crate::loaders::{detail_content, DetailLoader};
use crate::models::Review;

const CONTAINER_STYLE: &str = "padding: 20px; max-width: 800px; margin: 0 auto;";

#[component]
fn ReviewArticle(review: Review) -> impl IntoView {
    view! {
        <article class="review-detail">
            <h1 style="margin-bottom: 16px;">{review.title}</h1>
            <RatingBar rating=review.rating />
            <RichTextBody blocks=review.body />
        </article>
    }
}

/// Review detail page (mounted at `/review/:document_id`)
#[component]
pub fn ReviewDetail() -> impl IntoView {
    let loader = DetailLoader::new(Rc::new(ApiClient::new(use_api_config())));
    let state = loader.state();
    let params = use_params_map();
    let document_id = Memo::new(move |_| {
        params
            .with(|p| p.get("document_id"))
            .map(|raw| decode_segment(&raw))
            .unwrap_or_default()
    });

    // Re-fetch whenever the route's document id changes
    Effect::new(move |_| {
        let id = document_id.get();
        if id.is_empty() {
            return;
        }
        let loader = loader.clone();
        spawn_local(async move {
            loader.load(&id).await;
        });
    });

    view! {
        <div style=CONTAINER_STYLE>
            {move || match detail_content(state.get()) {
                Ok(review) => view! { <ReviewArticle review=review /> }.into_any(),
                Err(notice) => view! { <NoticeLine notice=notice /> }.into_any(),
            }}
        </div>
    }
}
