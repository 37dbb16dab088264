//! Review List Component
//!
//! One page of reviews in a table, with Previous/Next paging.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{encode_segment, ApiClient};
use crate::components::{NoticeLine, PaginationControls};
use crate::config::use_api_config;
use crate::loaders::{ListLoader, LIST_LOADING_TEXT};
use crate::models::Review;

const CONTAINER_STYLE: &str = "padding: 20px; max-width: 800px; margin: 0 auto;";
const HEADER_CELL_STYLE: &str = "padding: 12px; text-align: left; border-bottom: 2px solid #ddd; font-weight: bold;";
const LINK_STYLE: &str = "background-color: #007bff; color: white; padding: 6px 12px; text-decoration: none; border-radius: 4px; font-size: 14px;";

/// Detail route for a review, with the id encoded as one path segment
pub fn detail_path(document_id: &str) -> String {
    format!("/review/{}", encode_segment(document_id))
}

#[component]
fn ReviewRow(review: Review) -> impl IntoView {
    let author = review.author_name().to_string();
    let href = detail_path(&review.document_id);

    view! {
        <tr style="border-bottom: 1px solid #eee;">
            <td style="padding: 12px;">{review.title}</td>
            <td style="padding: 12px;">{author}</td>
            <td style="padding: 12px; text-align: center;">
                <a href=href style=LINK_STYLE>"View Details"</a>
            </td>
        </tr>
    }
}

#[component]
fn ReviewTable(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <table style="width: 100%; border-collapse: collapse; margin-top: 20px;">
            <thead>
                <tr style="background-color: #f5f5f5;">
                    <th style=HEADER_CELL_STYLE>"Title"</th>
                    <th style=HEADER_CELL_STYLE>"Author"</th>
                    <th style="padding: 12px; text-align: center; border-bottom: 2px solid #ddd; font-weight: bold;">"Action"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || reviews.clone()
                    key=|review| review.document_id.clone()
                    children=move |review| view! { <ReviewRow review=review /> }
                />
            </tbody>
        </table>
    }
}

/// Paginated review list (mounted at `/`)
#[component]
pub fn ReviewList() -> impl IntoView {
    let loader = ListLoader::new(Rc::new(ApiClient::new(use_api_config())));
    let state = loader.state();
    // Always starts at page 1 on mount
    let (page, set_page) = signal(1u32);

    // Fetch whenever the requested page changes
    Effect::new(move |_| {
        let requested = page.get();
        let loader = loader.clone();
        spawn_local(async move {
            loader.load(requested).await;
        });
    });

    let on_page_change = Callback::new(move |new_page: u32| set_page.set(new_page));

    view! {
        <div class="review-list" style=CONTAINER_STYLE>
            <h2>"Reviews"</h2>
            {move || match state.get().into_content(LIST_LOADING_TEXT) {
                Ok(loaded) => {
                    let meta = loaded.pagination();
                    view! {
                        <ReviewTable reviews=loaded.data />
                        <PaginationControls meta=meta on_change=on_page_change />
                    }
                    .into_any()
                }
                Err(notice) => view! { <NoticeLine notice=notice /> }.into_any(),
            }}
        </div>
    }
}
