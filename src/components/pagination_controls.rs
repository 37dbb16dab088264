//! Pagination Controls Component
//!
//! Previous / summary / Next row under the review table.

use leptos::prelude::*;

use crate::models::PaginationMeta;

fn button_style(enabled: bool) -> &'static str {
    if enabled {
        "padding: 8px 16px; background-color: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer;"
    } else {
        "padding: 8px 16px; background-color: #f5f5f5; color: #999; border: none; border-radius: 4px; cursor: not-allowed;"
    }
}

/// Pagination row
///
/// # Arguments
/// * `meta` - Pagination metadata from the last loaded page
/// * `on_change` - Called with the adjacent page number when a button is activated
#[component]
pub fn PaginationControls(
    meta: PaginationMeta,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    let has_previous = meta.has_previous();
    let has_next = meta.has_next();

    view! {
        <div
            class="pagination"
            style="margin-top: 20px; display: flex; justify-content: center; align-items: center; gap: 10px;"
        >
            <button
                disabled=!has_previous
                style=button_style(has_previous)
                on:click=move |_| {
                    if has_previous {
                        on_change.run(meta.page - 1);
                    }
                }
            >
                "Previous"
            </button>

            <span style="font-size: 14px; color: #666;">{meta.summary()}</span>

            <button
                disabled=!has_next
                style=button_style(has_next)
                on:click=move |_| {
                    if has_next {
                        on_change.run(meta.page + 1);
                    }
                }
            >
                "Next"
            </button>
        </div>
    }
}
