//! Notice Component

use leptos::prelude::*;

use crate::fetch_state::Notice;

/// Loading / error / not-found line shown in place of a view's content
#[component]
pub fn NoticeLine(notice: Notice) -> impl IntoView {
    if notice.is_error {
        view! { <p class="error" style="color: red;">{notice.text}</p> }.into_any()
    } else {
        view! { <p>{notice.text}</p> }.into_any()
    }
}
