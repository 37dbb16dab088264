//! Site Header Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header" style="padding: 12px 20px; border-bottom: 1px solid #eee;">
            <A href="/">
                <h1 style="margin: 0; font-size: 24px;">"Review Board"</h1>
            </A>
        </header>
    }
}

/// Fallback for paths outside the route table
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div style="padding: 20px; max-width: 800px; margin: 0 auto;">
            <p>"Page not found"</p>
            <A href="/">"Back to reviews"</A>
        </div>
    }
}
