//! Review Board App
//!
//! Router shell: `/` lists reviews, `/review/:document_id` shows one.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{NotFound, ReviewDetail, ReviewList, SiteHeader};
use crate::config::ApiConfig;

#[component]
pub fn App() -> impl IntoView {
    // Provide API settings to all views
    provide_context(ApiConfig::default());

    view! {
        <Router>
            <div class="App">
                <SiteHeader />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=ReviewList />
                        <Route path=path!("/review/:document_id") view=ReviewDetail />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
