//! Review Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod fetch_state;
mod loaders;
mod logger;
mod models;
mod rich_text;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    mount_to_body(App);
}
