//! Rating Bar Component
//!
//! Fixed-width star bar plus the numeric score.

use leptos::prelude::*;

/// Number of glyphs in the bar
pub const RATING_SCALE: i32 = 10;

const FILLED: &str = "★";
const EMPTY: &str = "☆";

/// `rating` filled glyphs followed by `RATING_SCALE - rating` empty ones.
/// Out-of-range ratings are clamped so the bar always has ten glyphs.
pub fn rating_glyphs(rating: i32) -> String {
    let filled = rating.clamp(0, RATING_SCALE) as usize;
    let empty = RATING_SCALE as usize - filled;
    format!("{}{}", FILLED.repeat(filled), EMPTY.repeat(empty))
}

#[component]
pub fn RatingBar(rating: i32) -> impl IntoView {
    view! {
        <div
            class="rating-bar"
            style="margin-bottom: 24px; padding: 12px; background-color: #f8f9fa; border-radius: 4px; display: flex; align-items: center; gap: 12px;"
        >
            <span style="font-size: 18px; font-weight: bold;">"Rating:"</span>
            <span class="rating-stars" style="font-size: 20px; color: #ffc107;">{rating_glyphs(rating)}</span>
            <span style="font-size: 16px; color: #666;">{format!("({}/{})", rating, RATING_SCALE)}</span>
        </div>
    }
}
