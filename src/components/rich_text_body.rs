//! Rich Text Body Component
//!
//! Renders review body blocks by type. Unknown blocks show their raw JSON.

use leptos::prelude::*;

use crate::rich_text::Block;

fn block_view(block: Block) -> AnyView {
    match block {
        Block::Paragraph { .. } => view! {
            <p style="margin-bottom: 16px; line-height: 1.6;">{block.plain_text()}</p>
        }
        .into_any(),
        Block::Heading { .. } => view! {
            <h3 style="margin-bottom: 12px; margin-top: 24px;">{block.plain_text()}</h3>
        }
        .into_any(),
        Block::Unknown(_) => view! {
            <div class="rich-text-fallback" style="margin-bottom: 16px;">
                {block.raw_json().unwrap_or_default()}
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn RichTextBody(blocks: Vec<Block>) -> impl IntoView {
    view! {
        <div class="review-body" style="line-height: 1.6;">
            {blocks.into_iter().map(block_view).collect_view()}
        </div>
    }
}
