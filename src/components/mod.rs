//! UI Components
//!
//! Leptos views for the review list and detail pages.

mod notice;
mod pagination_controls;
mod rating_bar;
mod review_detail;
mod review_list;
mod rich_text_body;
mod site_header;

pub use notice::NoticeLine;
pub use pagination_controls::PaginationControls;
pub use rating_bar::RatingBar;
pub use review_detail::ReviewDetail;
pub use review_list::ReviewList;
pub use rich_text_body::RichTextBody;
pub use site_header::{NotFound, SiteHeader};
