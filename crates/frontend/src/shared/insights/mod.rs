pub mod api;
pub mod panel;

pub use api::{fetch_insight, request_insight};
pub use panel::InsightPanel;
