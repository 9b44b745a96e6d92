pub mod api_utils;
pub mod components;
pub mod format;
pub mod icons;
pub mod insights;
pub mod page_frame;
