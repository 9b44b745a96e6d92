pub mod dataset;
pub mod i18n;
pub mod insight;
pub mod view;
