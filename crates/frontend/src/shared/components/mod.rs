pub mod bar;
pub mod placeholder;
pub mod stat_card;

pub use bar::Bar;
pub use placeholder::PlaceholderPage;
pub use stat_card::{IndicatorStatus, StatCard, ValueFormat};
