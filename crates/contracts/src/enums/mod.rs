pub mod category;
pub mod language;
pub mod region;

pub use category::Category;
pub use language::Language;
pub use region::Region;
