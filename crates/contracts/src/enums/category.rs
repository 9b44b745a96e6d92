use crate::shared::i18n::TextKey;
use serde::{Deserialize, Serialize};

/// Категории закупок
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RawMaterial,
    Components,
    Packaging,
    Mro,
}

impl Category {
    /// Ключ перевода для подписи категории
    pub fn label_key(&self) -> TextKey {
        match self {
            Category::RawMaterial => TextKey::RawMaterial,
            Category::Components => TextKey::ComponentsCat,
            Category::Packaging => TextKey::PackagingCat,
            Category::Mro => TextKey::MroCat,
        }
    }

    pub fn all() -> Vec<Category> {
        vec![
            Category::RawMaterial,
            Category::Components,
            Category::Packaging,
            Category::Mro,
        ]
    }
}
