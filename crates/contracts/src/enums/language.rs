use serde::{Deserialize, Serialize};

/// Языки интерфейса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
    Hi,
}

impl Language {
    /// Код языка (передаётся в relay как `lang`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::Hi => "hi",
        }
    }

    /// Название языка для промпта модели
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Turkish",
            Language::Hi => "Hindi",
        }
    }

    /// Все поддерживаемые языки в порядке переключателя
    pub fn all() -> Vec<Language> {
        vec![Language::En, Language::Tr, Language::Hi]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "tr" => Some(Language::Tr),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code(" TR "), Some(Language::Tr));
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
