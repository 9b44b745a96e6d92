/// Источник API ключа модели. Читается на каждый запрос.
pub trait CredentialSource: Send + Sync {
    /// `None`, если ключ не задан или пуст
    fn api_key(&self) -> Option<String>;
}

/// Ключ из переменной окружения
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_has_no_key() {
        let source = EnvCredential::new("CHAIN_MASTER_TEST_UNSET_KEY");
        assert_eq!(source.api_key(), None);
    }

    #[test]
    fn test_blank_variable_has_no_key() {
        std::env::set_var("CHAIN_MASTER_TEST_BLANK_KEY", "   ");
        let source = EnvCredential::new("CHAIN_MASTER_TEST_BLANK_KEY");
        assert_eq!(source.api_key(), None);
    }

    #[test]
    fn test_present_variable_is_returned() {
        std::env::set_var("CHAIN_MASTER_TEST_SET_KEY", "sk-test");
        let source = EnvCredential::new("CHAIN_MASTER_TEST_SET_KEY");
        assert_eq!(source.api_key().as_deref(), Some("sk-test"));
    }
}
