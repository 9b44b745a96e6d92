use std::sync::Arc;
use std::time::Duration;

use contracts::shared::dataset::{SampleDatasets, SharedDatasets};

use crate::shared::config::Config;
use crate::shared::llm::{CredentialSource, EnvCredential, OpenAiFactory, ProviderFactory};

/// Неизменяемое состояние, общее для всех обработчиков
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialSource>,
    pub providers: Arc<dyn ProviderFactory>,
    pub datasets: SharedDatasets,
    pub llm_timeout: Duration,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            credentials: Arc::new(EnvCredential::new(config.llm.api_key_env.clone())),
            providers: Arc::new(OpenAiFactory::new(config.llm.clone())),
            datasets: Arc::new(SampleDatasets),
            llm_timeout: Duration::from_secs(config.llm.timeout_secs),
        }
    }
}
