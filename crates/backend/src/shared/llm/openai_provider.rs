use super::types::{ChatMessage, LlmError, LlmProvider, LlmResponse, ProviderFactory};
use crate::shared::config::LlmConfig;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

/// OpenAI провайдер
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    pub fn new(api_key: String, settings: &LlmConfig) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        // Кастомный endpoint для совместимых API
        if let Some(api_base) = &settings.api_base {
            config = config.with_api_base(api_base);
        }

        Self {
            client: Client::with_config(config),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }

    /// Конвертировать наши сообщения в формат OpenAI
    fn convert_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        messages
            .into_iter()
            .map(|msg| {
                ChatCompletionRequestUserMessageArgs::default()
                    .content(msg.content)
                    .build()
                    .map(ChatCompletionRequestMessage::from)
                    .map_err(|e| LlmError::InvalidRequest(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(self.convert_messages(messages)?)
            .temperature(self.temperature)
            .max_completion_tokens(self.max_tokens)
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("401") || err_str.contains("authentication") {
                LlmError::AuthError(err_str)
            } else if err_str.contains("429") || err_str.contains("rate limit") {
                LlmError::RateLimitExceeded
            } else {
                LlmError::ApiError(err_str)
            }
        })?;

        // Пустой список choices не ошибка: ответ без текста
        let choice = response.choices.first();
        let content = choice
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();
        let finish_reason = choice
            .and_then(|c| c.finish_reason.as_ref())
            .map(|r| format!("{:?}", r));

        Ok(LlmResponse {
            content,
            tokens_used: response.usage.map(|u| u.total_tokens),
            model: response.model,
            finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

/// Фабрика OpenAI провайдеров с настройками из конфигурации
#[derive(Debug, Clone)]
pub struct OpenAiFactory {
    settings: LlmConfig,
}

impl OpenAiFactory {
    pub fn new(settings: LlmConfig) -> Self {
        Self { settings }
    }
}

impl ProviderFactory for OpenAiFactory {
    fn create(&self, api_key: String) -> Box<dyn LlmProvider> {
        Box::new(OpenAiProvider::new(api_key, &self.settings))
    }
}
