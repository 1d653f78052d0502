use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

#[cfg(test)]
use mockall::automock;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// The single capability this service needs from an LLM provider: one
/// synchronous system+user completion returning raw text. Both the plan and
/// grasp-check contracts run over this primitive.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

/// OpenAI-compatible chat-completion client (SambaNova endpoint by default).
pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.expose_secret())
            .with_api_base(config.llm_base_url.as_str());

        Self {
            client: Client::with_config(openai_config),
            model: config.llm_model.clone(),
        }
    }
}

#[async_trait]
impl CompletionModel for OpenAiModelService {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::MalformedResponse("model returned an empty completion".to_string())
            })?;

        Ok(content.trim().to_string())
    }
}
