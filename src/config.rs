use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub llm_api_key: SecretString,
    pub llm_base_url: String,
    pub llm_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            llm_api_key: SecretString::from(
                env::var("LLM_API_KEY")
                    .unwrap_or_else(|_| "dev_api_key_change_in_production".to_string()),
            ),
            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| "https://api.sambanova.ai/v1".to_string()),
            llm_model: env::var("LLM_MODEL")
                .unwrap_or_else(|_| "Meta-Llama-3.1-405B-Instruct".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.llm_api_key.expose_secret() == "dev_api_key_change_in_production" {
            panic!(
                "FATAL: LLM_API_KEY is using default value! Set LLM_API_KEY environment variable."
            );
        }

        if self.llm_base_url.trim().is_empty() {
            panic!("FATAL: LLM_BASE_URL is empty! Set LLM_BASE_URL environment variable.");
        }

        if self.llm_model.trim().is_empty() {
            panic!("FATAL: LLM_MODEL is empty! Set LLM_MODEL environment variable.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_api_key: SecretString::from("test_api_key".to_string()),
            llm_base_url: "http://localhost:9999/v1".to_string(),
            llm_model: "test-model".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
