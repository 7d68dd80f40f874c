use crate::error::{Result, ShortforgeError};

/// Environment variable the CLI reads the API key from.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completions endpoint configuration.
///
/// The endpoint and model are overridable (server flags, test stubs); the
/// sampling settings are fixed per request.
#[derive(Debug, Clone)]
pub struct Upstream {
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            api_url: OPENAI_CHAT_COMPLETIONS_URL.to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 900,
        }
    }
}

impl Upstream {
    /// Read the API key from the environment (CLI flow; the server takes the
    /// key from the request payload instead).
    pub fn api_key_from_env() -> Result<String> {
        std::env::var(OPENAI_API_KEY_ENV).map_err(|_| ShortforgeError::MissingApiKey {
            env_var: OPENAI_API_KEY_ENV,
        })
    }
}
