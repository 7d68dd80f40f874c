use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortforgeError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: &'static str },

    #[error("{message}")]
    Upstream { message: String },

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("No completion returned")]
    EmptyCompletion,

    #[error("Failed to parse model response: {0}")]
    MalformedCompletion(#[source] serde_json::Error),

    #[error("Model response does not match the blueprint schema: {0}")]
    SchemaViolation(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShortforgeError>;
