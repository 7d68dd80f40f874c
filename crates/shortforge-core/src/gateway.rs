use serde::Deserialize;

use crate::brief::Brief;
use crate::error::{Result, ShortforgeError};
use crate::plan::{Plan, parse_plan};
use crate::prompt::{SYSTEM_PROMPT, build_user_prompt};
use crate::provider::Upstream;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: Option<String>,
}

/// Generate a video blueprint for a brief with a single upstream call.
///
/// Validates the brief first (an invalid brief never reaches the wire), then
/// POSTs one JSON-constrained chat completion authenticated with the brief's
/// own key, and schema-validates the reply. No retries; a failed call is a
/// terminal failure for the request.
pub async fn generate_plan(upstream: &Upstream, brief: &Brief) -> Result<Plan> {
    brief.validate()?;

    let user_prompt = build_user_prompt(brief);

    tracing::debug!(model = %upstream.model, "requesting completion");

    let response = reqwest::Client::new()
        .post(&upstream.api_url)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", brief.api_key))
        .json(&serde_json::json!({
            "model": upstream.model,
            "temperature": upstream.temperature,
            "max_tokens": upstream.max_tokens,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt },
            ],
        }))
        .send()
        .await?;

    if !response.status().is_success() {
        let message = response
            .json::<UpstreamErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .and_then(|detail| detail.message)
            .unwrap_or_else(|| "Upstream request failed".to_string());
        return Err(ShortforgeError::Upstream { message });
    }

    let completion: ChatCompletion = response.json().await?;
    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.is_empty())
        .ok_or(ShortforgeError::EmptyCompletion)?;

    parse_plan(&content)
}
