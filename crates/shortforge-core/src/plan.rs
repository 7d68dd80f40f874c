use serde::{Deserialize, Serialize};

use crate::error::{Result, ShortforgeError};

/// Validated structured output describing a short-form video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub title: String,
    pub hook: String,
    pub summary: String,
    pub pacing: String,
    pub beats: Vec<Beat>,
    pub cta: String,
    pub hashtags: Vec<String>,
    pub distribution_tips: Vec<String>,
}

/// One timestamped narration/visual unit within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beat {
    pub timestamp: String,
    pub narration: String,
    pub visual: String,
}

/// Validate an untrusted completion string against the plan schema.
///
/// Two distinct failure modes: text that is not JSON at all is
/// [`ShortforgeError::MalformedCompletion`], JSON of the wrong shape
/// (missing keys, wrong types) is [`ShortforgeError::SchemaViolation`].
/// There is no partial acceptance.
pub fn parse_plan(completion: &str) -> Result<Plan> {
    let value: serde_json::Value =
        serde_json::from_str(completion).map_err(ShortforgeError::MalformedCompletion)?;
    serde_json::from_value(value).map_err(ShortforgeError::SchemaViolation)
}
