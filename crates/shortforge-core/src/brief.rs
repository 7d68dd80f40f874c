use serde::{Deserialize, Serialize};

use crate::error::{Result, ShortforgeError};

fn default_true() -> bool {
    true
}

/// User-supplied creative parameters for one generation request.
///
/// Wire names are camelCase to match the browser payload. Every string field
/// deserializes to empty when absent so that a missing field is reported by
/// [`Brief::validate`] rather than as a body decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub platform_focus: String,
    #[serde(default = "default_true")]
    pub include_captions: bool,
    #[serde(default = "default_true")]
    pub include_broll: bool,
}

impl Brief {
    /// Check that every required field is present. The API key is checked
    /// first; whitespace-only values count as missing.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("apiKey", &self.api_key),
            ("topic", &self.topic),
            ("audience", &self.audience),
            ("tone", &self.tone),
            ("goal", &self.goal),
            ("duration", &self.duration),
            ("platformFocus", &self.platform_focus),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ShortforgeError::MissingField { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_brief() -> Brief {
        Brief {
            api_key: "sk-test".to_string(),
            topic: "How to double your editing speed".to_string(),
            audience: "Solo content creators".to_string(),
            tone: "Energetic hype".to_string(),
            goal: "Drive channel subscriptions".to_string(),
            duration: "45 seconds".to_string(),
            platform_focus: "YouTube Shorts".to_string(),
            include_captions: true,
            include_broll: true,
        }
    }

    #[test]
    fn complete_brief_validates() {
        assert!(full_brief().validate().is_ok());
    }

    #[test]
    fn toggles_default_to_true() {
        let brief: Brief = serde_json::from_str(
            r#"{"apiKey":"sk-test","topic":"t","audience":"a","tone":"calm","goal":"g","duration":"30 seconds","platformFocus":"TikTok"}"#,
        )
        .unwrap();
        assert!(brief.include_captions);
        assert!(brief.include_broll);
    }

    #[test]
    fn toggles_can_be_disabled() {
        let brief: Brief =
            serde_json::from_str(r#"{"includeCaptions":false,"includeBroll":false}"#).unwrap();
        assert!(!brief.include_captions);
        assert!(!brief.include_broll);
    }

    #[test]
    fn absent_fields_deserialize_as_empty_and_fail_validation() {
        let brief: Brief = serde_json::from_str("{}").unwrap();
        let err = brief.validate().unwrap_err();
        assert!(matches!(err, ShortforgeError::MissingField { field: "apiKey" }));
    }

    #[test]
    fn api_key_is_checked_before_other_fields() {
        let mut brief = full_brief();
        brief.api_key = String::new();
        brief.topic = String::new();
        let err = brief.validate().unwrap_err();
        assert!(matches!(err, ShortforgeError::MissingField { field: "apiKey" }));
    }

    #[test]
    fn whitespace_only_field_counts_as_missing() {
        let mut brief = full_brief();
        brief.audience = "   ".to_string();
        let err = brief.validate().unwrap_err();
        assert!(matches!(err, ShortforgeError::MissingField { field: "audience" }));
    }

    #[test]
    fn missing_field_error_names_the_wire_field() {
        let mut brief = full_brief();
        brief.platform_focus = String::new();
        let err = brief.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: platformFocus");
    }
}
