use crate::brief::Brief;

/// Fixed system instruction sent with every request.
pub const SYSTEM_PROMPT: &str = r#"You are a short-form video director. Your task is to turn a creative brief into a ready-to-shoot blueprint for a vertical short.

You MUST output ONLY valid JSON matching this exact structure (no markdown, no explanation):
{
  "title": "Punchy video title",
  "hook": "Opening line that grabs attention within the first second",
  "summary": "1-2 sentence summary of the short",
  "pacing": "Overall pacing and rhythm notes",
  "beats": [
    {"timestamp": "0:00-0:03", "narration": "What is said or shown on screen", "visual": "Camera framing, motion, and b-roll direction"}
  ],
  "cta": "Closing call to action",
  "hashtags": ["hashtag1", "hashtag2"],
  "distributionTips": ["tip1", "tip2"]
}

Rules:
- The hook must land within the first second of the video
- Break the full runtime into 5-8 beats with timestamps that cover it end to end
- Narration should be speakable at a natural pace within each beat's window
- Hashtags must not include the leading # character
- Distribution tips should be concrete and platform-aware (3-5 items)
- Output ONLY the JSON, nothing else"#;

/// Render a brief into the user prompt, embedding every field verbatim.
/// Pure function of its input; identical briefs produce identical prompts.
pub fn build_user_prompt(brief: &Brief) -> String {
    let mut prompt = format!(
        "Design a short-form video blueprint from this creative brief:\n\n\
         Topic: {}\n\
         Audience: {}\n\
         Tone: {}\n\
         Goal: {}\n\
         Target runtime: {}\n\
         Platform focus: {}\n",
        brief.topic, brief.audience, brief.tone, brief.goal, brief.duration, brief.platform_focus
    );

    if brief.include_captions {
        prompt.push_str(
            "Mark where kinetic captions should pop to emphasize beats in the visual direction.\n",
        );
    }
    if brief.include_broll {
        prompt.push_str("Suggest b-roll cutaways and transitions in the visual direction.\n");
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> Brief {
        Brief {
            api_key: "sk-test".to_string(),
            topic: "Explain quantum computing with coffee analogies".to_string(),
            audience: "Curious lifelong learners".to_string(),
            tone: "Inspirational mentor".to_string(),
            goal: "Spark viral conversation".to_string(),
            duration: "60 seconds".to_string(),
            platform_focus: "Instagram Reels".to_string(),
            include_captions: true,
            include_broll: true,
        }
    }

    #[test]
    fn embeds_every_field_verbatim() {
        let brief = brief();
        let prompt = build_user_prompt(&brief);
        for value in [
            &brief.topic,
            &brief.audience,
            &brief.tone,
            &brief.goal,
            &brief.duration,
            &brief.platform_focus,
        ] {
            assert!(prompt.contains(value.as_str()), "prompt missing {value}");
        }
    }

    #[test]
    fn prompt_is_deterministic() {
        let brief = brief();
        assert_eq!(build_user_prompt(&brief), build_user_prompt(&brief));
    }

    #[test]
    fn caption_toggle_controls_caption_line() {
        let mut brief = brief();
        assert!(build_user_prompt(&brief).contains("kinetic captions"));
        brief.include_captions = false;
        assert!(!build_user_prompt(&brief).contains("kinetic captions"));
    }

    #[test]
    fn broll_toggle_controls_broll_line() {
        let mut brief = brief();
        assert!(build_user_prompt(&brief).contains("b-roll cutaways"));
        brief.include_broll = false;
        assert!(!build_user_prompt(&brief).contains("b-roll cutaways"));
    }

    #[test]
    fn api_key_never_leaks_into_the_prompt() {
        let brief = brief();
        assert!(!build_user_prompt(&brief).contains("sk-test"));
    }

    #[test]
    fn system_prompt_names_every_plan_key() {
        for key in [
            "title",
            "hook",
            "summary",
            "pacing",
            "beats",
            "timestamp",
            "narration",
            "visual",
            "cta",
            "hashtags",
            "distributionTips",
        ] {
            assert!(SYSTEM_PROMPT.contains(key), "system prompt missing {key}");
        }
    }
}
