use crate::plan::Plan;

/// Format the timestamped beat list as plain text.
pub fn format_beat_sheet(plan: &Plan) -> String {
    plan.beats
        .iter()
        .map(|beat| {
            format!(
                "{} — Narration: {}\nVisual: {}",
                beat.timestamp, beat.narration, beat.visual
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format a full plan as human-readable text.
pub fn format_plan_readable(plan: &Plan) -> String {
    let mut output = String::new();

    output.push_str(&format!("Title: {}\n", plan.title));
    output.push_str(&format!("Hook: {}\n", plan.hook));
    output.push_str(&format!("Summary: {}\n", plan.summary));
    output.push_str(&format!("Pacing: {}\n\n", plan.pacing));

    output.push_str("Beats:\n");
    output.push_str(&format_beat_sheet(plan));
    output.push_str("\n\n");

    output.push_str(&format!("CTA: {}\n", plan.cta));
    output.push_str(&format!("Hashtags: {}\n", plan.hashtags.join(", ")));

    output.push_str("Distribution tips:\n");
    for tip in &plan.distribution_tips {
        output.push_str(&format!("- {}\n", tip));
    }

    output
}
