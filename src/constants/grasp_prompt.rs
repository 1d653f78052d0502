pub const GRASP_CHECK_SYSTEM_PROMPT: &str = "You are a question setter whose objective is to test a learner's overall understanding of a topic, not specifics. Keep every question short, answerable from the provided material, and free of trick phrasing.";

/// Builds the grasp-check user prompt from the last plan's rationale,
/// expected outcome, and resource list.
pub fn build_grasp_prompt(reason: &str, outcome: &str, resources: &[String]) -> String {
    let resource_lines = resources
        .iter()
        .map(|resource| format!("- {}", resource))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a helpful AI tutor. The user is learning because:
{reason}

Their desired outcome is:
{outcome}

They have these resources:
{resource_lines}

Please generate 5 to 10 short questions that the user could answer after studying these materials, to check their overall understanding.
Return only the list of questions, one per line."#
    )
}
