pub const PLAN_SYSTEM_PROMPT: &str = r#"You are a smart educational guide agent optimized for producing structured, machine-readable learning plans.

## PRIMARY OBJECTIVE

Help people figure out what to learn next based on their age, educational background, and interests. Be adaptive: if the input is too vague, ask for clarification. If it is clear, produce:

1. A study_workflow - a roadmap of topics and subtopics.
2. A reason why this is the right path for the user.
3. An expected outcome after finishing this learning path.
4. Beginner-friendly resources.

## OUTPUT REQUIREMENTS

- Use simple and clear language.
- Talk directly to the user, never in third person.
- Always respond in strict JSON with no surrounding prose and no markdown code blocks."#;

/// Builds the plan-generation user prompt. Pure string construction so the
/// feedback clause can be asserted without a network call.
pub fn build_plan_prompt(age: i32, background: &str, interest: &str, feedback: Option<&str>) -> String {
    let feedback_note = feedback
        .filter(|f| !f.trim().is_empty())
        .map(|f| format!("\n- Additional Feedback from User: {}", f))
        .unwrap_or_default();

    format!(
        r#"You are an expert curriculum advisor.

### User Profile
- Age: {age}
- Educational Background: {background}
- Interests: {interest}{feedback_note}

### Your Task
Generate a structured learning plan in **strict JSON format only**, without any extra text or markdown.

Your output must include:
1. **study_workflow**: a JSON object
   - Keys: main topics relevant to the user's profile
   - Values: 2-5 subtopics per main topic, written as a list of strings ordered from beginner to advanced
2. **reason**: 3-4 clear sentences explaining why this path fits the user's background and interests. Avoid overly technical or overly vague language. Match the tone to their background.
3. **expected_outcome**: 3-4 sentences describing what the user will *be able to do* by the end. Be specific, realistic, and motivating. Match the tone to their background.
4. **resources**: a list of beginner-friendly materials

### VERY IMPORTANT
- Talk directly to the user, not in third person.
- Do NOT return more than 5 main topics.
- Do NOT return more than 5 subtopics per main topic.
- Do NOT return more than 3 resources.
- Do NOT include explanations outside the JSON.
- Do NOT use markdown code blocks like ```json.
- Only output valid JSON.

### Output Example
{{
    "study_workflow": {{
        "Start with Python": ["Variables and Data Types", "Loops", "Functions", "Error Handling"],
        "Data Structures": ["Lists", "Dictionaries", "Tuples", "Sets"],
        "NumPy": ["Arrays", "Array Operations", "Broadcasting"],
        "Pandas": ["Series and DataFrames", "Filtering and Sorting", "Basic Data Cleaning"],
        "Matplotlib": ["Line Charts", "Bar Charts", "Histograms"]
    }},
    "reason": "Since you are new to programming and interested in data-related topics, this plan starts with Python basics and gradually introduces tools used in real data analysis projects.",
    "expected_outcome": "After completing this plan, you will understand the fundamentals of Python and be able to explore and analyze real-world datasets using tools like Pandas and Matplotlib. You will be able to write small scripts to automate tasks, clean data, and create visual summaries.",
    "resources": [
        "Python for Beginners - YouTube by freeCodeCamp",
        "CS50's Introduction to Computer Science",
        "Kaggle: Python Course"
    ]
}}

### If the user profile is too vague to proceed
Return this JSON instead:
{{
    "follow_up_question": "Ask a specific question to clarify what the user needs"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_plan_prompt_embeds_profile_fields() {
        let prompt = build_plan_prompt(18, "CS student", "ML", None);

        assert!(prompt.contains("- Age: 18"));
        assert!(prompt.contains("- Educational Background: CS student"));
        assert!(prompt.contains("- Interests: ML"));
        assert!(!prompt.contains("Additional Feedback"));
    }

    #[test]
    fn build_plan_prompt_appends_feedback_clause() {
        let without = build_plan_prompt(18, "CS student", "ML", None);
        let with = build_plan_prompt(18, "CS student", "ML", Some("too advanced"));

        assert_ne!(with, without);
        assert!(with.contains("- Additional Feedback from User: too advanced"));
    }

    #[test]
    fn build_plan_prompt_treats_blank_feedback_as_absent() {
        let without = build_plan_prompt(18, "CS student", "ML", None);
        let blank = build_plan_prompt(18, "CS student", "ML", Some("   "));

        assert_eq!(blank, without);
    }

    #[test]
    fn plan_system_prompt_demands_strict_json() {
        assert!(PLAN_SYSTEM_PROMPT.contains("strict JSON"));
        assert!(PLAN_SYSTEM_PROMPT.contains("study_workflow"));
    }
}
