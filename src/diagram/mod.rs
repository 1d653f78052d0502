//! Pure Mermaid rendering of a study workflow: a strictly linear chain of
//! colored nodes, one per topic, in map order. No I/O, no model calls.

use indexmap::IndexMap;

/// Node fill colors, cycled with `i % PALETTE.len()` so coloring stays
/// deterministic for any topic count.
pub const PALETTE: [&str; 7] = [
    "#f9c74f", "#90be6d", "#f9844a", "#577590", "#277da1", "#ff595e", "#ffd166",
];

const SUBTOPIC_DELIMITER: &str = ", ";

/// Renders the workflow as a fenced ```mermaid block ready for a
/// diagram-capable markdown viewer.
pub fn render(study_workflow: &IndexMap<String, Vec<String>>) -> String {
    let (titles, details) = flatten_workflow(study_workflow);
    render_steps(&titles, &details)
}

/// Flattens the workflow into aligned title and detail sequences; each detail
/// is one topic's subtopics joined by the fixed delimiter.
pub fn flatten_workflow(study_workflow: &IndexMap<String, Vec<String>>) -> (Vec<String>, Vec<String>) {
    let titles = study_workflow.keys().cloned().collect();
    let details = study_workflow
        .values()
        .map(|subtopics| subtopics.join(SUBTOPIC_DELIMITER))
        .collect();

    (titles, details)
}

/// Emits one node per title with its bulleted details, chained with directed
/// edges. Tolerates a detail sequence shorter than the titles by stopping at
/// the details rather than erroring.
pub fn render_steps(titles: &[String], details: &[String]) -> String {
    let mut code = String::from("graph TD;\n");
    let mut previous_step: Option<String> = None;

    for (i, title) in titles.iter().enumerate() {
        let Some(detail) = details.get(i) else {
            break;
        };

        let bullet_points = detail
            .split(',')
            .map(|subtopic| format!("• {}", escape_label(subtopic.trim())))
            .collect::<Vec<_>>()
            .join("<br/>");
        let node_text = format!("<b><u>{}</u></b><br/>{}", escape_label(title), bullet_points);
        code.push_str(&format!("    A{i}[\"{node_text}\"]\n"));

        let color = PALETTE[i % PALETTE.len()];
        code.push_str(&format!(
            "    style A{i} fill:{color},stroke:#333,stroke-width:1.5px;\n"
        ));

        if let Some(previous) = &previous_step {
            code.push_str(&format!("    {previous} --> A{i}\n"));
        }
        previous_step = Some(format!("A{i}"));
    }

    format!("```mermaid\n{code}```")
}

/// Escapes text interpolated into a quoted Mermaid node label so that
/// model-supplied topics cannot break out of the label or inject markup.
fn escape_label(text: &str) -> String {
    text.replace('"', "#quot;")
        .replace('<', "#lt;")
        .replace('>', "#gt;")
}
