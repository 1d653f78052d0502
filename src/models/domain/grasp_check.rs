use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Leading bullet or list markers the model tends to prepend despite being
/// asked for plain lines: "- ", "* ", "• ", "1. ", "1) ".
static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[-*•]\s+|\d+[.)]\s+)").expect("BULLET_MARKER is a valid regex pattern")
});

/// Comprehension-check questions derived from a plan's rationale, outcome,
/// and resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraspCheck {
    pub questions: Vec<String>,
}

impl GraspCheck {
    /// Parses a newline-delimited model reply: each non-blank line, after
    /// stripping its bullet marker and surrounding whitespace, becomes one
    /// question. Blank lines are dropped, never an error.
    pub fn parse(raw: &str) -> GraspCheck {
        let questions = raw
            .lines()
            .map(|line| BULLET_MARKER.replace(line.trim(), "").trim().to_string())
            .filter(|question| !question.is_empty())
            .collect();

        GraspCheck { questions }
    }
}
