//! Scoring rubric shown beside each article and in the help overlay.

/// One level of the five-point deficit scoring scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubricLevel {
    /// Score value from 1 to 5.
    pub score: u8,
    /// Short upper-case label.
    pub label: &'static str,
    /// What an article must indicate to earn the score.
    pub description: &'static str,
}

/// Heading for the rubric.
pub const RUBRIC_TITLE: &str = "Scoring Rules (focus on FUTURE fiscal deficit direction)";

/// Reminder printed under the levels.
pub const RUBRIC_FOCUS: &str =
    "Score the PREDICTED FUTURE DIRECTION of the fiscal deficit, not just current levels.";

/// The five scoring levels, lowest first.
pub const RUBRIC_LEVELS: [RubricLevel; 5] = [
    RubricLevel {
        score: 1,
        label: "VERY NEGATIVE",
        description: "Clear indication that fiscal deficit will increase significantly",
    },
    RubricLevel {
        score: 2,
        label: "SOMEWHAT NEGATIVE",
        description: "Any hint that fiscal deficit might increase (even slightly) or stay above \
                      target levels",
    },
    RubricLevel {
        score: 3,
        label: "NEUTRAL",
        description: "No clear prediction about future fiscal deficit, or suggests deficit will \
                      stay at current levels",
    },
    RubricLevel {
        score: 4,
        label: "SOMEWHAT POSITIVE",
        description: "Indication that fiscal deficit will decrease slightly or gradually",
    },
    RubricLevel {
        score: 5,
        label: "VERY POSITIVE",
        description: "Strong indication that fiscal deficit will decrease significantly or move \
                      to a surplus",
    },
];

/// Returns the compact one-line-per-level legend.
#[must_use]
pub fn legend_lines() -> Vec<String> {
    RUBRIC_LEVELS
        .iter()
        .map(|level| format!("  {} = {}", level.score, level.label))
        .collect()
}

/// Returns the full rubric text, one entry per line before wrapping.
#[must_use]
pub fn full_rubric_lines() -> Vec<String> {
    let mut lines = vec![RUBRIC_TITLE.to_owned()];
    lines.extend(RUBRIC_LEVELS.iter().map(|level| {
        format!("  {} = {}: {}", level.score, level.label, level.description)
    }));
    lines.push(RUBRIC_FOCUS.to_owned());
    lines
}
