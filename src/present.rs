use itertools::Itertools;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::resolver::ResolvedResult;

pub const EMPTY_STATE: &str = "No tokens to create. Add a row above.";

const EXPLANATION_LEAD: &str = "How we got here:";

/// Formats a count with thousands separators, e.g. `12,288`.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string().chars().collect_vec();
    digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",")
}

fn render_card(name: &str, count: usize) -> Vec<String> {
    let count = format_count(count);
    let width = name.width().max(count.len());
    let border = format!("+{}+", "-".repeat(width + 2));

    vec![
        border.clone(),
        format!("| {}{} |", name, " ".repeat(width - name.width())),
        format!("| {}{} |", " ".repeat(width - count.len()), count),
        border,
    ]
}

/// One card per token type, top to bottom in result order.
pub fn render_cards(result: &ResolvedResult) -> String {
    if result.is_empty() {
        return EMPTY_STATE.to_string();
    }

    result
        .entries
        .iter()
        .flat_map(|(name, count)| render_card(name, *count))
        .join("\n")
}

pub fn render_explanation(result: &ResolvedResult) -> Option<String> {
    if result.steps.is_empty() {
        return None;
    }

    Some(format!(
        "{} {}",
        EXPLANATION_LEAD,
        result.steps.iter().join(" ")
    ))
}

/// The full readout: cards, then the explanation when there is one.
///
/// An empty result only shows the empty-state hint.
pub fn render(result: &ResolvedResult) -> String {
    let cards = render_cards(result);
    if result.is_empty() {
        return cards;
    }

    match render_explanation(result) {
        Some(explanation) => format!("{cards}\n\n{explanation}"),
        None => cards,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub name: String,
    pub count: usize,
}

/// A serializable copy of a result, steps already rendered to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub tokens: Vec<TokenCount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
}

impl From<&ResolvedResult> for Report {
    fn from(result: &ResolvedResult) -> Self {
        Self {
            tokens: result
                .entries
                .iter()
                .map(|(name, count)| TokenCount {
                    name: name.clone(),
                    count: *count,
                })
                .collect_vec(),
            steps: result.explanations(),
        }
    }
}
