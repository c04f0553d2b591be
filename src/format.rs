//! Result formatting
//!
//! Renders a ranked list as Markdown for terminals or JSON for other tools.

use crate::candidate::Searchable;
use crate::error::SearchError;
use crate::search::RankResult;
use serde::Serialize;

/// Render ranked results as Markdown, bolding the matched title characters
pub fn format_markdown<T: Searchable>(results: &[RankResult<T>], query: &str) -> String {
    let mut md = String::new();
    md.push_str(&format!(
        "# Search Results · {} settings for '{}'\n\n",
        results.len(),
        query
    ));

    for result in results {
        md.push_str(&format_entry(result));
        md.push_str("\n---\n\n");
    }

    md
}

fn format_entry<T: Searchable>(result: &RankResult<T>) -> String {
    let candidate = &result.candidate;
    let mut entry = String::new();

    let heading = match candidate.title() {
        Some(title) => highlight(title, &result.field_scores.title.matched_positions),
        None => candidate.item_name().to_string(),
    };
    entry.push_str(&format!("## {}\n\n", heading));
    entry.push_str(&format!(
        "`{}` · score {:.3}\n\n",
        candidate.path(),
        result.total_score
    ));

    if let Some(description) = candidate.description().filter(|d| !d.is_empty()) {
        entry.push_str(&format!("> {}\n", description));
    }

    entry
}

/// Wrap runs of matched char positions in `**`.
///
/// Positions index the lowercased text, so they are only trusted when
/// lowercasing kept the char count.
fn highlight(text: &str, positions: &[usize]) -> String {
    let chars: Vec<char> = text.chars().collect();
    if positions.is_empty() || text.to_lowercase().chars().count() != chars.len() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + positions.len() * 4);
    let mut matched = positions.iter().peekable();
    let mut in_run = false;

    for (i, ch) in chars.iter().enumerate() {
        let is_match = matched.peek() == Some(&&i);
        if is_match {
            matched.next();
        }
        if is_match != in_run {
            out.push_str("**");
            in_run = is_match;
        }
        out.push(*ch);
    }
    if in_run {
        out.push_str("**");
    }

    out
}

#[derive(Serialize)]
struct JsonEntry<'a, T> {
    path: &'a str,
    #[serde(flatten)]
    result: &'a RankResult<T>,
}

/// Render ranked results as pretty JSON
pub fn format_json<T>(results: &[RankResult<T>]) -> Result<String, SearchError>
where
    T: Searchable + Serialize,
{
    let entries: Vec<JsonEntry<'_, T>> = results
        .iter()
        .map(|result| JsonEntry {
            path: result.candidate.path(),
            result,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Render a failure as a JSON object with a stable `code`.
///
/// Errors that do not carry a [`SearchError`] report `internal_error`.
pub fn format_json_error(error: &anyhow::Error) -> String {
    let code = error
        .downcast_ref::<SearchError>()
        .map_or("internal_error", SearchError::error_code);
    serde_json::json!({
        "error": {
            "code": code,
            "message": format!("{:#}", error),
        }
    })
    .to_string()
}
