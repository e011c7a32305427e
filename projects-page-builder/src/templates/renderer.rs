//! Item rendering.
//!
//! Renders one repository into the item template by straight placeholder
//! substitution. The item template is arbitrary HTML, so values that come
//! from the GitHub API are escaped before insertion.

use crate::github::RepositoryMetadata;
use chrono::{DateTime, Utc};

/// Maximum description length, in characters, before truncation.
const DESCRIPTION_LIMIT: usize = 120;

/// Description shown for repositories without one.
const NO_DESCRIPTION: &str = "No description available";

/// Language shown for repositories without a detected language.
const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Renders one repository into the item template.
///
/// Every occurrence of each placeholder is replaced:
/// - `{{PROJECT_URL}}` - repository URL, inserted as-is
/// - `{{PROJECT_NAME}}` - repository name, escaped
/// - `{{PROJECT_DESCRIPTION}}` - description, truncated then escaped
/// - `{{LANGUAGE}}` - primary language, escaped
/// - `{{LANGUAGE_COLOR}}` - display color for the language
/// - `{{STARS}}` / `{{FORKS}}` - counts in decimal
/// - `{{UPDATED_DATE}}` - last update as e.g. "Jan 5, 2024"
#[must_use]
pub fn render_item(item_template: &str, repository: &RepositoryMetadata) -> String {
    let description = repository.description.as_deref().unwrap_or(NO_DESCRIPTION);
    let description = truncate_description(description);
    let language = repository.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE);

    item_template
        .replace("{{PROJECT_URL}}", repository.html_url.as_str())
        .replace("{{PROJECT_NAME}}", &escape_html(&repository.name))
        .replace("{{PROJECT_DESCRIPTION}}", &escape_html(&description))
        .replace("{{LANGUAGE}}", &escape_html(language))
        .replace("{{LANGUAGE_COLOR}}", language_color(language))
        .replace("{{STARS}}", &repository.stargazers_count.to_string())
        .replace("{{FORKS}}", &repository.forks_count.to_string())
        .replace(
            "{{UPDATED_DATE}}",
            &format_updated_date(&repository.updated_at),
        )
}

/// Escapes the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Returns the display color for a language.
///
/// Lookup is case-sensitive. Languages without an entry share the
/// "Unknown" color.
#[must_use]
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#2b7489",
        "Python" => "#3572A5",
        "Java" => "#b07219",
        "C#" => "#239120",
        "C++" => "#f34b7d",
        "C" => "#555555",
        "Go" => "#00ADD8",
        "Rust" => "#dea584",
        "PHP" => "#4F5D95",
        "Ruby" => "#701516",
        "Swift" => "#ffac45",
        "Kotlin" => "#A97BFF",
        "Dart" => "#00B4AB",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "Shell" => "#89e051",
        "PowerShell" => "#012456",
        "Dockerfile" => "#384d54",
        _ => "#cccccc",
    }
}

/// Truncates a description to [`DESCRIPTION_LIMIT`] characters, appending
/// an ellipsis when anything was cut.
fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let truncated: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{truncated}...")
    } else {
        description.to_string()
    }
}

/// Formats the last update time as a short date, e.g. "Jan 5, 2024".
fn format_updated_date(updated_at: &DateTime<Utc>) -> String {
    updated_at.format("%b %-d, %Y").to_string()
}
