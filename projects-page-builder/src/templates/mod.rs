//! Page template handling.
//!
//! The page template is a complete HTML document carrying two sentinel
//! markers. The region between them holds a single example item, the item
//! template, which is rendered once per repository and spliced back in
//! place of the example. Everything outside the markers passes through
//! untouched, markers included, so the output stays a valid template.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{escape_html, language_color, render_item};

use crate::github::RepositoryMetadata;
use std::path::Path;
use tracing::debug;

/// Marker opening the generated region.
pub const START_MARKER: &str = "<!-- PROJECT_ITEMS_PLACEHOLDER -->";

/// Marker closing the generated region.
pub const END_MARKER: &str = "<!-- END_PROJECT_ITEM_TEMPLATE -->";

/// Separator between rendered items, matching the template indentation.
const ITEM_SEPARATOR: &str = "\n        ";

/// A page template split at the sentinel markers.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    text: String,
    /// Byte offset just past the start marker.
    items_start: usize,
    /// Byte offset of the end marker.
    items_end: usize,
}

impl PageTemplate {
    /// Parses template text, locating the sentinel markers.
    ///
    /// The start marker is located first and the end marker is searched
    /// after it, so an end marker that precedes every start marker does
    /// not count.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingMarker`] naming whichever marker
    /// is absent.
    pub fn parse(text: String) -> Result<Self, TemplateError> {
        let start = text.find(START_MARKER).ok_or(TemplateError::MissingMarker {
            marker: START_MARKER,
        })?;
        let items_start = start + START_MARKER.len();

        let items_end = text[items_start..]
            .find(END_MARKER)
            .map(|offset| items_start + offset)
            .ok_or(TemplateError::MissingMarker { marker: END_MARKER })?;

        Ok(Self {
            text,
            items_start,
            items_end,
        })
    }

    /// Reads and parses a template file.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::IoError`] if the file can't be read, plus
    /// the marker errors from [`PageTemplate::parse`].
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        debug!(path = %path.display(), "Loading page template");

        let text = std::fs::read_to_string(path).map_err(|e| TemplateError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(text)
    }

    /// Returns the item template: the example fragment between the
    /// markers, with surrounding whitespace trimmed.
    #[must_use]
    pub fn item_template(&self) -> &str {
        self.text[self.items_start..self.items_end].trim()
    }

    /// Renders the full page for the given repositories, in slice order.
    #[must_use]
    pub fn render_page(&self, repositories: &[RepositoryMetadata]) -> String {
        let item_template = self.item_template();
        let items: Vec<String> = repositories
            .iter()
            .map(|repository| render_item(item_template, repository))
            .collect();

        let mut page = String::with_capacity(self.text.len());
        page.push_str(&self.text[..self.items_start]);
        page.push_str(ITEM_SEPARATOR);
        page.push_str(&items.join(ITEM_SEPARATOR));
        page.push_str(ITEM_SEPARATOR);
        page.push_str(&self.text[self.items_end..]);
        page
    }
}
