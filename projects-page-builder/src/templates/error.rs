//! Template handling error types.

/// Template loading and parsing error.
///
/// All variants are fatal: without a usable page template there is
/// nothing to generate.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Failed to read the template file.
    #[error("Failed to read template '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A sentinel marker is missing from the template.
    #[error("Template marker '{marker}' not found. The template must contain both '<!-- PROJECT_ITEMS_PLACEHOLDER -->' and '<!-- END_PROJECT_ITEM_TEMPLATE -->'")]
    MissingMarker { marker: &'static str },
}
