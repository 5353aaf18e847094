//! Template rendering error types.

/// Template rendering error.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Formula values could not be derived.
    #[error(transparent)]
    Formula(#[from] crate::formula::FormulaError),
}
