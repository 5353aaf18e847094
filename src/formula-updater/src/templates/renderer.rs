//! Template renderer.

use crate::formula::Formula;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (titles and markdown bodies are plain text)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders the text attached to a formula update.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the PR title.
    ///
    /// # Errors
    ///
    /// Returns an error if the format references unknown variables or the
    /// archive URL cannot be derived.
    pub fn render_pr_title(&self, formula: &Formula) -> Result<String, super::TemplateError> {
        self.render(&formula.pr_title_format, formula)
    }

    /// Renders the commit message.
    ///
    /// # Errors
    ///
    /// See [`TemplateRenderer::render_pr_title`].
    pub fn render_commit_title(&self, formula: &Formula) -> Result<String, super::TemplateError> {
        self.render(&formula.commit_title_format, formula)
    }

    /// Renders the PR body.
    ///
    /// # Errors
    ///
    /// See [`TemplateRenderer::render_pr_title`].
    pub fn render_pr_body(&self, formula: &Formula) -> Result<String, super::TemplateError> {
        self.render(&formula.pr_body, formula)
    }

    fn render(&self, template: &str, formula: &Formula) -> Result<String, super::TemplateError> {
        let data = template_data(formula)?;
        Ok(self.handlebars.render_template(template, &data)?)
    }
}

/// Variables available to every template.
fn template_data(formula: &Formula) -> Result<Value, crate::formula::FormulaError> {
    Ok(json!({
        "name": formula.short_name(),
        "full_name": formula.name,
        "version": formula.version,
        "branch": formula.branch_name(),
        "archive_url": formula.archive_url()?,
        "checksum": formula.checksum.to_string(),
    }))
}
