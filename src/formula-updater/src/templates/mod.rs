//! Rendering of PR titles, bodies and commit messages using Handlebars.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};
