//! Template loading and rendering.
//!
//! The template is a runtime-loaded artifact, so rendering goes through
//! [`minijinja`] rather than a compile-time template type. The evaluation
//! environment exposes a fixed, enumerated set of names: the two helpers
//! registered in [`environment`] and the single variable carried by
//! [`RenderContext`]. No other contract is imposed on the template.

use std::fs;
use std::path::Path;

use minijinja::{context, Environment};
use tracing::debug;

use crate::error::GenerateError;
use crate::names::{component_names, prefix_all};

/// Render-time bindings passed to the template
///
/// Kept as an explicit struct so the set of available names is statically
/// enumerable instead of being assembled through ad-hoc registration.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Upper bound of the component-count range the template expands
    pub max_component_count: u32,
}

/// Build the template environment with the two name helpers registered
///
/// Templates call `get_component_names(count)` as a global function and
/// `prefix(prefix_string)` as a filter on a string sequence.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_function("get_component_names", component_names);
    env.add_filter("prefix", |items: Vec<String>, prefix: String| {
        prefix_all(&items, &prefix)
    });
    env
}

/// Load `template_name` from `template_dir` and render it against `ctx`
///
/// # Errors
///
/// Returns [`GenerateError::TemplateNotFound`] if the artifact cannot be read,
/// [`GenerateError::TemplateSyntax`] if it fails to compile, and
/// [`GenerateError::Render`] if evaluation fails. None are retried.
pub fn render_template(
    template_dir: &Path,
    template_name: &str,
    ctx: &RenderContext,
) -> Result<String, GenerateError> {
    let path = template_dir.join(template_name);
    debug!(path = %path.display(), "loading template");
    let source = fs::read_to_string(&path).map_err(|e| GenerateError::TemplateNotFound {
        path: path.clone(),
        source: e,
    })?;

    let mut env = environment();
    env.add_template_owned(template_name.to_string(), source)
        .map_err(|e| GenerateError::TemplateSyntax {
            name: template_name.to_string(),
            source: e,
        })?;
    let template = env
        .get_template(template_name)
        .map_err(|e| GenerateError::TemplateSyntax {
            name: template_name.to_string(),
            source: e,
        })?;

    debug!(max_component_count = ctx.max_component_count, "rendering");
    template
        .render(context! { max_component_count => ctx.max_component_count })
        .map_err(|e| GenerateError::Render {
            name: template_name.to_string(),
            source: e,
        })
}
