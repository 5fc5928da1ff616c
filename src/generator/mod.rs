//! # Generator Module
//!
//! The driver for a generation run. One run is a single linear sequence:
//!
//! ```text
//! GeneratorConfig → validate → render template → write output → done
//! ```
//!
//! There is no branching, no retry, and no state carried between runs.
//! Running twice with the same configuration and template produces a
//! byte-identical output file, so regeneration is always safe.

use std::path::PathBuf;

use tracing::debug;

use crate::error::GenerateError;
use crate::renderer::{render_template, RenderContext};
use crate::writer::write_output;

#[cfg(test)]
mod tests;

/// Default upper bound of the component-count range
pub const DEFAULT_MAX_COMPONENT_COUNT: u32 = 5;

/// Default template artifact name, co-located under [`DEFAULT_TEMPLATE_DIR`]
pub const DEFAULT_TEMPLATE_NAME: &str = "query_overloads.rs.j2";

/// Default directory the template artifact is loaded from
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Default path the generated file is written to
pub const DEFAULT_OUTPUT_PATH: &str = "output/query_overloads.rs";

/// Configuration for one generation run
///
/// Passed explicitly to [`generate`] rather than read from process-wide
/// state, so tests can run with several counts side by side.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Highest component count to generate overloads for (must be positive)
    pub max_component_count: u32,
    /// Directory the template artifact is loaded from
    pub template_dir: PathBuf,
    /// File name of the template artifact inside `template_dir`
    pub template_name: String,
    /// Path the rendered text is written to (truncated on every run)
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_component_count: DEFAULT_MAX_COMPONENT_COUNT,
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl GeneratorConfig {
    /// Reject configurations that cannot produce a meaningful overload set
    fn validate(&self) -> Result<(), GenerateError> {
        if self.max_component_count == 0 {
            return Err(GenerateError::InvalidConfig(
                "max component count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Run the full generation sequence and return the output path
///
/// # Errors
///
/// Propagates the first failure unrecovered: invalid configuration, a missing
/// or malformed template, a render failure, or a filesystem write failure.
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf, GenerateError> {
    config.validate()?;

    let ctx = RenderContext {
        max_component_count: config.max_component_count,
    };
    debug!(
        template = %config.template_name,
        max_component_count = config.max_component_count,
        "starting generation run"
    );
    let rendered = render_template(&config.template_dir, &config.template_name, &ctx)?;
    write_output(&config.output_path, &rendered)?;
    println!(
        "✅ Generated query overloads (1..={}) → {:?}",
        config.max_component_count, config.output_path
    );
    Ok(config.output_path.clone())
}
