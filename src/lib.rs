//! # query-overload-gen
//!
//! Generator for the query-overload source file of the ECS query API.
//!
//! Writing `Query` overloads for every component count by hand is a very
//! repetitive (and therefore error-prone) task, so this tool renders them from
//! a template instead. The template is a runtime-loaded Jinja-style artifact;
//! the generated file is committed into the consuming project and compiled by
//! its build, not by this crate.
//!
//! ## Overview
//!
//! ```text
//! GeneratorConfig → Template Rendering (minijinja) → output/query_overloads.rs
//! ```
//!
//! 1. **Names** - Produces the ordered component name sequence (`C1`..`Cn`)
//! 2. **Renderer** - Loads the template and renders it with the name helpers
//! 3. **Writer** - Truncate-writes the rendered text to the output path
//! 4. **Generator** - Wires the above together for a single linear run
//!
//! ## Template contract
//!
//! The template sees exactly three names:
//!
//! - `get_component_names(count)` - global returning `["C1", ..., "C<count>"]`
//! - `prefix(items, prefix_string)` - filter prepending a string to each item
//! - `max_component_count` - the configured maximum, as an integer
//!
//! Nothing else about the template's internal structure is imposed, and the
//! generated text is not validated as source code.
//!
//! ## Usage
//!
//! ```bash
//! query-overload-gen generate --max-components 5
//! ```
//!
//! ```rust,ignore
//! use query_overload_gen::{generate, GeneratorConfig};
//!
//! let path = generate(&GeneratorConfig::default())?;
//! println!("wrote {}", path.display());
//! ```
//!
//! Re-running is idempotent: identical configuration and template produce a
//! byte-identical output file.

pub mod cli;
pub mod error;
pub mod generator;
pub mod names;
pub mod renderer;
pub mod writer;

pub use error::GenerateError;
pub use generator::{generate, GeneratorConfig};
