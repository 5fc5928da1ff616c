//! # CLI Module
//!
//! Command-line interface for the query-overload generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Render the template and write the generated overload file:
//!
//! ```bash
//! query-overload-gen generate --max-components 5
//! ```
//!
//! Every flag has a default, so a
//! bare `generate` regenerates `output/query_overloads.rs` from
//! `templates/query_overloads.rs.j2` with a maximum count of 5.
//!
//! Options:
//! - `--max-components <N>` - Highest component count to expand (default: 5)
//! - `--template-dir <DIR>` - Directory holding the template artifact
//! - `--template <FILE>` - Template file name inside the directory
//! - `--output <FILE>` - Path of the generated file (truncated on every run)

mod commands;


pub use commands::{run_cli, Cli, Commands};
