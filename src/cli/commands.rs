use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::{
    generate, GeneratorConfig, DEFAULT_MAX_COMPONENT_COUNT, DEFAULT_OUTPUT_PATH,
    DEFAULT_TEMPLATE_DIR, DEFAULT_TEMPLATE_NAME,
};

/// Command-line interface for the query-overload generator
#[derive(Parser)]
#[command(name = "query-overload-gen")]
#[command(about = "Generates the query-overload source file for the ECS query API", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the overload template and write the generated file
    Generate {
        /// Highest component count to generate overloads for
        #[arg(short, long, default_value_t = DEFAULT_MAX_COMPONENT_COUNT)]
        max_components: u32,

        /// Directory holding the template artifact
        #[arg(long, default_value = DEFAULT_TEMPLATE_DIR)]
        template_dir: PathBuf,

        /// Template file name inside the template directory
        #[arg(long, default_value = DEFAULT_TEMPLATE_NAME)]
        template: String,

        /// Path the generated file is written to (truncated on every run)
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if the configuration is rejected, the template cannot be
/// loaded or rendered, or the output file cannot be written. The first
/// failure aborts the run.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            max_components,
            template_dir,
            template,
            output,
        } => {
            let config = GeneratorConfig {
                max_component_count: *max_components,
                template_dir: template_dir.clone(),
                template_name: template.clone(),
                output_path: output.clone(),
            };
            generate(&config)?;
            Ok(())
        }
    }
}
