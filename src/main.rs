//! sbom-viewer: SBOM format detection, validation and inspection tool
//!
//! Recognizes CycloneDX and SPDX JSON documents, validates their structure
//! and renders them, falling back to an inferred schema for anything else.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_viewer::{
    cli::{self, CommandContext},
    config::{self, OutputFormat, Validatable, ViewerConfig},
    pipeline::exit_codes,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported SBOM Formats:",
        "\n  CycloneDX: 1.6, 1.7 (JSON)",
        "\n  SPDX:      2.2 (JSON)",
        "\n\nInput Extensions:",
        "\n  // and /* */ comments, trailing commas",
        "\n\nOutput Formats:",
        "\n  text, json"
    )
}

#[derive(Parser)]
#[command(name = "sbom-viewer")]
#[command(version, long_version = build_long_version())]
#[command(about = "Detect, validate and inspect SBOM documents", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Document recognized, supported and valid
    1  Document unrecognized, unsupported or invalid
    3  Error occurred

EXAMPLES:
    # Identify a batch of files
    sbom-viewer detect sboms/*.json

    # Check required fields before uploading
    sbom-viewer validate bom.cdx.json

    # Summarize a document as JSON
    sbom-viewer view bom.spdx.json -o json

    # Infer the schema of any JSON document
    sbom-viewer schema unknown.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "SBOM_VIEWER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output options shared by document commands
#[derive(clap::Args)]
struct OutputArgs {
    /// Output format (defaults to the config file setting, then text)
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the format and version of one or more SBOM files
    Detect {
        /// SBOM files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check an SBOM for missing or malformed required fields
    Validate {
        /// SBOM file to validate
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Summarize a single SBOM
    View {
        /// SBOM file to view
        file: PathBuf,

        /// Maximum components or packages to list
        #[arg(long)]
        max_components: Option<usize>,

        /// Also print the inferred schema
        #[arg(long)]
        schema: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the inferred schema of any JSON document
    Schema {
        /// JSON file to inspect
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List supported SBOM formats and versions
    Formats {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-viewer.yaml in the current directory
    Init,
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl OutputArgs {
    fn apply(&self, overrides: &mut ViewerConfig) {
        if let Some(format) = self.output {
            overrides.output.format = format;
        }
        overrides.output.file.clone_from(&self.output_file);
        overrides.output.pretty = self.pretty;
    }
}

/// Merge file configuration with CLI overrides and validate the result.
fn build_context(cli: &Cli, overrides: &mut ViewerConfig) -> Result<CommandContext> {
    overrides.output.no_color = cli.no_color;
    let (config, loaded_from) =
        ViewerConfig::from_file_with_overrides(cli.config.as_deref(), overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(sbom_viewer::SbomViewerError::config(messages.join("; ")).into());
    }

    Ok(CommandContext::new(config, cli.quiet))
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers
fn run(cli: &Cli) -> Result<i32> {
    let mut overrides = ViewerConfig::default();

    match &cli.command {
        Commands::Detect { files, output } => {
            output.apply(&mut overrides);
            let ctx = build_context(cli, &mut overrides)?;
            cli::run_detect(files, &ctx)
        }

        Commands::Validate { file, output } => {
            output.apply(&mut overrides);
            let ctx = build_context(cli, &mut overrides)?;
            cli::run_validate(file, &ctx)
        }

        Commands::View {
            file,
            max_components,
            schema,
            output,
        } => {
            output.apply(&mut overrides);
            if let Some(max) = max_components {
                overrides.display.max_components = *max;
            }
            overrides.display.show_schema = *schema;
            let ctx = build_context(cli, &mut overrides)?;
            cli::run_view(file, &ctx)
        }

        Commands::Schema { file, output } => {
            output.apply(&mut overrides);
            let ctx = build_context(cli, &mut overrides)?;
            cli::run_schema(file, &ctx)
        }

        Commands::Formats { output } => {
            output.apply(&mut overrides);
            let ctx = build_context(cli, &mut overrides)?;
            cli::run_formats(&ctx)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "sbom-viewer", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config_action(cli, action),
    }
}

fn run_config_action(cli: &Cli, action: &ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("sbom-viewer").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order, git root after cwd):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in &[
                ".sbom-viewer.yaml",
                ".sbom-viewer.yml",
                "sbom-viewer.yaml",
                "sbom-viewer.yml",
            ] {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".sbom-viewer.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
        ConfigAction::Schema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
        }
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_view_args() {
        let cli = Cli::try_parse_from([
            "sbom-viewer",
            "view",
            "bom.json",
            "-o",
            "json",
            "--max-components",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::View {
                file,
                max_components,
                output,
                ..
            } => {
                assert_eq!(file, PathBuf::from("bom.json"));
                assert_eq!(max_components, Some(5));
                assert_eq!(output.output, Some(OutputFormat::Json));
            }
            _ => panic!("Expected view command"),
        }
    }

    #[test]
    fn test_detect_requires_files() {
        assert!(Cli::try_parse_from(["sbom-viewer", "detect"]).is_err());
    }
}
