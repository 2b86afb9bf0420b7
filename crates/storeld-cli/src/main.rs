mod clipboard;
mod commands;
mod session;

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use storeld_core::Locale;
use storeld_extract::DEFAULT_RULES;
use tracing_subscriber::EnvFilter;

use crate::session::Generator;

#[derive(Debug, Parser)]
#[command(name = "storeld")]
#[command(about = "Generate bilingual schema.org Store JSON-LD for the storefront theme")]
struct Cli {
    /// Store profile YAML; overrides `STORELD_PROFILE_PATH`
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the Liquid JSON-LD snippet from pasted sheet text
    Generate {
        /// File holding the pasted text (stdin when omitted or `-`)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Write the snippet here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Also place the snippet on the clipboard via the terminal
        #[arg(long)]
        copy: bool,
    },
    /// Show which fields the pasted text provides
    Extract {
        /// File holding the pasted text (stdin when omitted or `-`)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Report only this locale's values (`en` or `fr`)
        #[arg(long)]
        locale: Option<Locale>,
    },
    /// Print the active store profile as YAML
    Defaults,
}

fn main() -> anyhow::Result<()> {
    let mut config = storeld_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.profile.is_some() {
        config.profile_path = cli.profile;
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let profile = config
        .store_profile()
        .context("failed to load store profile")?;
    tracing::debug!(profile = ?config.profile_path, "configuration loaded");
    let generator = Generator::new(profile, &DEFAULT_RULES, config.max_input_bytes)?;

    match command {
        Commands::Generate {
            input,
            output,
            copy,
        } => commands::run_generate(&generator, input.as_deref(), output.as_deref(), copy),
        Commands::Extract { input, locale } => {
            commands::run_extract(&generator, input.as_deref(), locale)
        }
        Commands::Defaults => commands::run_defaults(&generator),
    }
}
