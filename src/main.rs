use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use adoptify::config::Config;
use adoptify::pets::LoadError;
use adoptify::PetMatcher;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer the questionnaire and show the best matches (default if no subcommand)
    Match,
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "adoptify")]
#[command(about = "Match shelter pets to your lifestyle", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and show score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/adoptify/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the shelter data file
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Number of matches to show
    #[arg(short = 'n', long = "top", global = true)]
    top: Option<usize>,

    /// Print matches as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

/// Questionnaire, matching and display
fn run(cli: &Cli, config: &Config) -> Result<()> {
    let data_file = cli.data.clone().unwrap_or_else(|| config.data_file());
    let top_n = cli.top.unwrap_or_else(|| config.top_n());

    let matcher = PetMatcher::from_path(&data_file, config.weights())?;
    tracing::debug!(
        "Loaded {} pets from {}",
        matcher.pets().len(),
        data_file.display()
    );

    let profile = adoptify::questionnaire::run_questionnaire_stdio()?;
    let matches = matcher.find_matches(&profile, top_n);

    if cli.json {
        println!("{}", adoptify::output::format_json(&matches)?);
    } else {
        let use_colors = adoptify::output::should_use_colors();
        println!(
            "{}",
            adoptify::output::format_match_results(&matches, use_colors, cli.verbose)
        );
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Commands::Init { force }) = cli.command {
        if let Err(e) = adoptify::config::init::run_init_wizard_stdio(cli.config.clone(), force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match adoptify::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate weights before asking any questions
    if let Err(errors) = adoptify::scoring::validate_weights(&config.weights()) {
        eprintln!("Weight config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(e) = run(&cli, &config) {
        match e.downcast_ref::<LoadError>() {
            Some(load_error @ LoadError::DataSourceMissing(_)) => {
                println!("Error: {}", load_error);
            }
            _ => println!("An unexpected error occurred: {}", e),
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
