//! Ultron CLI - intent parsing for spoken desktop commands

use anyhow::Result;
use clap::{Parser, Subcommand};
use ultron_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "ultron")]
#[command(version)]
#[command(about = "Turn spoken transcripts into desktop-assistant intents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose output (show matched category and debug info)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one utterance
    Parse {
        /// The transcript text (multiple words are joined)
        #[arg(required = true)]
        text: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also show the action a dispatcher would take
        #[arg(long)]
        plan: bool,
    },

    /// Read transcripts from stdin, one per line, and print JSON results
    Listen {
        /// Include the planned action in each line
        #[arg(long)]
        plan: bool,
    },

    /// Run the labeled corpus and report accuracy
    Eval {
        /// Path to a corpus TOML file (defaults to the built-in corpus)
        #[arg(long)]
        corpus: Option<String>,

        /// List every failing case
        #[arg(long)]
        show_failures: bool,
    },

    /// Time the matcher cascade over the corpus
    Bench {
        /// Number of passes over the corpus
        #[arg(short, long, default_value = "100")]
        iterations: u32,
    },

    /// Print the built-in alias tables
    Aliases {
        /// Which table: sites, apps or domains (all when omitted)
        table: Option<String>,
    },

    /// Print the URL a site search would open
    SearchUrl {
        /// Site name, domain or URL
        site: String,

        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,

        /// Use a Google site: search instead of the site's own search page
        #[arg(long)]
        google: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Set the default weather city
    SetCity {
        /// City name (multiple words are joined)
        #[arg(required = true)]
        city: Vec<String>,
    },

    /// Set the fuzzy alias cutoff (0 < cutoff <= 1)
    SetCutoff {
        cutoff: f32,
    },

    /// Set the preferred browser
    SetBrowser {
        /// default, chrome, edge, firefox, brave or opera
        name: String,
    },

    /// Remember an audio output device name
    AddOutput {
        /// Device name as the system shows it
        #[arg(required = true)]
        name: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Parse { text, json, plan } => {
            let config = Config::load(config_path)?;
            commands::parse::run(&config, &text.join(" "), json, plan)
        }

        Commands::Listen { plan } => {
            let config = Config::load(config_path)?;
            commands::listen::run(&config, plan)
        }

        Commands::Eval {
            corpus,
            show_failures,
        } => {
            let config = Config::load(config_path)?;
            commands::eval::run(&config, corpus.as_deref(), show_failures)
        }

        Commands::Bench { iterations } => {
            let config = Config::load(config_path)?;
            commands::bench::run(&config, iterations)
        }

        Commands::Aliases { table } => commands::aliases::run(table.as_deref()),

        Commands::SearchUrl {
            site,
            query,
            google,
        } => commands::search_url::run(&site, &query.join(" "), !google),

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = Config::load(config_path)?;
                commands::config::show(&config)
            }
            ConfigAction::Path => commands::config::show_path(config_path),
            ConfigAction::Init { force } => commands::config::init(config_path, force),
            ConfigAction::SetCity { city } => commands::config::set_city(config_path, &city.join(" ")),
            ConfigAction::SetCutoff { cutoff } => commands::config::set_cutoff(config_path, cutoff),
            ConfigAction::SetBrowser { name } => commands::config::set_browser(config_path, &name),
            ConfigAction::AddOutput { name } => commands::config::add_output(config_path, &name.join(" ")),
        },
    }
}
