//! Khana CLI application entry point
//!
//! A terminal browser for Indian recipe videos. Pick a cooking method, a
//! cuisine category and a dish, and khana searches YouTube for matching
//! videos.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! khana
//! khana browse --method airfryer --category snacks
//!
//! # One-shot search for the current facets, or for free text
//! khana search -c dessert -s "Cold Sweets"
//! khana search chole bhature --format json
//!
//! # Watch URLs only, for piping
//! khana -q search -m traditional
//!
//! # Open a result's player
//! khana open dQw4w9WgXcQ
//!
//! # Store the API key
//! khana config set-key AIza...
//! ```
//!
//! # Configuration
//!
//! On first interactive run without an API key, khana prompts for initial
//! setup. Configuration is stored in the user's config directory
//! (`~/.config/khana/config.toml` on Linux); `KHANA_API_KEY` and other
//! `KHANA_*` variables override it.

use khana::{
    KhanaError,
    cli::{Cli, Commands},
    commands,
    config::KhanaConfig,
    logging::{self, LogTarget},
    output::{OutputWriter, StdoutWriter},
};

type Result<T> = std::result::Result<T, KhanaError>;

fn init_logging(command: &Commands, verbose: bool, quiet: bool) {
    let target = match command {
        Commands::Browse { .. } => LogTarget::default_file().unwrap_or(LogTarget::Stderr),
        _ => LogTarget::Stderr,
    };

    if let Err(e) = logging::init(&target, verbose, quiet) {
        // The browser would draw over stderr, so only fall back elsewhere
        if !matches!(command, Commands::Browse { .. }) {
            eprintln!("Warning: could not set up logging: {e}");
        }
        let _ = logging::init(&LogTarget::Stderr, verbose, quiet);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();
    init_logging(&command, cli.verbose, cli.quiet);

    // These work without (or on a broken) configuration
    match &command {
        Commands::Config { command } => return commands::config(command, cli.quiet),
        Commands::Completions { shell } => {
            commands::completions(*shell);
            return Ok(());
        }
        Commands::Open {
            video_id,
            no_autoplay,
            print,
        } => return commands::open(video_id, !no_autoplay, *print, cli.quiet),
        _ => {}
    }

    let config = match &command {
        Commands::Browse { .. } => KhanaConfig::load_or_setup()?,
        _ => KhanaConfig::load()?,
    };
    let quiet = cli.quiet || config.quiet;

    match command {
        Commands::Browse { method, category } => {
            let selection = commands::resolve_selection(&config, method.as_deref(), category.as_deref(), None)?;
            commands::browse(&config, selection, quiet)
        }
        Commands::Search {
            method,
            category,
            sub,
            query,
            format,
        } => {
            let selection =
                commands::resolve_selection(&config, method.as_deref(), category.as_deref(), sub.as_deref())?;
            commands::search(&config, selection, &query, format, quiet)
        }
        Commands::Facets => {
            commands::facets(&config, quiet);
            Ok(())
        }
        Commands::Config { .. } | Commands::Completions { .. } | Commands::Open { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(&cli) {
        StdoutWriter::new(cli.quiet).error(&e.to_string());
        std::process::exit(1);
    }
}
