//! AtlasOG CLI - terminal and web front ends for the personal dashboard

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use atlasog::config::{self, AtlasConfig};
use atlasog::storage::Store;
use atlasog::{render, ui, EntityKind, ProjectStatus, Record};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "atlasog")]
#[command(version)]
#[command(about = "AtlasOG - track investments, homestead projects and ideas")]
#[command(long_about = r#"
AtlasOG keeps three kinds of notes in a local SQLite file:
  • Wealth & Investments (name, amount)
  • Homestead & Lifestyle projects (name, status)
  • Ideas & Research (free text)

Example usage:
  atlasog invest --name "Gold ETF" --amount 2500
  atlasog project --name "Build barn" --status "In Progress"
  atlasog list ideas
  atlasog serve --port 8501
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides atlasog.toml)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter atlasog.toml and create the database
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Record an investment
    Invest {
        /// Investment name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Amount (not validated; negatives are kept)
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,
    },

    /// Record a homestead project
    Project {
        /// Project name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Status, stored exactly as given
        #[arg(short, long, default_value_t = ProjectStatus::default().to_string())]
        status: String,
    },

    /// Save an idea
    Idea {
        /// Idea text (may be empty)
        #[arg(long, default_value = "")]
        content: String,
    },

    /// List every entry of one kind, most recent first
    List {
        /// investments, projects or ideas
        kind: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show entry counts per category
    Stats {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Serve the web dashboard
    Serve {
        /// Address to bind (default 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (default 8501)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn open_store(path: &Path) -> anyhow::Result<Store> {
    config::ensure_db_dir(path)?;
    tracing::debug!("Opening database {:?}", path);
    Ok(Store::open(path)?)
}

fn print_records(kind: EntityKind, records: &[Record], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Table => {
            ui::section(kind);
            if records.is_empty() {
                println!("  {} {}", ui::Icons::EMPTY, ui::muted("Nothing recorded yet."));
            } else {
                println!("{}", ui::records_table(records));
            }
        }
        OutputFormat::Text => {
            ui::section(kind);
            if records.is_empty() {
                println!("  {} {}", ui::Icons::EMPTY, ui::muted("Nothing recorded yet."));
            }
            for record in records {
                ui::record(&render::record_line(record));
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let settings = config::load_config(Some(&config_path))?.unwrap_or_default();
    let database = settings.resolve_database(cli.database.clone());

    match cli.command {
        Commands::Init { force } => {
            let starter = AtlasConfig {
                database: Some(database.to_string_lossy().to_string()),
                ..AtlasConfig::starter()
            };
            config::write_config(&config_path, &starter, force)?;
            let store = open_store(&database)?;

            ui::success(&format!("Wrote {}", config_path.display()));
            ui::info("Database", &database.display().to_string());
            print!("{}", store.stats()?);
        }

        Commands::Invest { name, amount } => {
            let store = open_store(&database)?;
            let id = store.add_investment(&name, amount)?;
            tracing::info!("Added investment #{}", id);
            ui::success("Investment added!");
            print_records(EntityKind::Investment, &store.fetch_all(EntityKind::Investment)?, OutputFormat::Text)?;
        }

        Commands::Project { name, status } => {
            if status.parse::<ProjectStatus>().is_err() {
                ui::warn(&format!("'{}' is not one of the usual statuses; storing it as given", status));
            }
            let store = open_store(&database)?;
            let id = store.add_project(&name, &status)?;
            tracing::info!("Added project #{}", id);
            ui::success("Project added!");
            print_records(EntityKind::Project, &store.fetch_all(EntityKind::Project)?, OutputFormat::Text)?;
        }

        Commands::Idea { content } => {
            let store = open_store(&database)?;
            let id = store.add_idea(&content)?;
            tracing::info!("Added idea #{}", id);
            ui::success("Idea saved!");
            print_records(EntityKind::Idea, &store.fetch_all(EntityKind::Idea)?, OutputFormat::Text)?;
        }

        Commands::List { kind, format } => {
            let kind: EntityKind = kind.parse()?;
            let store = open_store(&database)?;
            print_records(kind, &store.fetch_all(kind)?, format)?;
        }

        Commands::Stats { format } => {
            let store = open_store(&database)?;
            let stats = store.stats()?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                OutputFormat::Table => {
                    ui::header(&format!("AtlasOG Statistics ({})", database.display()));
                    println!("{}", ui::stats_table(&stats));
                }
                OutputFormat::Text => {
                    ui::header(&format!("AtlasOG Statistics ({})", database.display()));
                    for kind in EntityKind::all() {
                        ui::summary_row(kind.title(), &stats.get(*kind).to_string());
                    }
                }
            }
        }

        Commands::Serve { bind, port } => {
            let store = open_store(&database)?;
            let bind = settings.resolve_bind(bind);
            let port = settings.resolve_port(port);

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(atlasog::server::start_server(&bind, port, store))?;
        }
    }

    Ok(())
}
