//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::show::Format;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Content engine for a personal portfolio and blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site with the built-in content
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new article
    New {
        /// Title of the new article
        title: String,

        /// Tags for the article (repeatable)
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (articles, projects, featured, tags, categories)
        #[arg(default_value = "articles")]
        r#type: String,

        /// Case-insensitive text to look for in titles and descriptions
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only items carrying this tag (or project category)
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Render an article
    Show {
        /// Article slug
        slug: String,

        /// Output format (text, json, html)
        #[arg(short, long, default_value = "text")]
        format: Format,
    },

    /// Validate the catalog
    Check,

    /// Start the HTTP API
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, tag } => {
            let site = folio::Folio::new(&base_dir)?;
            let path = folio::commands::new::create_article(&site, &title, &tag)?;
            println!("Created: {:?}", path);
        }

        Commands::List { r#type, query, tag } => {
            let site = folio::Folio::new(&base_dir)?;
            let state = folio::commands::list::filter_state(query, tag);
            folio::commands::list::run(&site, &r#type, &state)?;
        }

        Commands::Show { slug, format } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&site, &slug, format)?;
        }

        Commands::Check => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::check::run(&site)?;
        }

        Commands::Serve { port, ip } => {
            let site = folio::Folio::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio::server::start(&site, &ip, port).await?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
