//! CLI entry point for site-pages

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-pages")]
#[command(version)]
#[command(about = "Serve or generate the blog and events pages of a marketing site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Read posts and events from a local directory instead of the backend
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the page server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to server.port in _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip in _config.yml)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Generate static pages
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site content
    List {
        /// Type of content to list (post, category, event)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "site_pages=debug,info"
    } else {
        "site_pages=info"
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
        Commands::Server { port, ip } => {
            let site = site_pages::Site::new(&base_dir)?;
            let source = site.source(cli.data.as_deref())?;

            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            site_pages::server::start(&site, source, &ip, port).await?;
        }

        Commands::Generate => {
            let site = site_pages::Site::new(&base_dir)?;
            let source = site.source(cli.data.as_deref())?;
            tracing::info!("Generating static pages...");
            site.generate(source).await?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let site = site_pages::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = site_pages::Site::new(&base_dir)?;
            let source = site.source(cli.data.as_deref())?;
            site_pages::commands::list::run(source, &r#type).await?;
        }

        Commands::Version => {
            println!("site-pages version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
