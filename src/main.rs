use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

use alt_catalog::catalog::Catalog;
use alt_catalog::config::Config;
use alt_catalog::ingest::{self, normalize, sources};
use alt_catalog::logging;
use alt_catalog::server;
use alt_catalog::sitemap::build_sitemap;

#[derive(Parser)]
#[command(name = "alt_catalog")]
#[command(about = "Open source alternatives directory")]
#[command(version)]
struct Cli {
    /// Path to the site config file
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect alternatives from all external sources and report the yield
    Collect,
    /// Generate the XML sitemap
    Sitemap {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Start the HTTP server (health, contact endpoint, sitemap)
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let mut config = Config::load_from(&cli.config)?;

    match cli.command {
        Commands::Collect => {
            println!("🔄 Collecting from {} sources...", sources::all_sources().len());

            let report = ingest::collect_all(&sources::all_sources()).await;
            let cleaned = ingest::clean(report.alternatives.clone());
            let transformed = normalize::transform(&cleaned);

            let mut catalog = Catalog::seeded();
            let before = catalog.alternatives().len();
            catalog.insert_alternatives(transformed);

            println!("\n📊 Collection results:");
            println!("   Sources succeeded: {}", report.succeeded);
            println!("   Sources failed:    {}", report.failed());
            println!("   Records collected: {}", report.alternatives.len());
            println!("   Records valid:     {}", cleaned.len());
            println!(
                "   Catalog size:      {} ({} before)",
                catalog.alternatives().len(),
                before
            );

            if !report.failures.is_empty() {
                println!("\n⚠️  Failed sources:");
                for failure in &report.failures {
                    println!("   - {}: {}", failure.source, failure.error);
                }
            }
        }
        Commands::Sitemap { out } => {
            let catalog = Catalog::seeded();
            let xml = build_sitemap(&catalog, &config.site.base_url);
            match out {
                Some(path) => {
                    std::fs::write(&path, xml)?;
                    info!(path, "sitemap written");
                    println!("🗺️  Sitemap written to {path}");
                }
                None => println!("{xml}"),
            }
        }
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let catalog = Arc::new(Catalog::seeded());
            server::start_server(catalog, Arc::new(config)).await?;
        }
    }

    Ok(())
}
