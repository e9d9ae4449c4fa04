use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use uavparts_core::ComponentKind;
use uavparts_scraper::SiteId;

mod crawl;

#[derive(Debug, Parser)]
#[command(name = "uavparts")]
#[command(about = "UAV component catalog crawler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl one site for one component kind and emit the records as JSON.
    Crawl {
        /// Catalog site to crawl.
        #[arg(long)]
        site: SiteId,
        /// Component kind to collect.
        #[arg(long)]
        component: ComponentKind,
        /// Write the JSON to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the supported catalog sites.
    Sites,
    /// List the known component kinds.
    Components,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = uavparts_core::load_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Crawl {
            site,
            component,
            out,
        } => crawl::run_crawl(&config, site, component, out.as_deref()).await?,
        Commands::Sites => {
            for site in SiteId::ALL {
                println!("{site}");
            }
        }
        Commands::Components => {
            for kind in ComponentKind::ALL {
                println!("{kind}");
            }
        }
    }

    Ok(())
}
