use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

mod neighbor;
mod rib;

use neighbor::NeighborCommands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "GoBGP daemon host", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, help = "GoBGP gRPC port", default_value_t = gobgp_client::DEFAULT_PORT)]
    port: u16,

    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the global RIB with decoded path attributes
    Rib {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// BGP neighbor operations
    #[command(subcommand)]
    Neighbor(NeighborCommands),
}

fn tracing_set(debug: bool) {
    let filter = if debug {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_set(cli.debug);

    let endpoint = format!("http://{}:{}", cli.host, cli.port);
    debug!("using GoBGP endpoint {}", endpoint);

    match cli.command {
        Commands::Rib { json } => rib::show(endpoint, json).await?,
        Commands::Neighbor(command) => neighbor::run(endpoint, command).await?,
    }

    Ok(())
}
