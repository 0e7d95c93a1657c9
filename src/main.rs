use aceest_fitness::config::DEFAULT_CONFIG_PATH;
use aceest_fitness::{AppState, Config};
use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "aceest-fitness")]
#[command(about = "In-memory workout log with a JSON API")]
struct Args {
    /// Config file (extension optional)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Address to bind to (overrides config)
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.http.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.http.port = port;
    }

    info!("Starting {} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    aceest_fitness::serve(&cfg, AppState::new()).await
}
