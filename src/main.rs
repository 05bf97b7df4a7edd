use std::net::IpAddr;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sky_weather::{api, config::ServerConfig, service::CelestialBodyService, store::RecordStore};

#[derive(Parser)]
#[command(name = "skyweather")]
#[command(about = "In-memory API for celestial bodies and their weather readings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port for HTTP API (overrides SKYWEATHER_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides SKYWEATHER_HOST)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Start with an empty store instead of the Mars/Titan fixtures
        #[arg(long)]
        no_seed: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "sky_weather=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = if config.seed {
        RecordStore::seeded()
    } else {
        RecordStore::new()
    };
    let service = CelestialBodyService::new(store);
    let app = api::create_router_with_origins(service, config.cors_origins.as_deref());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("SkyWeather server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = ServerConfig::from_env();

    if let Some(Commands::Serve {
        port,
        host,
        no_seed,
    }) = cli.command
    {
        if let Some(port) = port {
            config.port = port;
        }
        if let Some(host) = host {
            config.host = host;
        }
        if no_seed {
            config.seed = false;
        }
    }

    tracing::info!("Starting SkyWeather server on {}", config.bind_addr());
    serve(config).await
}
