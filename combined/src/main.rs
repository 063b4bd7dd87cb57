//! Single entry point that runs either service, picked with `--target`.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use category_service_lib::config::CategoryServiceConfig;
use common::ServiceConfig;
use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "server")]
#[command(about = "Runs the user or category service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server for one service
    Serve {
        /// Which service to run
        #[arg(long, value_enum)]
        target: Target,
        /// Defaults to the target's `*_SERVICE_HOST`, then 0.0.0.0
        #[arg(long)]
        host: Option<String>,
        /// Defaults to the target's `*_SERVICE_PORT`, then 3000 for user, 4000 for category
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    User,
    Category,
}

impl Target {
    /// Listener settings from the target's own environment variables.
    fn server_config(self) -> ServiceConfig {
        match self {
            Target::User => UserServiceConfig::from_env().server,
            Target::Category => CategoryServiceConfig::from_env().server,
        }
    }
}

/// Explicit flags win over the target's environment and defaults.
fn listen_on(host: Option<String>, port: Option<u16>, config: ServiceConfig) -> (String, u16) {
    (host.unwrap_or(config.host), port.unwrap_or(config.port))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { target, host, port } => {
            let (host, port) = listen_on(host, port, target.server_config());
            info!("Running {:?} service on {}:{}", target, host, port);

            match target {
                Target::User => user_service_lib::run_embedded(&host, port).await?,
                Target::Category => category_service_lib::run_embedded(&host, port).await?,
            }
        }
    }

    Ok(())
}
