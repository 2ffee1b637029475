//! Magic Movers HTTP server entry point

use clap::Parser;
use fleet::{FleetConfig, InMemoryFleet, MissingItemPolicy};
use shared::logging;
use tokio::signal;

use webserver::{ServerConfig, WebServer, WebServerResult, config};

const SERVICE: &str = "webserver";

/// Command line arguments, each with an environment fallback
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Magic Movers fleet HTTP server")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "MOVERS_HOST", default_value = config::DEFAULT_HOST)]
    host: String,

    /// Port for the HTTP server
    #[arg(long, env = "MOVERS_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MOVERS_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// What a load does with unknown item ids (skip, reject)
    #[arg(long, env = "MOVERS_MISSING_ITEMS", default_value_t = MissingItemPolicy::Skip)]
    missing_items: MissingItemPolicy,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let server_config = ServerConfig::new(args.host, args.port);
    let bind_address = server_config.bind_address()?;
    let fleet_config = FleetConfig::new().with_missing_items(args.missing_items);

    tracing::info!(
        missing_items = %fleet_config.missing_items,
        "🧙 Fleet configured with in-memory stores"
    );

    let server = WebServer::new(bind_address, InMemoryFleet::in_memory(fleet_config));

    if let Err(err) = server.run(shutdown_signal()).await {
        logging::log_error(SERVICE, "HTTP server", &err);
        return Err(err);
    }

    logging::log_success(SERVICE, "WebServer stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(SERVICE, "Received Ctrl+C signal"),
        Err(err) => {
            // Without a signal handler, keep serving until the process is killed
            logging::log_error(SERVICE, "Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}
