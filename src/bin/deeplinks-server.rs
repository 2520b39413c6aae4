use anyhow::Result;
use axum::Server;
use clap::Parser;
use deeplinks::config::{validate_base, Config};
use deeplinks::http::HttpServer;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP API that turns link requests into wallet deeplinks", long_about = None)]
struct Args {
    /// Host address to bind to (defaults to 127.0.0.1)
    #[arg(long, env = "HTTP_HOST")]
    host: Option<String>,

    /// Port to listen on (defaults to 3000)
    #[arg(long, env = "HTTP_PORT")]
    port: Option<u16>,

    /// Base of the app-link host (dapp, buy, send)
    #[arg(long, env = "DEEPLINK_APP_LINK_BASE")]
    app_link_base: Option<String>,

    /// Base of the universal-link host (sell, swap, home)
    #[arg(long, env = "DEEPLINK_UNIVERSAL_LINK_BASE")]
    universal_link_base: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // Setup logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.http_host = host;
    }
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(base) = args.app_link_base {
        validate_base("--app-link-base", &base)?;
        config.app_link_base = base;
    }
    if let Some(base) = args.universal_link_base {
        validate_base("--universal-link-base", &base)?;
        config.universal_link_base = base;
    }

    let addr: SocketAddr = format!("{}:{}", config.http_host, config.http_port).parse()?;
    let endpoints = config.endpoints();
    info!(
        app_link = endpoints.app_link(),
        universal_link = endpoints.universal_link(),
        "Using deeplink endpoints"
    );

    let app = HttpServer::new(endpoints).router();

    info!("Starting HTTP server on http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(async {
            if signal::ctrl_c().await.is_ok() {
                info!("Received shutdown signal");
            }
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
