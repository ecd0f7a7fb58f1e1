//! Dealgate REST API Server
//!
//! Run with: cargo run --features server --bin dealgate-server

use dealgate::config::{parse_args, Command, ServerConfig, USAGE};
use dealgate::server::router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealgate=info,tower_http=info".into()),
        )
        .init();

    let parsed = ServerConfig::from_env()
        .and_then(|base| parse_args(std::env::args().skip(1), base));
    let cfg = match parsed {
        Ok(Command::Serve(cfg)) => cfg,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let addr = cfg.addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(version = env!("CARGO_PKG_VERSION"), %addr, "dealgate-server listening");

    if let Err(e) = axum::serve(listener, router()).await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
