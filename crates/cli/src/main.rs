//! # Resolvd
//!
//! HTTP API for live DNS resolution and WHOIS referral-chain lookups.

use clap::Parser;
use resolvd_domain::CliOverrides;
use std::net::SocketAddr;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "resolvd")]
#[command(version)]
#[command(about = "DNS and WHOIS lookup API server")]
struct Cli {
    /// Server host
    #[arg(long)]
    host: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// DNS query timeout in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Upstream DNS server address (ip:port)
    #[arg(long = "dns-server")]
    dns_server: Option<String>,

    /// Append logs to this file instead of stdout
    #[arg(long)]
    log_file: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        host: cli.host,
        port: cli.port,
        query_timeout_ms: cli.timeout,
        upstream: cli.dns_server,
        log_file: cli.log_file,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config)?;

    let state = di::build_state(&config)?;
    let app = di::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
