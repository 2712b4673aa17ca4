//! # Web Server Entry Point
//!
//! ```bash
//! cargo run --bin web_server -- --config config/stego.toml
//! ```

use clap::Parser;
use log::info;

use lsb_stego::common::config::AppConfig;
use lsb_stego::utils::init_logger;
use lsb_stego::web;

/// Command-line arguments for the web server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (TOML format)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load_or_default(args.config.as_deref())?;
    init_logger(config.logging.level_filter());

    let app = web::router(&config);

    let addr = config.server.address.as_str();
    info!("Web server running on http://{}", addr);
    info!("API endpoints: http://{0}/api/encode, http://{0}/api/decode", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
