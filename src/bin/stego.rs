//! # Command-Line Entry Point
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin stego -- encode --input photo.jpg --message "meet at noon"
//! cargo run --bin stego -- decode --input stegnoimage-1700000000000.png
//! cargo run --bin stego -- capacity --input photo.jpg
//! ```
//!
//! Encoded images are always written as PNG.

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::{info, LevelFilter};
use std::path::PathBuf;

use lsb_stego::codec::max_message_chars;
use lsb_stego::common::config::AppConfig;
use lsb_stego::common::policy;
use lsb_stego::processing::{embed_file, extract_file, load_pixels};
use lsb_stego::utils::init_logger;

/// Hide text in images, or recover it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message in an image
    Encode(EncodeArgs),
    /// Print the message hidden in an image
    Decode {
        /// Encoded image (PNG)
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Show how much text an image can hold
    Capacity {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(ClapArgs, Debug)]
struct EncodeArgs {
    /// Carrier image (JPEG, PNG, GIF, WebP)
    #[arg(short, long)]
    input: PathBuf,

    /// Message to hide
    #[arg(short, long, conflicts_with = "message_file", required_unless_present = "message_file")]
    message: Option<String>,

    /// Read the message from a file instead
    #[arg(long)]
    message_file: Option<PathBuf>,

    /// Output path, defaults to stegnoimage-<millis>.png
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.logging.level_filter()
    };
    init_logger(level);

    match args.command {
        Command::Encode(encode) => run_encode(encode, &config),
        Command::Decode { input } => {
            let message = extract_file(&input)?;
            println!("{}", message);
            Ok(())
        }
        Command::Capacity { input } => {
            let bytes = std::fs::read(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let pixels = load_pixels(&bytes)?;
            println!(
                "{}x{}: {} bits, up to {} characters",
                pixels.width(),
                pixels.height(),
                pixels.capacity_bits(),
                max_message_chars(&pixels)
            );
            Ok(())
        }
    }
}

fn run_encode(args: EncodeArgs, config: &AppConfig) -> Result<()> {
    let message = match (args.message, args.message_file) {
        (Some(message), _) => message,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("Provide --message or --message-file"),
    };
    policy::check_message(&message, &config.limits)?;

    let output = args
        .output
        .unwrap_or_else(|| default_output(chrono::Utc::now().timestamp_millis()));

    embed_file(&args.input, &message, &output)?;
    info!("Wrote {}", output.display());
    println!("{}", output.display());
    Ok(())
}

/// Download name used by the browser front end: `stegnoimage-<millis>.png`.
fn default_output(millis: i64) -> PathBuf {
    PathBuf::from(format!("stegnoimage-{}.png", millis))
}
