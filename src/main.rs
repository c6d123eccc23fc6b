//! bplace-bot - automation client for the bPlace pixel canvas.
//!
//! Main entry point for the CLI.

use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use bplace_client::PaintClient;
use bplace_protocols::bot::BotRegistry;

use crate::bots::ImageBot;
use crate::cli::{Cli, Commands};

mod bots;
mod cli;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let client = Arc::new(PaintClient::with_base_url(
        &cli.base_url,
        cli.session.as_deref(),
    ));

    match cli.command {
        Commands::Session => {
            let session = client.get_session().await;
            println!("{}", serde_json::to_string_pretty(&session)?);
            if !session.success {
                bail!("session lookup failed");
            }
        }
        Commands::Health => {
            let health = client.check_health().await;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
        Commands::Pixel {
            tile_x,
            tile_y,
            x,
            y,
            color,
        } => {
            let outcome = client
                .post_pixel(
                    &serde_json::json!([x, y]),
                    &serde_json::json!([color]),
                    tile_x,
                    tile_y,
                )
                .await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if !outcome.success {
                bail!("paint failed with status {}", outcome.status);
            }
        }
        Commands::Run { bot, plan } => {
            let mut registry = BotRegistry::new();
            registry.register(Arc::new(ImageBot::new(Arc::clone(&client), plan)))?;

            let bot = registry.resolve(&bot)?;
            info!(kind = %bot.kind(), "starting bot: {}", bot.describe());
            let summary = bot.run().await?;
            println!(
                "painted {} pixels across {} tiles ({} failed)",
                summary.painted, summary.tiles_ok, summary.tiles_failed
            );
        }
    }

    Ok(())
}
