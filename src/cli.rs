//! CLI definitions for bplace-bot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bplace-bot CLI.
#[derive(Parser)]
#[command(name = "bplace-bot")]
#[command(about = "Automation client for the bPlace pixel canvas")]
#[command(version)]
pub(crate) struct Cli {
    /// Base URL of the bPlace server
    #[arg(long, default_value = "https://bplace.org", global = true)]
    pub base_url: String,

    /// Session cookie header value (also read from BPLACE_SESSION)
    #[arg(long, env = "BPLACE_SESSION", global = true)]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show account/session state
    Session,

    /// Check server health
    Health,

    /// Paint a single pixel on a tile
    Pixel {
        #[arg(long)]
        tile_x: i32,

        #[arg(long)]
        tile_y: i32,

        /// Tile-local x, wrapped into [0, 1000)
        #[arg(long)]
        x: i64,

        /// Tile-local y, wrapped into [0, 1000)
        #[arg(long)]
        y: i64,

        /// Palette color index
        #[arg(long, default_value_t = 0)]
        color: i32,
    },

    /// Run a registered bot against a paint plan
    Run {
        /// Bot type tag (farm, image, guard)
        #[arg(long, default_value = "image")]
        bot: String,

        /// JSON paint plan: an array of {tileX, tileY, coords, colors}
        #[arg(long)]
        plan: PathBuf,
    },
}
