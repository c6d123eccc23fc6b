//! Built-in bot implementations.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use bplace_client::{PaintClient, paint_batches};
use bplace_protocols::bot::{Bot, BotKind};
use bplace_protocols::error::BotError;
use bplace_protocols::types::{PaintBatch, PaintSummary};

/// Paints an image from a precomputed JSON batch plan - an array of
/// `{tileX, tileY, coords, colors}` objects produced by an upstream
/// image-to-batch planner.
pub struct ImageBot {
    client: Arc<PaintClient>,
    plan_path: PathBuf,
}

impl ImageBot {
    pub fn new(client: Arc<PaintClient>, plan_path: PathBuf) -> Self {
        Self { client, plan_path }
    }

    async fn load_plan(&self) -> Result<Vec<PaintBatch>, BotError> {
        let raw = tokio::fs::read_to_string(&self.plan_path).await?;
        serde_json::from_str(&raw).map_err(|e| BotError::InvalidPlan(e.to_string()))
    }
}

#[async_trait]
impl Bot for ImageBot {
    fn kind(&self) -> BotKind {
        BotKind::Image
    }

    fn describe(&self) -> &str {
        "paints an image from a precomputed batch plan"
    }

    async fn run(&self) -> Result<PaintSummary, BotError> {
        let batches = self.load_plan().await?;
        if batches.is_empty() {
            return Err(BotError::InvalidPlan("plan contains no batches".to_string()));
        }
        info!(batches = batches.len(), "image plan loaded");
        let summary = paint_batches(&self.client, &batches, |status| info!("{status}")).await;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn bot_for(plan: &str) -> (tempfile::NamedTempFile, ImageBot) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(plan.as_bytes()).unwrap();
        // Nothing listens on port 1, so runs fail fast without a server.
        let client = Arc::new(PaintClient::with_base_url("http://127.0.0.1:1", None));
        let bot = ImageBot::new(client, file.path().to_path_buf());
        (file, bot)
    }

    #[tokio::test]
    async fn test_load_plan() {
        let (_file, bot) = bot_for(
            r#"[{"tileX": 5, "tileY": 7, "coords": [[1, 2]], "colors": [0]}]"#,
        );
        let batches = bot.load_plan().await.unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].tile_x, 5);
        assert_eq!(batches[0].tile_y, 7);
    }

    #[tokio::test]
    async fn test_invalid_plan_rejected() {
        let (_file, bot) = bot_for("not a plan");
        assert!(matches!(bot.load_plan().await, Err(BotError::InvalidPlan(_))));
    }

    #[tokio::test]
    async fn test_missing_plan_is_io_error() {
        let client = Arc::new(PaintClient::with_base_url("http://127.0.0.1:1", None));
        let bot = ImageBot::new(client, PathBuf::from("/nonexistent/plan.json"));
        assert!(matches!(bot.run().await, Err(BotError::Io(_))));
    }

    #[tokio::test]
    async fn test_empty_plan_rejected() {
        let (_file, bot) = bot_for("[]");
        assert!(matches!(bot.run().await, Err(BotError::InvalidPlan(_))));
    }

    #[tokio::test]
    async fn test_run_reports_unreachable_tiles_as_failed() {
        let (_file, bot) = bot_for(
            r#"[{"tileX": 1, "tileY": 1, "coords": [1, 2], "colors": [0]},
                {"tileX": 2, "tileY": 2, "coords": [3, 4], "colors": [1]}]"#,
        );
        let summary = bot.run().await.unwrap();
        assert_eq!(summary.tiles_ok, 0);
        assert_eq!(summary.tiles_failed, 2);
    }
}
