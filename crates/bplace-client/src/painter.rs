//! Sequential batch loop.
//!
//! Iterates paint batches one tile at a time - each submission completes
//! before the next starts, with no pipelining and no retries. Retry and
//! backoff policy belongs to the caller.

use tracing::{info, warn};

use bplace_protocols::types::{PaintBatch, PaintSummary};

use crate::client::PaintClient;

/// Paint every batch in order, invoking `on_progress` with a
/// human-readable status string after each tile succeeds.
///
/// A 403 aborts the loop: the session is dead and every later tile would
/// fail identically. Any other per-tile failure is logged and the loop
/// continues; the summary accounts for both.
pub async fn paint_batches<F>(
    client: &PaintClient,
    batches: &[PaintBatch],
    mut on_progress: F,
) -> PaintSummary
where
    F: FnMut(&str),
{
    let mut summary = PaintSummary::default();
    for (index, batch) in batches.iter().enumerate() {
        let outcome = client
            .post_pixel_batch(batch.tile_x, batch.tile_y, &batch.coords, &batch.colors)
            .await;

        if outcome.status == 403 {
            warn!(
                tile_x = batch.tile_x,
                tile_y = batch.tile_y,
                "session rejected, aborting batch loop"
            );
            summary.tiles_failed += batches.len() - index;
            break;
        }

        if outcome.success {
            summary.painted += outcome.painted;
            summary.tiles_ok += 1;
            info!(
                tile_x = batch.tile_x,
                tile_y = batch.tile_y,
                painted = outcome.painted,
                "tile painted"
            );
            on_progress(&format!(
                "Tile {},{} OK ({} px)",
                batch.tile_x, batch.tile_y, outcome.painted
            ));
        } else {
            warn!(
                tile_x = batch.tile_x,
                tile_y = batch.tile_y,
                status = outcome.status,
                "batch submission failed, continuing"
            );
            summary.tiles_failed += 1;
        }
    }
    summary
}

#[cfg(test)]
#[path = "painter_tests.rs"]
mod tests;
