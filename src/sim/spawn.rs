//! Obstacle pair generation
//!
//! A pair is built from a chosen gap height `h`: the top column covers
//! `[0, h - gap)` and the bottom column covers `[h, floor_line)`. Both start
//! just past the right edge of the playfield.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::geometry::Rect;
use super::state::{Column, ObstaclePair};
use crate::config::GameConfig;

/// Build a pair for a specific gap height.
///
/// Heights are clamped at zero; an empty column never collides.
pub fn pair_at_height(id: u32, config: &GameConfig, gap_height: f32) -> ObstaclePair {
    let x = config.width;
    let top_height = (gap_height - config.gap_size).max(0.0);
    let bottom_height = (config.floor_line() - gap_height).max(0.0);

    ObstaclePair {
        id,
        top: Column::new(Rect::new(x, 0.0, config.obstacle_width, top_height)),
        bottom: Column::new(Rect::new(
            x,
            gap_height,
            config.obstacle_width,
            bottom_height,
        )),
    }
}

/// Build a pair at a gap height picked uniformly from `config.gap_heights`.
///
/// Returns `None` if there are no candidates.
pub fn spawn_pair<R: Rng + ?Sized>(
    id: u32,
    config: &GameConfig,
    rng: &mut R,
) -> Option<ObstaclePair> {
    let gap_height = *config.gap_heights.choose(rng)?;
    Some(pair_at_height(id, config, gap_height))
}
