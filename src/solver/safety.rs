use crate::infra::Point;
use crate::state::Bomb;

/// Blast tuning. The radius used to be a buried constant; keeping it here
/// makes replays and tests reproducible with a different reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlastConfig {
    pub blast_radius: i32,
}

impl Default for BlastConfig {
    fn default() -> Self {
        Self { blast_radius: 6 }
    }
}

/// The bomb threatening a queried point: its remaining fuse and the
/// axis-aligned distance from the point to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub ticks_left: i32,
    pub steps_from_bomb: i32,
}

/// Classify `point` for the current tick. `None` means safe.
///
/// Only the first bomb in list order that can reach the point is reported;
/// overlapping threats are not aggregated.
pub fn threat_at(point: &Point, bombs: &[Bomb], config: &BlastConfig) -> Option<Threat> {
    let bomb = bombs
        .iter()
        .find(|bomb| bomb.threatens(point, config.blast_radius))?;

    let steps_from_bomb = if bomb.position.x == point.x {
        (bomb.position.y - point.y).abs()
    } else {
        (bomb.position.x - point.x).abs()
    };

    Some(Threat {
        ticks_left: bomb.ticks,
        steps_from_bomb,
    })
}
