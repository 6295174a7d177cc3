mod safety;

pub use safety::{BlastConfig, Threat, threat_at};

use tracing::debug;

use crate::infra::{Direction, Point, SearchOrder, first_direction};
use crate::state::{Board, Bomb, Element};

pub struct Solver;

impl Solver {
    /// Pick the action for one tick. Recomputed from scratch every call;
    /// nothing is carried over between snapshots.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn decide(board: &Board, config: &BlastConfig) -> Direction {
        let me = board.bomberman();
        let bombs = board.bombs();

        if let Some(threat) = threat_at(&me, bombs, config) {
            debug!(
                "Unsafe at {:?}: fuse {} at {} steps, running",
                me, threat.ticks_left, threat.steps_from_bomb
            );
            return Self::run_away(board, me, bombs, config, threat.ticks_left);
        }

        if board.is_near(&me, Element::DestructibleWall) {
            debug!("Destructible wall adjacent to {:?}, acting in place", me);
            return Direction::Act;
        }

        Self::find_destroyable(board, me, bombs, config)
    }

    /// Depth-first escape: the first heading whose path reaches a cell exactly
    /// `deadline` moves out, skipping cells where a blast lands on arrival.
    /// `Act` when no route clears the blast in time.
    pub fn run_away(
        board: &Board,
        me: Point,
        bombs: &[Bomb],
        config: &BlastConfig,
        deadline: i32,
    ) -> Direction {
        first_direction(
            me,
            SearchOrder::DepthFirst,
            |point| board.at(point) == Element::Space,
            |point, depth| Self::blast_on_arrival(point, depth, bombs, config),
            |_, depth| depth == deadline,
        )
        .unwrap_or(Direction::Act)
    }

    /// Breadth-first seek: the heading toward the nearest empty cell adjacent
    /// to a destructible wall, under the same arrival-timing filter. `Act`
    /// when nothing destructible is reachable.
    pub fn find_destroyable(
        board: &Board,
        me: Point,
        bombs: &[Bomb],
        config: &BlastConfig,
    ) -> Direction {
        first_direction(
            me,
            SearchOrder::BreadthFirst,
            |point| board.at(point) == Element::Space,
            |point, depth| Self::blast_on_arrival(point, depth, bombs, config),
            |point, _| board.is_near(point, Element::DestructibleWall),
        )
        .unwrap_or(Direction::Act)
    }

    /// A cell is a dead end when the bomb threatening it detonates exactly on
    /// the move that would reach it.
    fn blast_on_arrival(
        point: &Point,
        depth: i32,
        bombs: &[Bomb],
        config: &BlastConfig,
    ) -> bool {
        matches!(
            threat_at(point, bombs, config),
            Some(threat) if threat.ticks_left == depth
        )
    }
}
