use std::collections::{HashSet, VecDeque};

use crate::infra::{Direction, Point};

/// A not-yet-expanded search node. `depth` is the move count from the origin
/// along the path that discovered this point, which doubles as the number of
/// ticks until the bot would stand here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub point: Point,
    pub heading: Direction,
    pub depth: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    /// LIFO frontier: dives along one heading before trying the others.
    DepthFirst,
    /// FIFO frontier: the first goal hit is the nearest by move count.
    BreadthFirst,
}

/// Frontier shared by both searches, parameterized by pop order.
pub struct Frontier {
    steps: VecDeque<Step>,
    order: SearchOrder,
}

impl Frontier {
    pub fn new(order: SearchOrder) -> Self {
        Self {
            steps: VecDeque::new(),
            order,
        }
    }

    /// Push the four neighbors of the origin, each tagged with its own heading.
    pub fn seed(&mut self, origin: Point) {
        for direction in Direction::MOVES {
            self.steps.push_back(Step {
                point: origin.shift(direction),
                heading: direction,
                depth: 1,
            });
        }
    }

    /// Push the four neighbors of `step.point`, inheriting its heading.
    pub fn expand(&mut self, step: &Step) {
        for direction in Direction::MOVES {
            self.steps.push_back(Step {
                point: step.point.shift(direction),
                heading: step.heading,
                depth: step.depth + 1,
            });
        }
    }

    pub fn pop(&mut self) -> Option<Step> {
        match self.order {
            SearchOrder::DepthFirst => self.steps.pop_back(),
            SearchOrder::BreadthFirst => self.steps.pop_front(),
        }
    }
}

/// Run a frontier search outward from `start` and return the heading of the
/// first goal node, or `None` when the frontier exhausts.
///
/// Each popped point is expanded at most once. Non-walkable points are skipped
/// outright; points where `is_deadly(point, depth)` holds are dead ends (the
/// blast arrives exactly when the bot would) and are dropped without expansion.
pub fn first_direction<W, D, G>(
    start: Point,
    order: SearchOrder,
    is_walkable: W,
    is_deadly: D,
    is_goal: G,
) -> Option<Direction>
where
    W: Fn(&Point) -> bool,
    D: Fn(&Point, i32) -> bool,
    G: Fn(&Point, i32) -> bool,
{
    let mut visited: HashSet<Point> = HashSet::new();
    let mut frontier = Frontier::new(order);
    frontier.seed(start);

    while let Some(step) = frontier.pop() {
        if !visited.insert(step.point) {
            continue;
        }
        if !is_walkable(&step.point) {
            continue;
        }
        if is_deadly(&step.point, step.depth) {
            continue;
        }
        if is_goal(&step.point, step.depth) {
            return Some(step.heading);
        }
        frontier.expand(&step);
    }

    None
}
