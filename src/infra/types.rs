use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn shift_up(&self) -> Point {
        Point::new(self.x, self.y - 1)
    }

    pub fn shift_down(&self) -> Point {
        Point::new(self.x, self.y + 1)
    }

    pub fn shift_left(&self) -> Point {
        Point::new(self.x - 1, self.y)
    }

    pub fn shift_right(&self) -> Point {
        Point::new(self.x + 1, self.y)
    }

    pub fn shift(&self, direction: Direction) -> Point {
        match direction {
            Direction::Up => self.shift_up(),
            Direction::Down => self.shift_down(),
            Direction::Left => self.shift_left(),
            Direction::Right => self.shift_right(),
            Direction::Act => *self,
        }
    }

    pub fn neighbors(&self) -> [Point; 4] {
        Direction::MOVES.map(|direction| self.shift(direction))
    }

    /// True when `other` lies on the same row or column within `range` cells.
    /// A negative `range` matches nothing, including the point itself.
    pub fn is_on_axis_within(&self, other: &Point, range: i32) -> bool {
        if range < 0 {
            return false;
        }
        (self.x == other.x && (self.y - other.y).abs() <= range)
            || (self.y == other.y && (self.x - other.x).abs() <= range)
    }
}

/// One action per tick: four moves plus the in-place interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Act,
}

impl Direction {
    /// Fixed seed/expansion order for the frontier searches. Pushing in this
    /// order makes the LIFO walk pop Right, Left, Up, Down and keeps both
    /// searches fully deterministic.
    pub const MOVES: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let word = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Act => "ACT",
        };
        write!(formatter, "{}", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifts_return_new_points() {
        let point = Point::new(3, 7);
        assert_eq!(point.shift_up(), Point::new(3, 6));
        assert_eq!(point.shift_down(), Point::new(3, 8));
        assert_eq!(point.shift_left(), Point::new(2, 7));
        assert_eq!(point.shift_right(), Point::new(4, 7));
        assert_eq!(point, Point::new(3, 7));
    }

    #[test]
    fn test_shift_act_stays_in_place() {
        let point = Point::new(1, 1);
        assert_eq!(point.shift(Direction::Act), point);
    }

    #[test]
    fn test_neighbors_follow_move_order() {
        let point = Point::new(5, 5);
        assert_eq!(
            point.neighbors(),
            [
                Point::new(5, 6),
                Point::new(5, 4),
                Point::new(4, 5),
                Point::new(6, 5),
            ]
        );
    }

    #[test]
    fn test_axis_alignment_same_column() {
        let bomb = Point::new(2, 2);
        assert!(bomb.is_on_axis_within(&Point::new(2, 5), 3));
        assert!(!bomb.is_on_axis_within(&Point::new(2, 6), 3));
    }

    #[test]
    fn test_axis_alignment_same_row() {
        let bomb = Point::new(2, 2);
        assert!(bomb.is_on_axis_within(&Point::new(6, 2), 4));
        assert!(!bomb.is_on_axis_within(&Point::new(7, 2), 4));
    }

    #[test]
    fn test_axis_alignment_rejects_diagonal() {
        let bomb = Point::new(0, 0);
        assert!(!bomb.is_on_axis_within(&Point::new(1, 1), 10));
    }

    #[test]
    fn test_axis_alignment_negative_range_matches_nothing() {
        let point = Point::new(4, 4);
        assert!(point.is_on_axis_within(&point, 0));
        assert!(!point.is_on_axis_within(&point, -1));
    }

    #[test]
    fn test_direction_action_words() {
        assert_eq!(Direction::Up.to_string(), "UP");
        assert_eq!(Direction::Act.to_string(), "ACT");
    }
}
