use std::collections::HashMap;

use crate::infra::Point;
use crate::state::Element;

/// One placed, not-yet-exploded bomb. The list is rebuilt from every snapshot;
/// nothing about a bomb survives the tick it was observed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bomb {
    pub position: Point,
    pub ticks: i32,
}

impl Bomb {
    /// Whether the blast can reach `point` before or at detonation. The blast
    /// front covers the bomb's row and column out to `blast_radius` cells and
    /// effectively grows as the fuse burns down.
    pub fn threatens(&self, point: &Point, blast_radius: i32) -> bool {
        self.position
            .is_on_axis_within(point, blast_radius - self.ticks)
    }
}

/// Immutable decoded board snapshot for one tick.
#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
    cells: HashMap<Point, Element>,
    bomberman: Point,
    bombs: Vec<Bomb>,
}

impl Board {
    /// Decode the single-line wire form: a square board flattened row by row,
    /// side length the square root of the glyph count. Input is assumed
    /// well-formed; the session layer validates before handing it over.
    pub fn decode(encoded: &str) -> Board {
        let glyphs: Vec<char> = encoded.chars().collect();
        let size = (glyphs.len() as f64).sqrt() as usize;
        let rows: Vec<String> = glyphs
            .chunks(size)
            .map(|row| row.iter().collect())
            .collect();
        let borrowed: Vec<&str> = rows.iter().map(String::as_str).collect();
        Board::from_rows(&borrowed)
    }

    pub fn from_rows(rows: &[&str]) -> Board {
        let mut cells = HashMap::new();
        let mut bomberman = Point::new(0, 0);
        let mut bombs = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                let element = Element::from_char(glyph);
                if matches!(element, Element::Bomberman | Element::BombBomberman) {
                    bomberman = point;
                }
                if let Some(ticks) = element.bomb_ticks() {
                    bombs.push(Bomb {
                        position: point,
                        ticks,
                    });
                }
                cells.insert(point, element);
            }
        }

        Board {
            size: rows.len() as i32,
            cells,
            bomberman,
            bombs,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Occupant at `point`. Anything outside the decoded square reads as a
    /// solid wall, so searches never wander off the board.
    pub fn at(&self, point: &Point) -> Element {
        self.cells.get(point).copied().unwrap_or(Element::Wall)
    }

    pub fn bomberman(&self) -> Point {
        self.bomberman
    }

    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    /// True when any four-neighbor of `point` holds `element`.
    pub fn is_near(&self, point: &Point, element: Element) -> bool {
        point
            .neighbors()
            .iter()
            .any(|neighbor| self.at(neighbor) == element)
    }
}
