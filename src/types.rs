//! Core value types shared by blocks, edges and the board.

use std::fmt;
use std::ops::{Add, Sub};
use uuid::Uuid;

/// Unique identifier for blocks.
///
/// Random v4 UUIDs; collisions are possible in principle but negligible in practice.
pub type BlockId = Uuid;

/// An immutable 2D coordinate in model or viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `to`, i.e. `(to.x - self.x, to.y - self.y)`.
    pub fn delta_to(self, to: Point) -> Point {
        Point::new(to.x - self.x, to.y - self.y)
    }

    /// Manhattan (taxicab) distance between two points.
    pub fn manhattan(self, other: Point) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Point> for egui::Pos2 {
    fn from(p: Point) -> Self {
        egui::pos2(p.x, p.y)
    }
}

impl From<egui::Pos2> for Point {
    fn from(p: egui::Pos2) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<egui::Vec2> for Point {
    fn from(v: egui::Vec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "location is {}, {}", self.x, self.y)
    }
}

/// Identity of a directed edge: the source block id followed by the destination block id.
///
/// `EdgeId::new(a, b)` and `EdgeId::new(b, a)` are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId {
    /// Source block
    pub from: BlockId,
    /// Destination block
    pub to: BlockId,
}

impl EdgeId {
    /// Creates the identity of the edge `from -> to`.
    pub fn new(from: BlockId, to: BlockId) -> Self {
        Self { from, to }
    }

    /// Whether either endpoint of this edge is `block`.
    pub fn touches(&self, block: BlockId) -> bool {
        self.from == block || self.to == block
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.from, self.to)
    }
}
