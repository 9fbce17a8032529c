//! Directed edges between blocks and their routing.

use crate::block::{Block, EdgePoint};
use crate::constants::{ACCENT_COLOR, ARROWHEAD_RADIUS, EDGE_STROKE_WIDTH, HOVER_COLOR};
use crate::surface::Surface;
use crate::types::{BlockId, EdgeId};

/// A directed connection from one block to another.
///
/// Edges only hold the ids of their endpoints; the route is recomputed from the
/// endpoint blocks every time the edge is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// ID of the source block
    pub from: BlockId,
    /// ID of the destination block
    pub to: BlockId,
}

impl Edge {
    /// Creates a new edge between two blocks.
    pub fn new(from: BlockId, to: BlockId) -> Self {
        Self { from, to }
    }

    /// Identity of this edge.
    pub fn id(&self) -> EdgeId {
        EdgeId::new(self.from, self.to)
    }

    /// Whether this edge starts or ends at `block`.
    pub fn touches(&self, block: BlockId) -> bool {
        self.id().touches(block)
    }

    /// Draws the curve from `from` to `to` plus the arrowhead at the destination.
    ///
    /// `from` and `to` must be the blocks this edge references.
    pub fn draw(&self, surface: &mut dyn Surface, from: &Block, to: &Block) {
        debug_assert!(from.id == self.from && to.id == self.to);
        let (start, end) = nearest_connection_pair(from, to);

        surface.set_stroke_color(HOVER_COLOR);
        surface.set_line_width(EDGE_STROKE_WIDTH);
        surface.stroke_bezier(
            start.location,
            start.control_point,
            end.control_point,
            end.location,
        );

        surface.set_fill_color(ACCENT_COLOR);
        surface.fill_circle(end.location, ARROWHEAD_RADIUS);
    }
}

/// Picks the pair of connection points, one per block, whose anchors are closest
/// by Manhattan distance.
///
/// All 16 combinations are considered in top, bottom, left, right order for both
/// blocks; on ties the first minimal pair wins.
pub fn nearest_connection_pair(from: &Block, to: &Block) -> (EdgePoint, EdgePoint) {
    let from_points = from.connection_points();
    let to_points = to.connection_points();

    let mut best = (from_points.top, to_points.top);
    let mut best_distance = f32::INFINITY;
    for ef in from_points.iter() {
        for et in to_points.iter() {
            let distance = ef.location.manhattan(et.location);
            if distance < best_distance {
                best_distance = distance;
                best = (ef, et);
            }
        }
    }
    best
}
