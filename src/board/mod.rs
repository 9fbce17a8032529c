//! The board: owner of the diagram model, the viewport and the interaction state.
//!
//! A [`Board`] is an explicitly owned session object. Every mutation of the
//! blocks, edges, viewport and interaction flags goes through its methods, and
//! every method leaves the model consistent before returning (a deleted block
//! never leaves a dangling edge behind).
//!
//! # Module Organization
//!
//! - `input` - Input events, keys, held-key set and cursor
//! - `handlers` - The interaction state machine driven by [`InputEvent`]s
//! - `rendering` - Drawing the whole board onto a [`Surface`](crate::surface::Surface)

mod handlers;
mod input;
mod rendering;

pub use input::{Cursor, InputEvent, Key, KeySet};

use crate::block::{Block, BlockKind};
use crate::config::BoardConfig;
use crate::edge::Edge;
use crate::error::{EdgeRejection, PlacementRejection};
use crate::grid::Grid;
use crate::types::{BlockId, EdgeId, Point};

/// Diagram model plus viewport and interaction state for one editing session.
#[derive(Debug, Clone)]
pub struct Board {
    blocks: Vec<Block>,
    edges: Vec<Edge>,
    config: BoardConfig,
    grid: Grid,
    /// Canvas size in screen pixels
    viewport: Point,
    /// Zoom level, clamped to the configured range
    zoom_level: f32,
    /// Pan offset in model units
    pan_offset: Point,
    /// Model-space pointer location recorded when panning started
    pan_last_location: Point,
    hovered: Option<BlockId>,
    selected: Option<BlockId>,
    panning: bool,
    dragging: bool,
    /// Last pointer location in model space
    mouse_location: Point,
    keyboard: KeySet,
    cursor: Cursor,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    /// Creates an empty board.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            blocks: Vec::new(),
            edges: Vec::new(),
            grid: Grid::new(config.grid_spacing),
            zoom_level: config.zoom_min,
            config,
            viewport: Point::ZERO,
            pan_offset: Point::ZERO,
            pan_last_location: Point::ZERO,
            hovered: None,
            selected: None,
            panning: false,
            dragging: false,
            mouse_location: Point::ZERO,
            keyboard: KeySet::default(),
            cursor: Cursor::Default,
        }
    }

    /// Blocks in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a block by id.
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Active configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Toggles the background grid.
    pub fn set_show_grid(&mut self, show: bool) {
        self.config.show_grid = show;
    }

    /// Records the canvas size in screen pixels.
    pub fn set_viewport(&mut self, size: Point) {
        self.viewport = size;
    }

    /// Canvas size in screen pixels.
    pub fn viewport(&self) -> Point {
        self.viewport
    }

    /// Current zoom level.
    pub fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    /// Current pan offset.
    pub fn pan_offset(&self) -> Point {
        self.pan_offset
    }

    /// Block under the pointer, if any.
    pub fn hovered(&self) -> Option<BlockId> {
        self.hovered
    }

    /// Selected block, if any.
    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    /// Whether a pan gesture is in progress.
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Whether a block drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last pointer location in model space.
    pub fn mouse_location(&self) -> Point {
        self.mouse_location
    }

    /// Keys currently held.
    pub fn keyboard(&self) -> KeySet {
        self.keyboard
    }

    /// Cursor the host should display over the canvas.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Converts canvas-relative coordinates to model space.
    ///
    /// Zoom scales the input mapping; rendering applies the inverse scale so the
    /// two stay consistent.
    pub fn to_model(&self, raw: Point) -> Point {
        Point::new(
            raw.x * self.zoom_level - self.pan_offset.x,
            raw.y * self.zoom_level - self.pan_offset.y,
        )
    }

    /// First block in insertion order whose interior contains `location`.
    pub fn block_at(&self, location: Point) -> Option<BlockId> {
        self.blocks
            .iter()
            .find(|block| block.contains(location))
            .map(|block| block.id)
    }

    /// Places a new block of `kind` centered on `center` unless another block
    /// already contains that point.
    pub fn add_block(
        &mut self,
        center: Point,
        kind: BlockKind,
    ) -> Result<BlockId, PlacementRejection> {
        if self.block_at(center).is_some() {
            return Err(PlacementRejection::Occupied);
        }
        let block = Block::new(center, kind);
        let id = block.id;
        log::debug!("added {kind:?} block {id} at ({}, {})", center.x, center.y);
        self.blocks.push(block);
        Ok(id)
    }

    /// Whether the edge `from -> to` exists. The reverse direction is a different edge.
    pub fn has_edge(&self, from: BlockId, to: BlockId) -> bool {
        let id = EdgeId::new(from, to);
        self.edges.iter().any(|edge| edge.id() == id)
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Self-loops, edges touching a text box and duplicates of an existing edge in
    /// the same direction are rejected. The reverse of an existing edge is allowed.
    pub fn add_edge(&mut self, from: BlockId, to: BlockId) -> Result<EdgeId, EdgeRejection> {
        if from == to {
            return Err(EdgeRejection::SelfLoop);
        }
        let (Some(from_block), Some(to_block)) = (self.block(from), self.block(to)) else {
            return Err(EdgeRejection::UnknownBlock);
        };
        if !from_block.kind.accepts_edges() || !to_block.kind.accepts_edges() {
            return Err(EdgeRejection::TextBox);
        }
        if self.has_edge(from, to) {
            return Err(EdgeRejection::Duplicate);
        }

        let edge = Edge::new(from, to);
        log::debug!("added edge {}", edge.id());
        self.edges.push(edge);
        Ok(edge.id())
    }

    /// Deletes a block together with every edge that starts or ends at it.
    ///
    /// Selection and hover are cleared. Returns `false` if the block did not exist.
    pub fn remove_block(&mut self, id: BlockId) -> bool {
        let before = self.blocks.len();
        self.edges.retain(|edge| !edge.touches(id));
        self.blocks.retain(|block| block.id != id);
        self.clear_selection();
        self.clear_hover();

        let removed = self.blocks.len() != before;
        if removed {
            log::debug!("removed block {id}");
        }
        removed
    }

    fn clear_selection(&mut self) {
        if let Some(block) = self.selected.take().and_then(|id| self.block_mut(id)) {
            block.selected = false;
        }
    }

    fn clear_hover(&mut self) {
        if let Some(block) = self.hovered.take().and_then(|id| self.block_mut(id)) {
            block.hovering = false;
        }
    }
}

#[cfg(test)]
mod tests;
