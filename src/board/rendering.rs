//! Rendering the board onto a drawing surface.

use super::Board;
use crate::constants::BACKGROUND_COLOR;
use crate::surface::{Surface, Transform};
use crate::types::Point;

impl Board {
    /// The model → screen transform: translate by the pan offset, then scale by
    /// the inverse zoom level.
    pub fn view_transform(&self) -> Transform {
        Transform::new(1.0 / self.zoom_level, self.pan_offset)
    }

    /// Renders one frame.
    ///
    /// Clears the surface, fills the background, then draws the grid (if enabled),
    /// every block and every edge in insertion order under the view transform.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        surface.fill_rect(Point::ZERO, self.viewport.x, self.viewport.y, BACKGROUND_COLOR);

        surface.push_transform(self.view_transform());
        if self.config.show_grid {
            self.grid.draw(surface, self.viewport, self.zoom_level, self.pan_offset);
        }
        for block in &self.blocks {
            block.draw(surface);
        }
        for edge in &self.edges {
            match (self.block(edge.from), self.block(edge.to)) {
                (Some(from), Some(to)) => edge.draw(surface, from, to),
                _ => log::warn!("skipping edge {} with a missing endpoint", edge.id()),
            }
        }
        surface.pop_transform();
    }
}
