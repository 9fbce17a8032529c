//! Cosmetic background grid.

use crate::constants::{FOREGROUND_COLOR, GRID_MAJOR_EVERY, GRID_MAJOR_WIDTH, GRID_MINOR_WIDTH};
use crate::surface::Surface;
use crate::types::Point;

/// A square reference grid drawn behind the blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Cell size in model units
    pub spacing: f32,
}

impl Grid {
    /// Creates a grid with the given cell size.
    pub fn new(spacing: f32) -> Self {
        Self { spacing }
    }

    /// Draws the grid lines covering a `viewport` sized canvas.
    ///
    /// Must be called inside the board transform: lines are laid out in model
    /// space and shifted against the pan offset.
    pub fn draw(&self, surface: &mut dyn Surface, viewport: Point, zoom: f32, pan: Point) {
        if self.spacing <= 0.0 {
            return;
        }
        let width = viewport.x * zoom;
        let height = viewport.y * zoom;
        surface.set_stroke_color(FOREGROUND_COLOR);

        let cols = (width / self.spacing).floor().max(0.0) as usize;
        for col in 0..cols {
            let x = col as f32 * self.spacing - pan.x;
            surface.set_line_width(Self::line_width(col));
            surface.stroke_line(Point::new(x, -pan.y), Point::new(x, height));
        }

        let rows = (height / self.spacing).floor().max(0.0) as usize;
        for row in 0..rows {
            let y = row as f32 * self.spacing - pan.y;
            surface.set_line_width(Self::line_width(row));
            surface.stroke_line(Point::new(-pan.x, y), Point::new(width, y));
        }
    }

    fn line_width(index: usize) -> f32 {
        if index % GRID_MAJOR_EVERY == 0 {
            GRID_MAJOR_WIDTH
        } else {
            GRID_MINOR_WIDTH
        }
    }
}
