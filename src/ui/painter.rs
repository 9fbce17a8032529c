//! [`Surface`] implementation backed by an `egui::Painter`.
//!
//! egui repaints every frame from scratch, so `clear` has nothing to erase. All
//! coordinates are mapped through the transform stack and then offset by the
//! canvas origin; line widths, radii and font sizes scale with the transform.

use crate::surface::{Surface, Transform, TransformStack};
use crate::types::Point;
use eframe::egui;
use egui::epaint::CubicBezierShape;
use egui::{Color32, Stroke, StrokeKind};

/// Paints board primitives into an egui canvas.
pub struct EguiSurface<'p> {
    painter: &'p egui::Painter,
    /// Screen position of the canvas' top-left corner
    origin: egui::Pos2,
    transforms: TransformStack,
    stroke_color: Color32,
    fill_color: Color32,
    line_width: f32,
}

impl<'p> EguiSurface<'p> {
    /// Creates a surface whose `(0, 0)` sits at `origin` in screen space.
    pub fn new(painter: &'p egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin,
            transforms: TransformStack::default(),
            stroke_color: Color32::WHITE,
            fill_color: Color32::WHITE,
            line_width: 1.0,
        }
    }

    /// The composed transform currently in effect.
    pub fn transform(&self) -> Transform {
        self.transforms.current()
    }

    /// Maps a surface coordinate to an absolute screen position.
    pub fn to_screen(&self, p: Point) -> egui::Pos2 {
        let mapped = self.transforms.current().apply(p);
        egui::pos2(self.origin.x + mapped.x, self.origin.y + mapped.y)
    }

    fn scaled(&self, length: f32) -> f32 {
        length * self.transforms.current().scale
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.scaled(self.line_width), self.stroke_color)
    }
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self) {}

    fn fill_rect(&mut self, min: Point, width: f32, height: f32, color: Color32) {
        let rect = egui::Rect::from_min_size(
            self.to_screen(min),
            egui::vec2(self.scaled(width), self.scaled(height)),
        );
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn stroke_round_rect(&mut self, min: Point, width: f32, height: f32, radius: f32) {
        let rect = egui::Rect::from_min_size(
            self.to_screen(min),
            egui::vec2(self.scaled(width), self.scaled(height)),
        );
        self.painter
            .rect_stroke(rect, self.scaled(radius), self.stroke(), StrokeKind::Middle);
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], self.stroke());
    }

    fn stroke_bezier(&mut self, from: Point, control_a: Point, control_b: Point, to: Point) {
        let points = [
            self.to_screen(from),
            self.to_screen(control_a),
            self.to_screen(control_b),
            self.to_screen(to),
        ];
        let fill = Color32::TRANSPARENT;
        let shape = CubicBezierShape::from_points_stroke(points, false, fill, self.stroke());
        self.painter.add(shape);
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.painter
            .circle_filled(self.to_screen(center), self.scaled(radius), self.fill_color);
    }

    fn fill_text(&mut self, text: &str, center: Point, font_size: f32) {
        self.painter.text(
            self.to_screen(center),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(self.scaled(font_size)),
            self.fill_color,
        );
    }

    fn push_transform(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    fn pop_transform(&mut self) {
        self.transforms.pop();
    }
}
