//! The 2D drawing surface the board renders onto.
//!
//! The surface mirrors a canvas-style API: stateful stroke/fill colors and line
//! width, a handful of shape primitives and a push/pop transform stack. The
//! eframe front-end implements it over an `egui::Painter`; tests use
//! [`RecordingSurface`] to inspect what was drawn.

use crate::types::Point;
use egui::Color32;

/// An affine model → screen mapping restricted to uniform scale plus translation.
///
/// A point `p` maps to `(p + translate) * scale`, matching a canvas context that
/// was scaled first and translated second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Uniform scale factor
    pub scale: f32,
    /// Translation applied before scaling
    pub translate: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        translate: Point::ZERO,
    };

    /// Creates a transform that translates by `translate` and then scales by `scale`.
    pub fn new(scale: f32, translate: Point) -> Self {
        Self { scale, translate }
    }

    /// Maps a point through this transform.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            (p.x + self.translate.x) * self.scale,
            (p.y + self.translate.y) * self.scale,
        )
    }

    /// Composes `self` (outer) with `inner`, so the result applies `inner` first.
    pub fn then(&self, inner: &Transform) -> Transform {
        // outer((p + ti) * si) = ((p + ti) * si + to) * so = (p + ti + to / si) * si * so
        Transform {
            scale: self.scale * inner.scale,
            translate: Point::new(
                inner.translate.x + self.translate.x / inner.scale,
                inner.translate.y + self.translate.y / inner.scale,
            ),
        }
    }
}

/// Drawing primitives required to render a board.
///
/// Coordinates are in the space established by the current transform stack.
pub trait Surface {
    /// Clears the whole surface.
    fn clear(&mut self);

    /// Fills an axis-aligned rectangle with the given color, ignoring the fill style.
    fn fill_rect(&mut self, min: Point, width: f32, height: f32, color: Color32);

    /// Sets the color used by subsequent stroke operations.
    fn set_stroke_color(&mut self, color: Color32);

    /// Sets the color used by subsequent fill and text operations.
    fn set_fill_color(&mut self, color: Color32);

    /// Sets the width used by subsequent stroke operations.
    fn set_line_width(&mut self, width: f32);

    /// Strokes the outline of a rectangle with rounded corners.
    fn stroke_round_rect(&mut self, min: Point, width: f32, height: f32, radius: f32);

    /// Strokes a straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point);

    /// Strokes a cubic bezier curve from `from` to `to` with the two control handles.
    fn stroke_bezier(&mut self, from: Point, control_a: Point, control_b: Point, to: Point);

    /// Fills a full circle.
    fn fill_circle(&mut self, center: Point, radius: f32);

    /// Draws text centered horizontally and vertically on `center`.
    fn fill_text(&mut self, text: &str, center: Point, font_size: f32);

    /// Pushes a transform, composing it with the current one.
    fn push_transform(&mut self, transform: Transform);

    /// Restores the transform that was current before the matching push.
    fn pop_transform(&mut self);
}

/// Transform stack shared by surface implementations.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    stack: Vec<Transform>,
}

impl TransformStack {
    /// The composed transform currently in effect.
    pub fn current(&self) -> Transform {
        self.stack.last().copied().unwrap_or_default()
    }

    /// Pushes `transform` on top of the current one.
    pub fn push(&mut self, transform: Transform) {
        let composed = self.current().then(&transform);
        self.stack.push(composed);
    }

    /// Pops the most recent transform; popping an empty stack is a no-op.
    pub fn pop(&mut self) {
        self.stack.pop();
    }

    /// Number of transforms pushed and not yet popped.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawOp {
    /// `clear`
    Clear,
    /// `fill_rect`
    FillRect {
        min: Point,
        width: f32,
        height: f32,
        color: Color32,
    },
    /// `stroke_round_rect`, with the stroke style in effect
    RoundRect {
        min: Point,
        width: f32,
        height: f32,
        radius: f32,
        color: Color32,
        line_width: f32,
    },
    /// `stroke_line`
    Line {
        from: Point,
        to: Point,
        line_width: f32,
    },
    /// `stroke_bezier`
    Bezier {
        points: [Point; 4],
        color: Color32,
    },
    /// `fill_circle`, with the fill color in effect
    Circle {
        center: Point,
        radius: f32,
        color: Color32,
    },
    /// `fill_text`, with the fill color in effect
    Text {
        text: String,
        center: Point,
        color: Color32,
    },
    /// `push_transform`
    Push(Transform),
    /// `pop_transform`
    Pop,
}

/// A surface that records every draw call in model coordinates.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    /// Recorded operations in call order
    pub ops: Vec<DrawOp>,
    stroke: Color32,
    fill: Color32,
    line_width: f32,
    transforms: TransformStack,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            stroke: Color32::BLACK,
            fill: Color32::BLACK,
            line_width: 1.0,
            transforms: TransformStack::default(),
        }
    }
}

impl RecordingSurface {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform currently in effect.
    pub fn current_transform(&self) -> Transform {
        self.transforms.current()
    }

    /// Number of transforms still pushed.
    pub fn transform_depth(&self) -> usize {
        self.transforms.depth()
    }

    /// All recorded text labels.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded operations matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, min: Point, width: f32, height: f32, color: Color32) {
        self.ops.push(DrawOp::FillRect {
            min,
            width,
            height,
            color,
        });
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke = color;
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn stroke_round_rect(&mut self, min: Point, width: f32, height: f32, radius: f32) {
        self.ops.push(DrawOp::RoundRect {
            min,
            width,
            height,
            radius,
            color: self.stroke,
            line_width: self.line_width,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            line_width: self.line_width,
        });
    }

    fn stroke_bezier(&mut self, from: Point, control_a: Point, control_b: Point, to: Point) {
        self.ops.push(DrawOp::Bezier {
            points: [from, control_a, control_b, to],
            color: self.stroke,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: self.fill,
        });
    }

    fn fill_text(&mut self, text: &str, center: Point, _font_size: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            center,
            color: self.fill,
        });
    }

    fn push_transform(&mut self, transform: Transform) {
        self.transforms.push(transform);
        self.ops.push(DrawOp::Push(transform));
    }

    fn pop_transform(&mut self) {
        self.transforms.pop();
        self.ops.push(DrawOp::Pop);
    }
}
