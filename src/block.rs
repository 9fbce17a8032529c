//! Blocks: the positioned, shaped and labeled nodes of a diagram.

use crate::board::Key;
use crate::constants::*;
use crate::surface::Surface;
use crate::types::{BlockId, Point};
use uuid::Uuid;

/// The shape of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A rounded rectangle
    Rectangle,
    /// A circle; width, height and twice the radius are equal
    Circle,
    /// Free-standing text without an outline; cannot take part in edges
    TextBox,
}

impl BlockKind {
    /// Width and height of a freshly created block of this kind.
    pub fn default_size(self) -> (f32, f32) {
        match self {
            BlockKind::Circle => (BLOCK_HEIGHT, BLOCK_HEIGHT),
            BlockKind::Rectangle | BlockKind::TextBox => (BLOCK_WIDTH, BLOCK_HEIGHT),
        }
    }

    /// Corner radius for a block of this kind with the given width.
    pub fn corner_radius(self, width: f32) -> f32 {
        match self {
            BlockKind::Circle => width / 2.0,
            BlockKind::Rectangle | BlockKind::TextBox => BLOCK_CORNER_RADIUS,
        }
    }

    /// Initial label.
    pub fn default_text(self) -> &'static str {
        match self {
            BlockKind::TextBox => DEFAULT_TEXT_BOX_TEXT,
            BlockKind::Rectangle | BlockKind::Circle => DEFAULT_BLOCK_TEXT,
        }
    }

    /// Outline width.
    pub fn stroke_width(self) -> f32 {
        match self {
            BlockKind::TextBox => TEXT_BOX_STROKE_WIDTH,
            BlockKind::Rectangle | BlockKind::Circle => BLOCK_STROKE_WIDTH,
        }
    }

    /// Whether edges may start or end at blocks of this kind.
    pub fn accepts_edges(self) -> bool {
        !matches!(self, BlockKind::TextBox)
    }
}

/// A connection point: an anchor on the block boundary and the bezier control
/// point one block dimension further out in the same direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePoint {
    /// Anchor at the midpoint of one side
    pub location: Point,
    /// Curve handle used when an edge leaves or enters through this side
    pub control_point: Point,
}

/// The four named connection points of a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionPoints {
    /// Midpoint of the top side
    pub top: EdgePoint,
    /// Midpoint of the bottom side
    pub bottom: EdgePoint,
    /// Midpoint of the left side
    pub left: EdgePoint,
    /// Midpoint of the right side
    pub right: EdgePoint,
}

impl ConnectionPoints {
    /// The points in routing order: top, bottom, left, right.
    pub fn iter(&self) -> impl Iterator<Item = EdgePoint> {
        [self.top, self.bottom, self.left, self.right].into_iter()
    }
}

/// A node in the diagram.
#[derive(Debug, Clone)]
pub struct Block {
    /// Unique identifier for this block
    pub id: BlockId,
    /// Shape of the block
    pub kind: BlockKind,
    /// Top-left corner in model space
    pub position: Point,
    /// Width in model units
    pub width: f32,
    /// Height in model units
    pub height: f32,
    /// Corner radius of the outline
    pub radius: f32,
    /// Outline width
    pub stroke_width: f32,
    /// Whether the pointer is over this block
    pub hovering: bool,
    /// Whether this block is the board's selection
    pub selected: bool,
    /// Offset from the block's top-left corner to the grab point of an active drag
    pub offset: Point,
    text: String,
}

impl Block {
    /// Creates a block of `kind` centered on `center`.
    pub fn new(center: Point, kind: BlockKind) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id: Uuid::new_v4(),
            kind,
            position: Point::new(center.x - width / 2.0, center.y - height / 2.0),
            width,
            height,
            radius: kind.corner_radius(width),
            stroke_width: kind.stroke_width(),
            hovering: false,
            selected: false,
            offset: Point::ZERO,
            text: kind.default_text().to_owned(),
        }
    }

    /// Current label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Strict interior test; points on the boundary are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.position.x
            && p.x < self.position.x + self.width
            && p.y > self.position.y
            && p.y < self.position.y + self.height
    }

    /// Computes the connection points from the current position and size.
    pub fn connection_points(&self) -> ConnectionPoints {
        let Point { x, y } = self.position;
        let (w, h) = (self.width, self.height);
        ConnectionPoints {
            top: EdgePoint {
                location: Point::new(x + w / 2.0, y),
                control_point: Point::new(x + w / 2.0, y - h),
            },
            bottom: EdgePoint {
                location: Point::new(x + w / 2.0, y + h),
                control_point: Point::new(x + w / 2.0, y + h * 2.0),
            },
            left: EdgePoint {
                location: Point::new(x, y + h / 2.0),
                control_point: Point::new(x - w, y + h / 2.0),
            },
            right: EdgePoint {
                location: Point::new(x + w, y + h / 2.0),
                control_point: Point::new(x + w * 2.0, y + h / 2.0),
            },
        }
    }

    /// Moves the top-left corner to `position`.
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Applies one released key to the label.
    ///
    /// Returns `true` if the label changed.
    pub fn append_character(&mut self, key: Key) -> bool {
        match key {
            Key::Backspace => self.text.pop().is_some(),
            Key::Enter => self.push_char('\n'),
            Key::Space => self.push_char(' '),
            Key::Char(c) => self.push_char(c),
            Key::Control
            | Key::Alt
            | Key::Shift
            | Key::Tab
            | Key::CapsLock
            | Key::Delete
            | Key::Escape => false,
        }
    }

    fn push_char(&mut self, c: char) -> bool {
        if self.text.chars().count() >= MAX_TEXT_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Renders the outline, the label and, when hovered or selected, the handles.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let outline = if self.selected {
            ACCENT_COLOR
        } else if self.hovering {
            HOVER_COLOR
        } else {
            FOREGROUND_COLOR
        };
        surface.set_stroke_color(outline);
        surface.set_line_width(self.stroke_width);

        match self.kind {
            BlockKind::Rectangle | BlockKind::Circle => self.stroke_outline(surface),
            BlockKind::TextBox => {}
        }

        surface.set_fill_color(if self.selected {
            ACCENT_COLOR
        } else {
            FOREGROUND_COLOR
        });
        let center = Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        );
        surface.fill_text(&self.text, center, BLOCK_FONT_SIZE);

        if self.hovering || self.selected {
            match self.kind {
                BlockKind::TextBox => self.stroke_outline(surface),
                BlockKind::Rectangle | BlockKind::Circle => {
                    surface.set_fill_color(FOREGROUND_COLOR);
                    for point in self.connection_points().iter() {
                        surface.fill_circle(point.location, HANDLE_RADIUS);
                    }
                }
            }
        }
    }

    fn stroke_outline(&self, surface: &mut dyn Surface) {
        surface.stroke_round_rect(self.position, self.width, self.height, self.radius);
    }
}
