//! Input events consumed by the board and the keyboard state it tracks.

use crate::block::BlockKind;
use crate::types::Point;

/// A raw input event. Pointer positions are canvas-relative, before zoom and pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed
    PointerDown(Point),
    /// Primary button released
    PointerUp(Point),
    /// Pointer moved
    PointerMove(Point),
    /// Primary button clicked; delivered after the matching `PointerUp`
    Click(Point),
    /// Wheel scrolled; positive `delta_y` scrolls down and raises the zoom level
    Wheel {
        /// Vertical scroll amount; only the sign matters
        delta_y: f32,
    },
    /// Key pressed (auto-repeat included)
    KeyDown(Key),
    /// Key released
    KeyUp(Key),
}

/// Keys the board distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Pan modifier; types a space while editing text
    Space,
    /// Block creation modifier
    Control,
    /// Alt / Option
    Alt,
    /// Shift
    Shift,
    /// Tab
    Tab,
    /// Caps lock
    CapsLock,
    /// Deletes the selected block
    Delete,
    /// Removes the last character while editing text
    Backspace,
    /// Inserts a line break while editing text
    Enter,
    /// Escape
    Escape,
    /// Any printable character
    Char(char),
}

impl Key {
    /// Letters that create a block of the paired shape while `Control` is held.
    ///
    /// Checked in this order when several are held.
    pub const SHAPE_SHORTCUTS: [(char, BlockKind); 3] = [
        ('s', BlockKind::TextBox),
        ('c', BlockKind::Circle),
        ('b', BlockKind::Rectangle),
    ];

    fn bit(self) -> Option<u32> {
        let index = match self {
            Key::Space => 0,
            Key::Control => 1,
            Key::Alt => 2,
            Key::Shift => 3,
            Key::Tab => 4,
            Key::CapsLock => 5,
            Key::Delete => 6,
            Key::Backspace => 7,
            Key::Enter => 8,
            Key::Escape => 9,
            Key::Char(c) if c.is_ascii_alphabetic() => {
                10 + (c.to_ascii_lowercase() as u32 - 'a' as u32)
            }
            Key::Char(_) => return None,
        };
        Some(index)
    }
}

/// Set of currently held keys.
///
/// Named keys and the ASCII letters (case-insensitive) are tracked; other
/// characters are never reported as held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet(u64);

impl KeySet {
    /// Marks `key` as held.
    pub fn press(&mut self, key: Key) {
        if let Some(bit) = key.bit() {
            self.0 |= 1 << bit;
        }
    }

    /// Marks `key` as released.
    pub fn release(&mut self, key: Key) {
        if let Some(bit) = key.bit() {
            self.0 &= !(1 << bit);
        }
    }

    /// Whether `key` is held.
    pub fn is_pressed(&self, key: Key) -> bool {
        key.bit().is_some_and(|bit| self.0 & (1 << bit) != 0)
    }

    /// Whether no tracked key is held.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Pointer cursor requested by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Regular pointer
    #[default]
    Default,
    /// Pan modifier held, ready to pan
    Grab,
    /// Panning in progress
    Grabbing,
}

impl From<Cursor> for egui::CursorIcon {
    fn from(cursor: Cursor) -> Self {
        match cursor {
            Cursor::Default => egui::CursorIcon::Default,
            Cursor::Grab => egui::CursorIcon::Grab,
            Cursor::Grabbing => egui::CursorIcon::Grabbing,
        }
    }
}
