//! Interaction state machine.
//!
//! Handles panning, zooming, hover tracking, block dragging, selection, edge
//! creation by successive clicks, block creation shortcuts and label editing.
//! Every handler returns whether the board needs to be redrawn.

use super::input::{Cursor, InputEvent, Key};
use super::Board;
use crate::types::Point;

impl Board {
    /// Feeds one input event through the state machine.
    ///
    /// # Returns
    ///
    /// `true` if the event changed anything visible and the board should be redrawn.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(pos) => self.handle_pointer_down(pos),
            InputEvent::PointerUp(_) => self.handle_pointer_up(),
            InputEvent::PointerMove(pos) => self.handle_pointer_move(pos),
            InputEvent::Click(_) => self.handle_click(),
            InputEvent::Wheel { delta_y } => self.handle_wheel(delta_y),
            InputEvent::KeyDown(key) => self.handle_key_down(key),
            InputEvent::KeyUp(key) => self.handle_key_up(key),
        }
    }

    /// Starts panning when the pan modifier is held, otherwise starts dragging the
    /// hovered block, remembering where on the block it was grabbed.
    fn handle_pointer_down(&mut self, raw: Point) -> bool {
        let location = self.to_model(raw);
        if self.keyboard.is_pressed(Key::Space) {
            self.cursor = Cursor::Grabbing;
            self.pan_last_location = location;
            self.panning = true;
        } else if let Some(id) = self.hovered {
            self.dragging = true;
            if let Some(block) = self.block_mut(id) {
                block.offset = block.position.delta_to(location);
            }
        }
        false
    }

    fn handle_pointer_up(&mut self) -> bool {
        if self.panning {
            self.cursor = Cursor::Grab;
            self.panning = false;
        } else if self.dragging {
            self.dragging = false;
        } else if let Some(block) = self.hovered.and_then(|id| self.block_mut(id)) {
            block.offset = Point::ZERO;
        }
        false
    }

    fn handle_pointer_move(&mut self, raw: Point) -> bool {
        self.mouse_location = self.to_model(raw);

        if self.panning {
            // The anchor stays fixed: the mapped pointer location already moves
            // against the pan offset, so this only adds the newest motion.
            let delta = self.pan_last_location.delta_to(self.mouse_location);
            self.pan_offset = self.pan_offset + delta;
            true
        } else if !self.dragging {
            self.update_hover()
        } else if let Some(id) = self.hovered {
            let location = self.mouse_location;
            match self.block_mut(id) {
                Some(block) => {
                    block.move_to(location - block.offset);
                    true
                }
                None => false,
            }
        } else {
            false
        }
    }

    /// Re-runs the hover hit test at the current pointer location.
    ///
    /// The first block in insertion order wins even though later blocks are drawn
    /// on top. Returns `true` when the hovered block changed, including when the
    /// pointer left every block.
    fn update_hover(&mut self) -> bool {
        let hit = self.block_at(self.mouse_location);
        for block in &mut self.blocks {
            block.hovering = Some(block.id) == hit;
        }
        let changed = hit != self.hovered;
        self.hovered = hit;
        changed
    }

    fn handle_wheel(&mut self, delta_y: f32) -> bool {
        if delta_y == 0.0 || delta_y.is_nan() {
            return false;
        }
        let direction = delta_y.signum();
        self.zoom_level = (self.zoom_level + direction * self.config.zoom_step)
            .clamp(self.config.zoom_min, self.config.zoom_max);
        true
    }

    /// Clicking a block selects it; if another block was selected first, an edge
    /// from that block to the clicked one is added. Clicking empty space deselects.
    fn handle_click(&mut self) -> bool {
        match self.hovered {
            Some(hovered) => {
                if let Some(previous) = self.selected {
                    self.clear_selection();
                    if let Err(rejection) = self.add_edge(previous, hovered) {
                        log::debug!("edge {previous} -> {hovered} not added: {rejection}");
                    }
                }
                self.selected = Some(hovered);
                if let Some(block) = self.block_mut(hovered) {
                    block.selected = true;
                }
            }
            None => self.clear_selection(),
        }
        true
    }

    fn handle_key_down(&mut self, key: Key) -> bool {
        self.keyboard.press(key);

        if self.keyboard.is_pressed(Key::Delete) {
            if let Some(selected) = self.selected {
                self.remove_block(selected);
                return true;
            }
        }
        // While a block is selected keystrokes go to its label on key-up.
        if self.selected.is_some() {
            return false;
        }

        let control = self.keyboard.is_pressed(Key::Control);
        let space = self.keyboard.is_pressed(Key::Space);
        if space && !control && self.cursor == Cursor::Default {
            self.cursor = Cursor::Grab;
        }

        if !control {
            return false;
        }
        let Some(kind) = Key::SHAPE_SHORTCUTS
            .iter()
            .find(|(letter, _)| self.keyboard.is_pressed(Key::Char(*letter)))
            .map(|(_, kind)| *kind)
        else {
            return false;
        };
        match self.add_block(self.mouse_location, kind) {
            Ok(_) => true,
            Err(rejection) => {
                log::debug!("{kind:?} block not placed: {rejection}");
                false
            }
        }
    }

    fn handle_key_up(&mut self, key: Key) -> bool {
        let mut redraw = false;
        if let Some(block) = self.selected.and_then(|id| self.block_mut(id)) {
            block.append_character(key);
            redraw = true;
        }
        if key == Key::Space {
            self.cursor = Cursor::Default;
        }
        self.keyboard.release(key);
        redraw
    }
}
