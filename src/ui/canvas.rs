//! Canvas input translation and drawing.
//!
//! egui reports input per frame as a list of events plus the current modifier
//! state. This module turns that into the board's [`InputEvent`] stream:
//! modifiers become key transitions, pointer positions become canvas-relative,
//! and a primary release inside the canvas is followed by a click.
//!
//! Typed characters are taken from the text event egui emits right after a key
//! press, so shifted symbols and layout-specific characters come through as
//! typed. The character is remembered per key and reused for its release.

use super::painter::EguiSurface;
use super::state::BoardApp;
use crate::board::{InputEvent, Key};
use crate::types::Point;
use eframe::egui;

impl BoardApp {
    /// Allocates the canvas, feeds this frame's input to the board and paints it.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        self.board.set_viewport(Point::new(rect.width(), rect.height()));

        let events = ui.input(|i| self.collect_input(i, rect));
        let mut redraw = false;
        for event in events {
            redraw |= self.board.handle(event);
        }

        if response.hovered() || self.board.is_panning() {
            ui.ctx().set_cursor_icon(self.board.cursor().into());
        }

        let mut surface = EguiSurface::new(&painter, rect.min);
        self.board.draw(&mut surface);

        if redraw {
            ui.ctx().request_repaint();
        }
    }

    /// Translates one frame of egui input into board events, in order.
    pub fn collect_input(
        &mut self,
        input: &egui::InputState,
        rect: egui::Rect,
    ) -> Vec<InputEvent> {
        let mut out = Vec::new();
        let hovering_canvas = input.pointer.hover_pos().is_some_and(|p| rect.contains(p));
        // Character key pressed earlier in this frame, waiting for the text it produced.
        let mut pending: Option<egui::Key> = None;
        // A named key (Space) was just pressed; its text event carries nothing new.
        let mut swallow_text = false;

        for event in &input.events {
            if !matches!(event, egui::Event::Text(_)) {
                self.flush_pending_key(pending.take(), &mut out);
                swallow_text = false;
            }
            match event {
                egui::Event::Key {
                    key,
                    pressed,
                    modifiers,
                    ..
                } => {
                    self.sync_modifiers(*modifiers, &mut out);
                    if let Some(named) = named_key(*key) {
                        out.push(if *pressed {
                            InputEvent::KeyDown(named)
                        } else {
                            InputEvent::KeyUp(named)
                        });
                        swallow_text = *pressed;
                    } else if *pressed {
                        pending = Some(*key);
                    } else {
                        let typed = self.typed_keys.remove(key).or_else(|| base_char(*key));
                        if let Some(c) = typed {
                            out.push(InputEvent::KeyUp(Key::Char(c)));
                        }
                    }
                }
                egui::Event::Text(text) => {
                    let mut chars = text.chars();
                    if let Some(key) = pending.take() {
                        if let Some(c) = chars.next() {
                            self.typed_keys.insert(key, c);
                            out.push(InputEvent::KeyDown(Key::Char(c)));
                        }
                    } else if std::mem::take(&mut swallow_text) {
                        chars.next();
                    }
                    // Text without a key of its own (IME, dead keys) is typed in place.
                    for c in chars {
                        out.push(InputEvent::KeyDown(Key::Char(c)));
                        out.push(InputEvent::KeyUp(Key::Char(c)));
                    }
                }
                // Ctrl+C arrives as a clipboard command instead of a key press.
                egui::Event::Copy => out.push(InputEvent::KeyDown(Key::Char('c'))),
                egui::Event::PointerMoved(pos) => {
                    out.push(InputEvent::PointerMove(to_canvas(*pos, rect)));
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    modifiers,
                } => {
                    self.sync_modifiers(*modifiers, &mut out);
                    let local = to_canvas(*pos, rect);
                    if *pressed {
                        self.pressed_on_canvas = rect.contains(*pos);
                        if self.pressed_on_canvas {
                            out.push(InputEvent::PointerDown(local));
                        }
                    } else {
                        out.push(InputEvent::PointerUp(local));
                        if std::mem::take(&mut self.pressed_on_canvas) && rect.contains(*pos) {
                            out.push(InputEvent::Click(local));
                        }
                    }
                }
                egui::Event::MouseWheel { delta, .. } if hovering_canvas => {
                    // egui reports scrolling up as positive.
                    out.push(InputEvent::Wheel { delta_y: -delta.y });
                }
                _ => {}
            }
        }

        self.flush_pending_key(pending, &mut out);
        self.sync_modifiers(input.modifiers, &mut out);
        out
    }

    /// Presses a character key that produced no text (shortcuts with Control
    /// held), using the key's unshifted symbol.
    fn flush_pending_key(&mut self, pending: Option<egui::Key>, out: &mut Vec<InputEvent>) {
        let Some(key) = pending else {
            return;
        };
        if let Some(c) = base_char(key) {
            self.typed_keys.insert(key, c);
            out.push(InputEvent::KeyDown(Key::Char(c)));
        }
    }

    /// Emits key transitions for modifiers that changed since the last call.
    ///
    /// `command` maps to [`Key::Control`] so the shortcuts use Cmd on macOS.
    fn sync_modifiers(&mut self, now: egui::Modifiers, out: &mut Vec<InputEvent>) {
        let prev = self.modifiers;
        let transitions = [
            (prev.command, now.command, Key::Control),
            (prev.shift, now.shift, Key::Shift),
            (prev.alt, now.alt, Key::Alt),
        ];
        for (was, is, key) in transitions {
            match (was, is) {
                (false, true) => out.push(InputEvent::KeyDown(key)),
                (true, false) => out.push(InputEvent::KeyUp(key)),
                _ => {}
            }
        }
        self.modifiers = now;
    }
}

fn to_canvas(pos: egui::Pos2, rect: egui::Rect) -> Point {
    Point::from(pos - rect.min)
}

/// Keys the board knows by name rather than by the character they type.
pub(crate) fn named_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Space => Some(Key::Space),
        egui::Key::Tab => Some(Key::Tab),
        egui::Key::Delete => Some(Key::Delete),
        egui::Key::Backspace => Some(Key::Backspace),
        egui::Key::Enter => Some(Key::Enter),
        egui::Key::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// The unshifted character printed on a key, when it has a single one.
///
/// Only used when the key produced no text event; typed characters come from
/// the text egui reports for the press.
pub(crate) fn base_char(key: egui::Key) -> Option<char> {
    let mut chars = key.symbol_or_name().chars();
    let c = chars.next()?;
    if chars.next().is_some() || !c.is_ascii_graphic() {
        return None;
    }
    Some(c.to_ascii_lowercase())
}
