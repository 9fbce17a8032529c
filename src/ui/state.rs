//! Application state and persistence.
//!
//! Only the board configuration and the window size survive a restart; the
//! diagram lives for one session.

use crate::board::Board;
use crate::config::{BoardConfig, STORAGE_KEY};
use eframe::egui;
use std::collections::HashMap;

/// Storage key for the last known window inner size.
pub const WINDOW_SIZE_KEY: &str = "window_inner_size";

/// The eframe application: a [`Board`] plus the host-side bookkeeping needed to
/// feed it input.
pub struct BoardApp {
    /// The board being edited
    pub board: Board,
    /// Modifier state as of the last translated event
    pub modifiers: egui::Modifiers,
    /// Whether the primary button went down inside the canvas
    pub pressed_on_canvas: bool,
    /// Character each held key typed when pressed, replayed on its release
    pub typed_keys: HashMap<egui::Key, char>,
    /// Last known window inner size in logical points
    pub window_inner_size: Option<(f32, f32)>,
    /// Whether the stored window size was applied this session
    pub applied_viewport_restore: bool,
}

impl Default for BoardApp {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl BoardApp {
    /// Creates an app with an empty board.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: Board::new(config),
            modifiers: egui::Modifiers::NONE,
            pressed_on_canvas: false,
            typed_keys: HashMap::new(),
            window_inner_size: None,
            applied_viewport_restore: false,
        }
    }

    /// Builds the app at startup.
    ///
    /// An explicit `config` wins over the persisted one; a persisted config that
    /// fails to parse is logged and replaced by the defaults.
    pub fn restore(storage: Option<&dyn eframe::Storage>, config: Option<BoardConfig>) -> Self {
        let config = config
            .or_else(|| storage.and_then(load_stored_config))
            .unwrap_or_default();
        let mut app = Self::new(config);
        app.window_inner_size = storage
            .and_then(|s| s.get_string(WINDOW_SIZE_KEY))
            .and_then(|json| serde_json::from_str(&json).ok());
        app
    }
}

fn load_stored_config(storage: &dyn eframe::Storage) -> Option<BoardConfig> {
    let json = storage.get_string(STORAGE_KEY)?;
    match BoardConfig::from_json(&json) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("ignoring stored board config: {err}");
            None
        }
    }
}
