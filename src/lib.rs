//! # Block Board
//!
//! An interactive diagram canvas: place blocks, connect them with directed
//! curved edges, edit their labels and navigate with pan and zoom.
//!
//! Three block shapes are available:
//! - **Rectangles** (`Ctrl+B`)
//! - **Circles** (`Ctrl+C`)
//! - **Text boxes** (`Ctrl+S`), which carry a label but never take part in edges
//!
//! ## Features
//! - Hover, drag and select blocks
//! - Connect two blocks by clicking one and then the other
//! - Type into the selected block; `Delete` removes it together with its edges
//! - Space+drag panning and wheel zooming within a clamped range
//! - Optional background grid
//!
//! The interaction logic lives in [`Board`], which is independent of any
//! windowing toolkit: it consumes [`InputEvent`]s and draws onto a
//! [`Surface`]. The eframe front-end in `ui` wires it to a window.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod block;
pub mod board;
pub mod config;
pub mod constants;
pub mod edge;
pub mod error;
pub mod grid;
pub mod surface;
pub mod types;
mod ui;

pub use block::{Block, BlockKind, ConnectionPoints, EdgePoint};
pub use board::{Board, Cursor, InputEvent, Key, KeySet};
pub use config::BoardConfig;
pub use edge::Edge;
pub use error::{ConfigError, EdgeRejection, PlacementRejection};
pub use surface::{Surface, Transform};
pub use types::{BlockId, EdgeId, Point};
pub use ui::{BoardApp, EguiSurface};

/// Runs the board application with the default configuration, or the one
/// persisted by a previous session.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// fn main() -> Result<(), eframe::Error> {
///     block_board::run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    run_app_with(None)
}

/// Runs the board application. An explicit `config` takes precedence over the
/// persisted one.
pub fn run_app_with(config: Option<BoardConfig>) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Block Board",
        options,
        Box::new(move |cc| Ok(Box::new(BoardApp::restore(cc.storage, config)))),
    )
}
