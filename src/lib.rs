//! termgrid: a fixed-size character-grid renderer for terminal output.
//!
//! The crate keeps a 2D buffer of characters, lets callers stamp shapes,
//! lines, borders and wrapped text onto it, and repaints the terminal
//! (clear plus full-frame print) only when a mutation actually changed at
//! least one cell.
//!
//! Design:
//! - Every mutation flows through one batch primitive that evaluates a
//!   per-cell visitor over the whole grid before repainting or committing
//! - Drawing and text layout are visitors over that primitive
//! - Terminal output goes through a [`render::Presenter`], so everything
//!   is testable headless

pub mod canvas;
pub mod draw;
pub mod grid;
pub mod render;
pub mod text;

pub use canvas::{Canvas, CellVisitor, VisitFn};
pub use grid::Grid;
pub use render::{encode_frame_into, NullPresenter, Presenter, TermPresenter};
pub use text::Wrap;
