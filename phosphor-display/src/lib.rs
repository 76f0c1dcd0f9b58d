//! Monochrome rendering core for the Phosphor display subsystem
//!
//! The display is an abstract sheet of single-bit pixels. Geometry
//! primitives (points, lines, ellipses, arcs) and a character console
//! render into a bit-packed frame; the physical panel mirrors that
//! frame through the [`phosphor_hal::PanelLink`] seam and is told via
//! dirty notifications when a push is due.
//!
//! Text output works through a cursor, similar to a terminal: it
//! starts in the top-left cell, moves as characters are printed, and
//! wraps at the right and bottom edges of the grid. A line feed
//! immediately after an automatic wrap is swallowed so wrapped strings
//! do not double-advance.
//!
//! The display starts in auto-refresh mode: every mutating call
//! signals the panel. Disable it to compose frames and push them with
//! explicit [`Display::refresh`] calls.
//!
//! # Components
//!
//! - [`frame`] - the bit-packed frame store
//! - [`geometry`] - line, ellipse and arc rasterization
//! - [`text`] + [`font`] - the character console
//! - [`display`] - the [`Display`] context tying them to a panel

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod font;
pub mod frame;
pub mod geometry;
pub mod text;

// Re-export key types at crate root for convenience
pub use display::Display;
pub use frame::{DrawError, Frame, Point, HEIGHT, PAGES, WIDTH};
pub use text::{TEXT_COLS, TEXT_ROWS};
