//! Core library for the interactive recursive fractal tree.
//!
//! Main components:
//! - [`params`] — validated user parameters with ranges and defaults.
//! - [`config`] — the growth-rule snapshot the generator reads.
//! - [`tree`] — recursive pre-order branch generation.
//! - [`render`] — clears a canvas and draws the whole tree.
//! - [`canvas`] — drawing-surface trait, transform stack and recorder.
//! - [`color`] — hex/HSL/RGB conversion.
//! - [`debounce`] — coalescing of redraw requests.
//! - [`session`] — parameters plus redraw scheduling for a UI host.

pub mod canvas;
pub mod color;
pub mod config;
pub mod debounce;
pub mod params;
pub mod render;
pub mod session;
pub mod tree;
