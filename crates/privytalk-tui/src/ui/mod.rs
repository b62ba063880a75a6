//! Terminal UI module using ratatui.
//!
//! This module provides the TUI rendering and input handling:
//!
//! - `render`: Main frame rendering, layout and overlays
//! - `input`: Keyboard event handling
//! - `styles`: Dark and light palettes and text styling
//! - `screens`: Per-screen content rendering (chat, call, media, etc.)

pub mod input;
pub mod render;
pub mod screens;
pub mod styles;
