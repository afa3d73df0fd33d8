// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # r3bl_ansi_escapes
//!
//! Generate the outbound ANSI escape sequences a terminal program needs: colors, text
//! attributes, cursor movement and clearing. Nothing here talks to a terminal; every
//! function returns a [`String`] for the caller to print.
//!
//! ## Colors
//!
//! A color can be given as a palette id (0-255), a name (`"red"`,
//! `"mediumspringgreen"`), a hex string (`"#00ffaf"`), an RGB triple or an HSL triple.
//! Each of these is resolved against the 256 color xterm palette, and the color depth
//! (8, 16 or 256 colors) is picked from the identifier and the `bold` / `blink` /
//! `bright` / `colormode` flags of a [`ColorRequest`].
//!
//! ```rust
//! use r3bl_ansi_escapes::{ColorRequest, DrawingLevel, background, color};
//!
//! // Base names are 8 color commands.
//! assert_eq!(color("red", DrawingLevel::Foreground).unwrap(), "\x1b[31m");
//!
//! // Bold asks for 16 colors.
//! assert_eq!(background(ColorRequest::new("red").bold(true)).unwrap(), "\x1b[41;1m");
//!
//! // Hex, RGB, HSL and non base names need the 256 color palette.
//! assert_eq!(
//!     color(ColorRequest::default().hex("#ff0000"), DrawingLevel::Foreground).unwrap(),
//!     "\x1b[38;5;9m"
//! );
//! assert_eq!(
//!     color((0, 250, 180), DrawingLevel::Foreground).unwrap(),
//!     "\x1b[38;5;49m"
//! );
//! ```
//!
//! ## Text
//!
//! ```rust
//! use r3bl_ansi_escapes::{ColorRequest, RichText, clear_lines};
//!
//! let line = RichText::new("done")
//!     .bold()
//!     .fg(ColorRequest::new("green"))
//!     .try_to_string()
//!     .unwrap();
//! assert_eq!(line, "\x1b[1;32mdone\x1b[0m");
//!
//! assert_eq!(clear_lines(1), "\x1b[2K\x1b[1A");
//! ```
//!
//! ## Cheatsheet
//!
//! The `ansi_cheatsheet` binary prints the palettes with their ids, names, hex, RGB and
//! HSL values. Run it with `--help` for the options.

// Attach.
pub mod cheatsheet;
pub mod color;
pub mod constants;
pub mod error;
pub mod escape;
pub mod logging;
pub mod palette;
pub mod resolver;
pub mod sizing;

// Re-export.
pub use cheatsheet::*;
pub use color::*;
pub use constants::*;
pub use error::*;
pub use escape::*;
pub use logging::*;
pub use palette::*;
pub use resolver::*;
pub use sizing::*;
