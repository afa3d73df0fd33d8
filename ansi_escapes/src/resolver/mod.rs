// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color argument resolution: from a [`ColorRequest`] to a depth and a command string.
//!
//! ```text
//! ColorRequest ─▶ first filled slot ─▶ ColorIdentifier ─┬─▶ palette lookup ─▶ id
//!                                                       └─▶ implied depth ─┐
//!                 flags (bold / blink / bright / colormode) ─▶ flag depth ─┴▶ max
//!                                                    id + depth ─▶ "1" | "1;1" | "8;5;9"
//! ```
//!
//! The drawing level prefix (`3` or `4`) is not part of the resolved command; see
//! [`color_command()`].
//!
//! [`color_command()`]: crate::color_command

// Attach.
mod color_request;
mod resolve;

// Re-export.
pub use color_request::*;
pub use resolve::*;
