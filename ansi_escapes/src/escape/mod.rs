// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence assembly. SGR sequences (`ESC [ ... m`) set colors and text
//! attributes; CSI cursor and erase sequences end in their own final byte.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

// Attach.
mod color_command;
mod csi_command;
mod rich_text;
mod sgr_command;
mod text_attribute;

// Re-export.
pub use color_command::*;
pub use csi_command::*;
pub use rich_text::*;
pub use sgr_command::*;
pub use text_attribute::*;
