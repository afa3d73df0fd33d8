// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color value types.
//!
//! - **Identifiers**: [`ColorIdentifier`] (tagged) and [`ColorArg`] (untagged, classified
//!   by shape)
//! - **Depth**: [`ColorMode`] (8, 16 or 256 colors)
//! - **Target**: [`DrawingLevel`] (foreground or background)

// Attach.
mod color_identifier;
mod color_mode;
mod drawing_level;

// Re-export.
pub use color_identifier::*;
pub use color_mode::*;
pub use drawing_level::*;
