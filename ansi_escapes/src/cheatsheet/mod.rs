// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Palette swatches for the terminal, and the command line options of the
//! `ansi_cheatsheet` binary.

// Attach.
mod clap_config;
mod render;

// Re-export.
pub use clap_config::*;
pub use render::*;
