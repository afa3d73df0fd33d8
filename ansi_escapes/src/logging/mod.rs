// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Subscriber setup for binaries. Library code only emits [`tracing`] events.

// Attach.
mod tracing_init;
mod writer_config;

// Re-export.
pub use tracing_init::*;
pub use writer_config::*;
