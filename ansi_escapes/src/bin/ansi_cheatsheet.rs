// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_ansi_escapes::{CLIArg, CheatsheetOptions, WriterConfig, render_cheatsheet,
                        try_initialize_logging};

const LOG_FILE_PATH: &str = "log.txt";

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging(
            tracing_core::LevelFilter::DEBUG,
            WriterConfig::File(LOG_FILE_PATH.to_string()),
        )?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let options = CheatsheetOptions::from(&cli_arg);
    let cheatsheet = render_cheatsheet(&options)?;
    print!("{cheatsheet}");

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}
