// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, ValueEnum};
use strum::IntoEnumIterator;

use crate::{CheatsheetOptions, ColorMode, DrawingLevel};

#[derive(Debug, Parser)]
#[command(bin_name = "ansi_cheatsheet")]
#[command(about = "Print swatches of the 8, 16 and 256 color palettes")]
#[command(version)]
#[command(next_line_help = true)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[arg(
        long = "mode",
        short = 'm',
        value_enum,
        help = "Palettes to print, in order; repeat to pick more than one [default: all]"
    )]
    pub modes: Vec<CLIColorMode>,

    #[arg(long, short = 'b', help = "Color the cell behind each label")]
    pub background: bool,

    #[arg(long, help = "Leave the id out of each label")]
    pub hide_id: bool,

    #[arg(long, short = 'n', help = "Add the color name to each label")]
    pub name: bool,

    #[arg(long, short = 'x', help = "Add the hex value; prints only the 256 palette")]
    pub hex: bool,

    #[arg(long, short = 'r', help = "Add the RGB value; prints only the 256 palette")]
    pub rgb: bool,

    #[arg(long, short = 's', help = "Add the HSL value; prints only the 256 palette")]
    pub hsl: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CLIColorMode {
    #[value(name = "8", help = "8 base colors")]
    Basic8,
    #[value(name = "16", help = "8 base colors, plain and bold")]
    Bold16,
    #[value(name = "256", help = "The full 256 color palette")]
    Extended256,
}

mod convert_into_color_mode {
    use super::{CLIColorMode, ColorMode};

    impl From<CLIColorMode> for ColorMode {
        fn from(mode: CLIColorMode) -> Self {
            match mode {
                CLIColorMode::Basic8 => ColorMode::Basic8,
                CLIColorMode::Bold16 => ColorMode::Bold16,
                CLIColorMode::Extended256 => ColorMode::Extended256,
            }
        }
    }
}

impl From<&CLIArg> for CheatsheetOptions {
    fn from(cli_arg: &CLIArg) -> Self {
        let color_modes = if cli_arg.modes.is_empty() {
            ColorMode::iter().collect()
        } else {
            cli_arg.modes.iter().copied().map(ColorMode::from).collect()
        };

        CheatsheetOptions {
            color_modes,
            drawing_level: if cli_arg.background {
                DrawingLevel::Background
            } else {
                DrawingLevel::Foreground
            },
            display_id: !cli_arg.hide_id,
            display_name: cli_arg.name,
            display_hex: cli_arg.hex,
            display_rgb: cli_arg.rgb,
            display_hsl: cli_arg.hsl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_args_is_the_default_cheatsheet() {
        let cli_arg = CLIArg::try_parse_from(["ansi_cheatsheet"]).unwrap();
        assert_eq!(CheatsheetOptions::from(&cli_arg), CheatsheetOptions::default());
        assert!(!cli_arg.global_options.enable_logging);
    }

    #[test]
    fn test_all_flags() {
        let cli_arg = CLIArg::try_parse_from([
            "ansi_cheatsheet",
            "-m",
            "256",
            "-m",
            "8",
            "--background",
            "--hide-id",
            "-n",
            "-x",
            "-r",
            "-s",
            "-l",
        ])
        .unwrap();

        assert!(cli_arg.global_options.enable_logging);
        assert_eq!(
            CheatsheetOptions::from(&cli_arg),
            CheatsheetOptions {
                color_modes: vec![ColorMode::Extended256, ColorMode::Basic8],
                drawing_level: DrawingLevel::Background,
                display_id: false,
                display_name: true,
                display_hex: true,
                display_rgb: true,
                display_hsl: true,
            }
        );
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(CLIArg::try_parse_from(["ansi_cheatsheet", "--mode", "24"]).is_err());
    }
}
