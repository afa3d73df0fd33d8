// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_ansi_escapes::{AnsiEscapeError, CheatsheetOptions, ColorArg, ColorRequest,
                        DrawingLevel, RichText, SGR_RESET, background, bold, clear_line,
                        color, cursor_up, render_cheatsheet};

#[test]
fn colors_at_each_depth() {
    assert_eq!(color("red", DrawingLevel::Foreground).unwrap(), "\x1b[31m");
    assert_eq!(
        color(ColorRequest::new("red").bold(true), DrawingLevel::Background).unwrap(),
        "\x1b[41;1m"
    );
    assert_eq!(
        color(ColorRequest::new("red").blink(true), DrawingLevel::Background).unwrap(),
        "\x1b[48;5;9m"
    );
    assert_eq!(
        background(ColorRequest::default().hsl((161, 100, 50))).unwrap(),
        "\x1b[48;5;49m"
    );
}

#[test]
fn drawing_level_from_user_input() {
    let level: DrawingLevel = "background".parse().unwrap();
    assert_eq!(color("blue", level).unwrap(), "\x1b[44m");

    let level = DrawingLevel::try_from(0_i64).unwrap();
    assert_eq!(color("blue", level).unwrap(), "\x1b[34m");

    assert_eq!(
        "sideways".parse::<DrawingLevel>(),
        Err(AnsiEscapeError::InvalidDrawingLevel {
            value: "sideways".into()
        })
    );
}

#[test]
fn untyped_arguments() {
    let request = ColorRequest::new(ColorArg::Values(vec![0, 255, 175]));
    assert_eq!(color(request, DrawingLevel::Foreground).unwrap(), "\x1b[38;5;49m");

    let request = ColorRequest::new(ColorArg::Values(vec![0, 255]));
    assert!(matches!(
        request.resolve(),
        Err(AnsiEscapeError::ArgumentType { .. })
    ));

    let request = ColorRequest::new("#ggg000");
    assert_eq!(
        request.resolve(),
        Err(AnsiEscapeError::UnknownColor {
            key: "#ggg000".into()
        })
    );
}

#[test]
fn composing_a_status_line() {
    let status = RichText::new("ok")
        .attribute_names(["bold", "sparkly"])
        .fg(ColorRequest::new("green"))
        .try_to_string()
        .unwrap();

    let redraw = format!("{}{}{status}", cursor_up(1), clear_line());
    assert_eq!(redraw, "\x1b[1A\x1b[2K\x1b[1;32mok\x1b[0m");
    assert!(redraw.ends_with(SGR_RESET));
    assert_eq!(bold(), "\x1b[1m");
}

#[test]
fn cheatsheet_renders() {
    let rendered = render_cheatsheet(&CheatsheetOptions::default()).unwrap();
    assert!(rendered.contains("\x1b[38;5;255m255:"));
}
