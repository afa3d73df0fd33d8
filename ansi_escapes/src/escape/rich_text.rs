// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::smallvec;

use crate::{ColorRequest, DrawingLevel, EscapeResult, InlineVecTextAttributes,
            TextAttribute, color_command, format_rich_text, reset};

/// Text wrapped in one escape sequence that sets its attributes and colors, followed
/// by a reset.
///
/// - `attributes` are emitted first, in insertion order.
/// - `foreground` and `background` follow, each resolved like [`crate::color()`].
///
/// ```rust
/// use r3bl_ansi_escapes::{ColorRequest, RichText};
///
/// let text = RichText::new("hello")
///     .bold()
///     .fg(ColorRequest::new("red"))
///     .bg(ColorRequest::new("mediumspringgreen"));
/// assert_eq!(
///     text.try_to_string().unwrap(),
///     "\x1b[1;31;48;5;49mhello\x1b[0m"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText<'a> {
    pub text: &'a str,
    pub attributes: InlineVecTextAttributes,
    pub foreground: Option<ColorRequest>,
    pub background: Option<ColorRequest>,
}

impl<'a> RichText<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            attributes: smallvec![],
            foreground: None,
            background: None,
        }
    }

    #[must_use]
    pub fn attribute(mut self, attribute: TextAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds attributes by name (`bold`, `underscore`, `bright`, ...). Names that are not
    /// attributes are skipped.
    #[must_use]
    pub fn attribute_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            match name.as_ref().parse::<TextAttribute>() {
                Ok(attribute) => self.attributes.push(attribute),
                Err(error) => tracing::debug!(message = "skipping attribute", %error),
            }
        }
        self
    }

    #[must_use]
    pub fn bold(self) -> Self { self.attribute(TextAttribute::Bold) }

    #[must_use]
    pub fn underline(self) -> Self { self.attribute(TextAttribute::Underline) }

    #[must_use]
    pub fn blink(self) -> Self { self.attribute(TextAttribute::Blink) }

    #[must_use]
    pub fn reversed(self) -> Self { self.attribute(TextAttribute::Reversed) }

    #[must_use]
    pub fn concealed(self) -> Self { self.attribute(TextAttribute::Concealed) }

    #[must_use]
    pub fn fg(mut self, request: impl Into<ColorRequest>) -> Self {
        self.foreground = Some(request.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, request: impl Into<ColorRequest>) -> Self {
        self.background = Some(request.into());
        self
    }

    /// Not a [`std::fmt::Display`] impl, since a color may fail to resolve.
    ///
    /// # Errors
    ///
    /// The first error from resolving the foreground or the background.
    pub fn try_to_string(&self) -> EscapeResult<String> {
        let mut commands: Vec<String> =
            self.attributes.iter().map(ToString::to_string).collect();

        for (request, drawing_level) in [
            (&self.foreground, DrawingLevel::Foreground),
            (&self.background, DrawingLevel::Background),
        ] {
            if let Some(request) = request {
                commands.push(color_command(request, drawing_level)?.to_string());
            }
        }

        Ok(format!("{}{}{}", format_rich_text(commands), self.text, reset()))
    }

    /// Prints [`Self::try_to_string()`] followed by a newline.
    ///
    /// # Errors
    ///
    /// See [`Self::try_to_string()`].
    pub fn println(&self) -> EscapeResult<()> {
        println!("{}", self.try_to_string()?);
        Ok(())
    }
}
