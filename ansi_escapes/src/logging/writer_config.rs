// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Where log events go. A file path is opened once and appended to; it never rolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    /// Keeps log output apart from escape sequences printed to stdout.
    #[default]
    Stderr,
}

impl WriterConfig {
    #[must_use]
    pub fn display_preference(&self) -> Option<DisplayPreference> {
        match self {
            WriterConfig::Display(pref) | WriterConfig::DisplayAndFile(pref, _) => {
                Some(*pref)
            }
            WriterConfig::File(_) => None,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        match self {
            WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => {
                Some(path.as_str())
            }
            WriterConfig::Display(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accessors() {
        let config = WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".into());
        assert_eq!(config.display_preference(), Some(DisplayPreference::Stdout));
        assert_eq!(config.file_path(), Some("a.log"));

        let config = WriterConfig::Display(DisplayPreference::default());
        assert_eq!(config.display_preference(), Some(DisplayPreference::Stderr));
        assert_eq!(config.file_path(), None);

        let config = WriterConfig::File("b.log".into());
        assert_eq!(config.display_preference(), None);
        assert_eq!(config.file_path(), Some("b.log"));
    }
}
