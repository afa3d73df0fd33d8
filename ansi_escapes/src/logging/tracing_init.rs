// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, WriterConfig};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Installs a global subscriber that writes events at or above `level_filter` to the
/// places named by `writer_config`. The library only emits events; only binaries should
/// call this.
///
/// # Errors
///
/// - The log file's folder can not be determined.
/// - A global subscriber is already installed.
pub fn try_initialize_logging(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<()> {
    let layers = try_create_layers(level_filter, &writer_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "logging initialized", level = %level_filter, writer_config = ?writer_config);

    Ok(())
}

/// Returns the layers without installing them.
///
/// # Errors
///
/// See [`try_create_file_layer()`].
pub fn try_create_layers(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut acc: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    if let Some(layer) = create_display_layer(level_filter, writer_config) {
        acc.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, writer_config)? {
        acc.push(layer);
    }

    Ok(acc)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    writer_config
        .display_preference()
        .map(|display_pref| -> Box<DynLayer<S>> {
            match display_pref {
                DisplayPreference::Stdout => Box::new(
                    fmt_layer
                        .with_writer(std::io::stdout)
                        .with_filter(level_filter),
                ),
                DisplayPreference::Stderr => Box::new(
                    fmt_layer
                        .with_writer(std::io::stderr)
                        .with_filter(level_filter),
                ),
            }
        })
}

/// This erases the concrete type of the writer, and returns a boxed layer. Escape
/// sequences are not written to the file.
///
/// # Errors
///
/// The path has no parent folder or no file name.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let Some(path) = writer_config.file_path() else {
        return Ok(None);
    };

    let file = try_create_file_appender(path)?;
    Ok(Some(Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    )))
}

fn try_create_file_appender(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!("Can't access the folder of {}", path.display())
    })?;

    let file_name = path
        .file_name()
        .ok_or_else(|| miette::miette!("Can't access file name {}", path.display()))?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_display_layer() {
        let writer_config = WriterConfig::Display(DisplayPreference::Stdout);
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            create_display_layer(LevelFilter::DEBUG, &writer_config);
        assert!(layer.is_some());

        let writer_config = WriterConfig::File("unused.log".into());
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            create_display_layer(LevelFilter::DEBUG, &writer_config);
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("ansi_escapes.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let writer_config = WriterConfig::File(file_path.clone());
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, &writer_config).unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_both_layers() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("ansi_escapes.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let writer_config = WriterConfig::DisplayAndFile(DisplayPreference::Stderr, file_path);
        let layers = try_create_layers(LevelFilter::TRACE, &writer_config).unwrap();
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn test_file_path_without_name_is_an_error() {
        let writer_config = WriterConfig::File("/".into());
        let result: miette::Result<Option<Box<DynLayer<tracing_subscriber::Registry>>>> =
            try_create_file_layer(LevelFilter::DEBUG, &writer_config);
        assert!(result.is_err());
    }
}
