use crate::dir::SignupDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

const GUI_LOG_FILE_NAME: &str = "signup-gui.log";

pub fn setup_logger(
    log_level: filter::LevelFilter,
    datadir: &SignupDirectory,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut log_path = datadir.path().to_path_buf();
    log_path.push(GUI_LOG_FILE_NAME);

    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Add a filter to *both* layers that rejects spans and
                // events whose targets start with specific prefixes.
                .with_filter(filter::filter_fn(|metadata| is_app_target(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}

fn is_app_target(target: &str) -> bool {
    const NOISY: [&str; 17] = [
        "iced_wgpu",
        "iced_winit",
        "iced_graphics",
        "iced_runtime",
        "iced_core",
        "wgpu_core",
        "wgpu_hal",
        "naga",
        "winit",
        "cosmic_text",
        "mio",
        "polling",
        "calloop",
        "rustls",
        "hyper",
        "reqwest",
        "tokio",
    ];
    !NOISY.iter().any(|prefix| target.starts_with(prefix))
}

/// Convert the level of the configuration file.
pub fn level_filter(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noisy_targets_are_filtered() {
        assert!(is_app_target("signup_gui::app"));
        assert!(is_app_target("signup::submission"));
        assert!(!is_app_target("wgpu_core::device"));
        assert!(!is_app_target("reqwest::connect"));
    }

    #[test]
    fn config_level_conversion() {
        assert_eq!(level_filter(log::LevelFilter::Debug), LevelFilter::DEBUG);
        assert_eq!(level_filter(log::LevelFilter::Off), LevelFilter::OFF);
    }
}
