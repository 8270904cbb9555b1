//! Logging through `tracing-subscriber`
//!
//! Console and file output can be enabled independently. The file takes
//! one of three layouts (full, compact, json) and its path may carry a
//! `{timestamp}` placeholder for one file per run.

pub mod config;
pub(crate) mod writer;


pub use config::*;

use std::io::IsTerminal;
use tracing_subscriber::{Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use writer::open_log_file;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber for this run
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    let filter = config.filter();

    tracing_subscriber::registry()
        .with(output_layers(&config)?)
        .with(filter)
        .try_init()?;

    Ok(())
}

/// File layer first: ANSI codes from the console layer otherwise end up in
/// span fields written to the file (tokio-rs/tracing#1817).
pub(crate) fn output_layers(config: &LoggerConfig) -> anyhow::Result<Vec<BoxedLayer>> {
    let mut layers = Vec::with_capacity(2);

    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }
    if config.console.enabled {
        layers.push(console_layer(&config.console));
    }

    Ok(layers)
}

fn file_layer(config: &FileConfig) -> anyhow::Result<BoxedLayer> {
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(open_log_file(config)?);

    Ok(match config.format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    })
}

fn console_layer(config: &ConsoleConfig) -> BoxedLayer {
    fmt::layer()
        .with_ansi(config.colored && std::io::stdout().is_terminal())
        .with_target(false)
        .boxed()
}
