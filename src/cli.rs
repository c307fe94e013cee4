use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
///
/// The scene itself is fixed at compile time; the flags only choose where
/// the frame goes and how chatty the run is.
#[derive(Parser)]
#[command(name = "hypermarch")]
#[command(about = "A 4D hypersphere sphere-tracing renderer in Rust")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Output file path (.ppm for plain-text P3, .png for PNG)
    #[arg(
        short,
        long,
        default_value = "output.ppm",
        help = "Output file path (.ppm for plain-text P3, .png for PNG)"
    )]
    pub output: String,
}
