//! Spotify Listening History Analytics Library
//!
//! This library provides functionality for analyzing a user's Spotify listening
//! history. It ingests exported streaming history files (and saved
//! recently-played responses), normalizes them into typed play rows, computes
//! aggregate statistics and renders them as tables and ASCII bar graphs.
//!
//! # Modules
//!
//! - `analysis` - Grouping and aggregation over normalized plays
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Loaders for export files and genre lookups
//! - `spotify` - Spotify data formats and their normalization
//! - `types` - Data structures and type definitions
//! - `utils` - Timestamp parsing, ASCII rendering and other helpers
//!
//! # Example
//!
//! ```
//! use spotstats::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> spotstats::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Reading files from {}", dir.display());
/// info!("Found {} export files", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the program with exit code 1 right after printing. Only the
/// CLI layer uses this; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to load history: {}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as skipped records or empty results
/// that users should notice but that do not stop the program.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
