//! Shared CLI output helpers.
//!
//! Human-readable output goes to stdout with colored symbols. In JSON mode
//! commands print one JSON document instead and status lines are suppressed.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print a section header.
pub fn section(title: &str) {
    if suppressed(read_config()) {
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Print an aligned key/value line.
pub fn field(label: &str, value: impl Display) {
    if suppressed(read_config()) {
        return;
    }
    println!("  {:<22} {}", label.dimmed(), value);
}

pub fn success(message: &str) {
    if suppressed(read_config()) {
        return;
    }
    println!("  {} {}", "✓".green(), message);
}

/// Warnings go to stderr and are shown in every mode.
pub fn warning(message: &str) {
    eprintln!("  {} {}", "⚠".yellow(), message);
}

/// Errors always go to stderr.
pub fn error(message: &str) {
    eprintln!("  {} {}", "✗".red(), message);
}

pub fn note(message: &str) {
    if suppressed(read_config()) {
        return;
    }
    println!("  {}", message.dimmed());
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    if suppressed(read_config()) {
        return;
    }
    println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
}

/// Print multiple lines of content, each indented.
///
/// Unlike the status helpers this still prints in quiet mode: it carries the
/// command's actual result.
pub fn lines(content: &str) {
    if read_config().json {
        return;
    }
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a JSON value directly.
pub fn json_output(value: &serde_json::Value) {
    println!("{value}");
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.cyan())
}
