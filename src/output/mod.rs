//! User-facing output
//!
//! [`OutputWriter`] abstracts where messages go: the CLI prints colored lines
//! to stdout/stderr, the TUI buffers them for its status bar. The formatting
//! helpers render videos and facets for the non-interactive commands.

use crate::facets::{Category, Method};
use crate::search::VideoItem;
use colored::Colorize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Trait for output operations
///
/// # Examples
///
/// ```
/// use khana::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.success("Configuration saved");
/// output.info("Using endpoint https://www.googleapis.com");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Clear all messages (for TUI status bars)
    fn clear(&self);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only errors and plain writes are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "!".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }

    fn clear(&self) {}
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

const MAX_BUFFERED: usize = 100;

/// Buffered writer for the TUI status bar
///
/// Messages expire after a TTL so the status bar falls back to its hints.
///
/// # Examples
///
/// ```
/// use khana::output::{MessageLevel, OutputWriter, StatusBarWriter};
///
/// let writer = StatusBarWriter::new();
/// writer.success("Copied link");
/// assert_eq!(
///     writer.latest_message(),
///     Some((MessageLevel::Success, "Copied link".to_string()))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StatusBarWriter {
    messages: Arc<Mutex<Vec<(MessageLevel, String, Instant)>>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Create a status bar writer with the default TTL (5 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(5))
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(MessageLevel, String, Instant)>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Messages that have not expired yet, oldest first
    #[must_use]
    pub fn recent_messages(&self) -> Vec<(MessageLevel, String)> {
        let now = Instant::now();
        self.lock()
            .iter()
            .filter(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
            .collect()
    }

    /// The most recent message that has not expired
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        let now = Instant::now();
        self.lock()
            .iter()
            .rev()
            .find(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.recent_messages().len()
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        let mut messages = self.lock();
        messages.push((level, message.to_string(), Instant::now()));

        if messages.len() > MAX_BUFFERED {
            messages.drain(0..MAX_BUFFERED / 2);
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

/// Publish date as `YYYY-MM-DD`, or `"unknown date"`
#[must_use]
pub fn publish_date(video: &VideoItem) -> String {
    video
        .published_at
        .map_or_else(|| "unknown date".to_string(), |date| date.format("%Y-%m-%d").to_string())
}

/// First `max_chars` characters of `text` on one line, with an ellipsis if cut
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Format one search result for the `search` command
///
/// Quiet mode prints only the watch URL so the output can be piped.
#[must_use]
pub fn video_line(index: usize, video: &VideoItem, quiet: bool) -> String {
    if quiet {
        return video.watch_url();
    }
    format!(
        "{:>2}. {}\n    {} · {} · {}",
        index + 1,
        video.title.bold(),
        video.channel.cyan(),
        publish_date(video).dimmed(),
        video.watch_url().underline()
    )
}

/// Format a method for the `facets` command
#[must_use]
pub fn method_line(method: &Method, active: bool) -> String {
    let marker = if active { "*" } else { " " };
    format!(
        "{marker} {:<12} {} {}",
        method.id.green(),
        method.label,
        format!("(prefix: \"{}\")", method.query_prefix).dimmed()
    )
}

/// Format a category and its subcategories for the `facets` command
#[must_use]
pub fn category_block(category: &Category, active: bool) -> String {
    let marker = if active { "*" } else { " " };
    let mut block = format!("{marker} {:<12} {}", category.id.green(), category.label);

    if category.subcategories.is_empty() {
        block.push_str(&format!("\n      {}", "(no subcategories)".dimmed()));
    }
    for sub in category.subcategories {
        block.push_str(&format!("\n      {:<22} {}", sub.name, format!("\"{}\"", sub.term).dimmed()));
    }
    block
}
