//! Terminal output renderer.
//!
//! Transcript lines go to stdout so they can be piped; everything else
//! (traces, status, errors) goes to stderr.

use super::progress::{set_progress_enabled, start_progress, ProgressHandle};
use super::settings;
use crossterm::style::Stylize;

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Globally enable/disable live progress spinners.
    pub fn set_progress_enabled(enabled: bool) {
        set_progress_enabled(enabled);
    }

    /// Print the query prompt indicator (to stderr).
    pub fn prompt(&self) {
        if self.color {
            eprint!(
                "{} ",
                settings::PROMPT_SYMBOL
                    .with(settings::COLOR_APP_LABEL)
                    .bold()
            );
        } else {
            eprint!("{}", settings::PROMPT_PLAIN);
        }
    }

    /// Print one transcript line (to stdout).
    pub fn transcript_line(&self, line: &str) {
        println!("{line}");
    }

    /// Print a message trace: THOUGHT for assistant output, STEP otherwise.
    pub fn step(&self, role: &str, content: &str) {
        let (label, color) = step_label(role);
        let preview = truncate_single_line(content, settings::STEP_PREVIEW_CHARS);
        if self.color {
            eprintln!(
                "\r{}{}: {}",
                settings::INDENT_1,
                label.with(color).bold(),
                preview.with(settings::COLOR_TRACE_TEXT),
            );
        } else {
            eprintln!("\r{}{label}: {preview}", settings::INDENT_1);
        }
    }

    /// Start a spinner with a status label on stderr.
    pub fn progress(&self, label: &str) -> ProgressHandle {
        start_progress(label.to_string(), self.color)
    }

    /// Print the app header with connection status.
    pub fn header(&self, status: &str) {
        if self.color {
            eprintln!(
                "\r{} {}",
                settings::LABEL_APP.with(settings::COLOR_APP_LABEL).bold(),
                status.with(settings::COLOR_FIELD_KEY),
            );
        } else {
            eprintln!("\r{} ({status})", settings::LABEL_APP);
        }
    }

    /// Print one key/value row.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "\r{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE),
            );
        } else {
            eprintln!("\r{}{key}: {value}", settings::INDENT_1);
        }
    }

    /// Print a link row, e.g. an explorer URL.
    pub fn link(&self, key: &str, url: &str) {
        if self.color {
            eprintln!(
                "\r{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                url.with(settings::COLOR_LINK).underlined(),
            );
        } else {
            eprintln!("\r{}{key}: {url}", settings::INDENT_1);
        }
    }

    /// Print lifecycle/status text.
    pub fn activity(&self, text: &str) {
        eprintln!("\r{}{text}", settings::INDENT_1);
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_WARNING);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_ERROR);
        }
    }
}

fn step_label(role: &str) -> (&'static str, crossterm::style::Color) {
    if role == crate::agent::ASSISTANT_ROLE {
        (settings::LABEL_THOUGHT, settings::COLOR_THOUGHT)
    } else {
        (settings::LABEL_STEP, settings::COLOR_STEP)
    }
}

/// Collapse whitespace runs to single spaces and cap at `max_chars`.
pub fn truncate_single_line(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
