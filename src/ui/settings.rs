//! Centralized UI settings for the terminal interface.
//!
//! The single place to tweak prompt strings, labels, colors, and spinner
//! behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / prompt
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const PROMPT_SYMBOL: &str = ">";
pub const PROMPT_PLAIN: &str = "> ";

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const LABEL_APP: &str = "filplorer";
pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
/// Trace label for assistant-authored messages.
pub const LABEL_THOUGHT: &str = "THOUGHT";
/// Trace label for every other role.
pub const LABEL_STEP: &str = "STEP";
/// Spinner label while a run is in flight.
pub const LABEL_BUSY: &str = "Searching...";
pub const LABEL_CONNECT: &str = "Connect";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_APP_LABEL: Color = Color::Green;
pub const COLOR_THOUGHT: Color = Color::Cyan;
pub const COLOR_STEP: Color = Color::Yellow;
pub const COLOR_TRACE_TEXT: Color = Color::DarkGrey;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::White;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_LINK: Color = Color::Blue;

// ---------------------------------------------------------------------------
// Spinner
// ---------------------------------------------------------------------------

pub const PROGRESS_CLEAR_LINE: &str = "\r\x1b[2K";
pub const PROGRESS_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const PROGRESS_TICK_MS: u64 = 100;
pub const COLOR_PROGRESS_FRAME: Color = Color::Cyan;
pub const COLOR_PROGRESS_LABEL: Color = Color::DarkGrey;
pub const COLOR_PROGRESS_ELAPSED: Color = Color::DarkGrey;

/// Longest single-line preview of a step message.
pub const STEP_PREVIEW_CHARS: usize = 160;
