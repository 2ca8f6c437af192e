//! Messages and the per-run transcript.

/// Role tag the contract uses for model output.
pub const ASSISTANT_ROLE: &str = "assistant";

/// One entry of a run's message history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.role == ASSISTANT_ROLE
    }
}

/// Pair the parallel content/role lists by index.
///
/// A content entry without a matching role gets an empty role; extra roles
/// without content are ignored.
pub fn zip_history(contents: Vec<String>, roles: Vec<String>) -> Vec<Message> {
    let mut roles = roles.into_iter();
    contents
        .into_iter()
        .map(|content| Message {
            role: roles.next().unwrap_or_default(),
            content,
        })
        .collect()
}

/// Visible lines for the current run. Append-only until cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Split `content` on `\n` and append every piece, empty ones included.
    /// Returns the lines just added.
    pub fn append_content(&mut self, content: &str) -> &[String] {
        let start = self.lines.len();
        self.lines.extend(content.split('\n').map(str::to_string));
        &self.lines[start..]
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
