//! Terminal UI: renderer, spinner, and the render contract used by the app.

pub mod progress;
pub mod renderer;
pub mod run_view;
pub mod settings;

pub use progress::ProgressHandle;
pub use renderer::Renderer;
pub use run_view::TerminalRunView;

/// Injectable rendering interface used by the app layer.
///
/// `Renderer` is the terminal implementation; tests substitute a recording
/// sink without touching stdout/stderr.
pub trait RenderSink: Send + Sync {
    fn prompt(&self);
    fn transcript_line(&self, line: &str);
    fn step(&self, role: &str, content: &str);
    fn progress(&self, label: &str) -> ProgressHandle;
    fn header(&self, status: &str);
    fn field(&self, key: &str, value: &str);
    fn link(&self, key: &str, url: &str);
    fn activity(&self, text: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

impl RenderSink for Renderer {
    fn prompt(&self) {
        self.prompt();
    }

    fn transcript_line(&self, line: &str) {
        self.transcript_line(line);
    }

    fn step(&self, role: &str, content: &str) {
        self.step(role, content);
    }

    fn progress(&self, label: &str) -> ProgressHandle {
        self.progress(label)
    }

    fn header(&self, status: &str) {
        self.header(status);
    }

    fn field(&self, key: &str, value: &str) {
        self.field(key, value);
    }

    fn link(&self, key: &str, url: &str) {
        self.link(key, url);
    }

    fn activity(&self, text: &str) {
        self.activity(text);
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }
}
