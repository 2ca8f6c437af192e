//! Terminal view of a running query.
//!
//! Keeps the busy spinner alive while the run is in flight and pauses it
//! whenever a step trace or transcript line has to be printed.

use super::settings;
use super::{ProgressHandle, RenderSink};
use crate::agent::{AgentRunEvent, RunEventSink};

pub struct TerminalRunView<'a> {
    renderer: &'a dyn RenderSink,
    show_steps: bool,
    spinner: Option<ProgressHandle>,
}

impl<'a> TerminalRunView<'a> {
    /// Start the busy spinner and return a view ready to receive events.
    pub fn start(renderer: &'a dyn RenderSink, show_steps: bool) -> Self {
        Self {
            renderer,
            show_steps,
            spinner: Some(renderer.progress(settings::LABEL_BUSY)),
        }
    }

    /// Stop the spinner for good.
    pub fn finish(&mut self) {
        if let Some(mut spinner) = self.spinner.take() {
            spinner.finish();
        }
    }

    fn paused(&mut self, print: impl FnOnce(&dyn RenderSink)) {
        let was_running = self.spinner.is_some();
        self.finish();
        print(self.renderer);
        if was_running {
            self.spinner = Some(self.renderer.progress(settings::LABEL_BUSY));
        }
    }
}

impl RunEventSink for TerminalRunView<'_> {
    fn emit(&mut self, event: AgentRunEvent) {
        match event {
            AgentRunEvent::Submitted { tx_hash } => {
                self.paused(|r| r.field("tx", &tx_hash.to_string()));
            }
            AgentRunEvent::Confirmed { block_number, .. } => {
                if let Some(block) = block_number {
                    self.paused(|r| r.activity(&format!("confirmed in block {block}")));
                }
            }
            AgentRunEvent::RunCreated { run_id } => {
                self.paused(|r| r.field("run", &run_id.to_string()));
            }
            AgentRunEvent::Message { role, content, .. } => {
                if self.show_steps {
                    self.paused(|r| r.step(&role, &content));
                }
            }
            AgentRunEvent::TranscriptLines { lines } => {
                self.paused(|r| {
                    for line in &lines {
                        r.transcript_line(line);
                    }
                });
            }
            AgentRunEvent::NoRunId { .. }
            | AgentRunEvent::Polled { .. }
            | AgentRunEvent::Finished { .. } => {}
        }
    }
}

impl Drop for TerminalRunView<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}
