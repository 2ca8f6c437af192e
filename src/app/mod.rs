//! Binary-local application orchestration.
//!
//! `main.rs` only parses arguments; setup and dispatch live in `entry`, and
//! each mode gets its own module.

pub(crate) mod commands;
pub(crate) mod entry;
pub(crate) mod exec_mode;
pub(crate) mod repl_mode;

use filplorer::agent::RunOutcome;
use filplorer::config::Config;
use filplorer::error::RunError;
use filplorer::session::QuerySession;
use filplorer::ui::{RenderSink, TerminalRunView};

/// Submit one query with the busy spinner and live transcript, then link the
/// transaction on the explorer.
pub(crate) async fn run_query(
    renderer: &dyn RenderSink,
    config: &Config,
    session: &mut QuerySession,
    query: &str,
) -> Result<RunOutcome, RunError> {
    let mut view = TerminalRunView::start(renderer, config.display.show_steps);
    let result = session.submit(query, &mut view).await;
    view.finish();

    if let Ok(outcome) = &result {
        renderer.link(
            "explorer",
            &config.explorer_tx_url(&outcome.tx_hash().to_string()),
        );
    }
    result
}
