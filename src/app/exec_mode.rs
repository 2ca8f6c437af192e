//! One-shot mode: `filplorer "<query>"`.

use super::run_query;
use filplorer::config::Config;
use filplorer::session::QuerySession;
use filplorer::ui::RenderSink;

/// Run a single query and return the process exit code.
pub(crate) async fn run_exec_mode(
    renderer: &dyn RenderSink,
    config: &Config,
    session: &mut QuerySession,
    query: &str,
) -> i32 {
    match run_query(renderer, config, session, query).await {
        Ok(_) => 0,
        Err(err) => {
            renderer.error(&err.to_string());
            1
        }
    }
}
