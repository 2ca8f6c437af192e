//! Process setup and mode dispatch.

use super::commands::{run_init, show_account};
use super::exec_mode::run_exec_mode;
use super::repl_mode::run_repl_mode;
use crate::cli::{Args, Command};
use filplorer::config::{apply_overrides, load_config_with_source};
use filplorer::logging::init_logging;
use filplorer::session::QuerySession;
use filplorer::ui::Renderer;
use tracing::debug;

/// Run the CLI and return the process exit code.
pub(crate) async fn run(args: Args) -> i32 {
    if let Err(err) = init_logging(args.verbose) {
        eprintln!("warning: {err}");
    }
    // Spinner redraws would garble interleaved log lines.
    Renderer::set_progress_enabled(args.verbose == 0);

    if let Some(Command::Init { force }) = args.command {
        return run_init(&Renderer::new(!args.no_color), force);
    }

    let (mut config, source) = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };
    if let Err(err) = apply_overrides(&mut config, &args.overrides()) {
        eprintln!("error: {err}");
        return 1;
    }
    debug!(?source, rpc = %config.network.rpc_url, wallet = %config.wallet.url, "config loaded");

    let renderer = Renderer::new(config.display.color);
    let mut session = match QuerySession::from_config(&config) {
        Ok(session) => session,
        Err(err) => {
            renderer.error(&err.to_string());
            return 1;
        }
    };

    if let Some(Command::Account) = args.command {
        return match show_account(&renderer, &config, &mut session).await {
            Ok(()) => 0,
            Err(err) => {
                renderer.error(&err.to_string());
                1
            }
        };
    }

    match args.prompt.as_deref() {
        Some(query) => run_exec_mode(&renderer, &config, &mut session, query).await,
        None => run_repl_mode(&renderer, &config, &mut session, &source).await,
    }
}

