//! Interactive mode: read queries from stdin until EOF or `/quit`.

use super::commands::{parse_repl_input, render_help, show_account, ReplInput, SlashCommand};
use super::run_query;
use filplorer::build_info;
use filplorer::config::{Config, ConfigSource};
use filplorer::session::QuerySession;
use filplorer::ui::settings;
use filplorer::ui::RenderSink;
use tokio::io::{AsyncBufReadExt, BufReader};

pub(crate) async fn run_repl_mode(
    renderer: &dyn RenderSink,
    config: &Config,
    session: &mut QuerySession,
    source: &ConfigSource,
) -> i32 {
    render_banner(renderer, config, session, source);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        renderer.prompt();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                eprintln!();
                return 0;
            }
            Err(err) => {
                renderer.error(&format!("failed to read input: {err}"));
                return 1;
            }
        };

        match parse_repl_input(&line) {
            ReplInput::Empty => {}
            ReplInput::Command(SlashCommand::Quit) => return 0,
            ReplInput::Command(SlashCommand::Help) => render_help(renderer),
            ReplInput::Command(SlashCommand::Account) => {
                if let Err(err) = show_account(renderer, config, session).await {
                    renderer.error(&err.to_string());
                }
            }
            ReplInput::Command(SlashCommand::Unknown(name)) => {
                renderer.warn(&format!("unknown command /{name}; try /help"));
            }
            ReplInput::Query(query) => {
                // The session is idle again here whether or not the run failed.
                if let Err(err) = run_query(renderer, config, session, &query).await {
                    renderer.error(&err.to_string());
                }
            }
        }
    }
}

fn render_banner(
    renderer: &dyn RenderSink,
    config: &Config,
    session: &QuerySession,
    source: &ConfigSource,
) {
    renderer.header(&build_info::banner_version());
    renderer.field(
        "network",
        &format!("{} (chain {})", config.network.name, config.network.chain_id),
    );
    renderer.field("contract", &session.poller().contract().address().to_string());
    let wallet = match session.wallet_session() {
        Some(wallet) => wallet.account.to_string(),
        None => format!("{} with /account", settings::LABEL_CONNECT),
    };
    renderer.field("wallet", &wallet);
    renderer.field("config", &config_source_label(source));
}

fn config_source_label(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Explicit(path) | ConfigSource::Global(path) => path.display().to_string(),
        ConfigSource::Local => "./filplorer.toml".to_string(),
        ConfigSource::BuiltInDefaults => "built-in defaults".to_string(),
    }
}
