//! Account and init handlers plus REPL slash-command parsing.

use filplorer::config::{initialize_default_global_config, Config, GlobalConfigInitResult};
use filplorer::error::RunError;
use filplorer::session::QuerySession;
use filplorer::ui::RenderSink;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReplInput {
    Empty,
    Query(String),
    Command(SlashCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SlashCommand {
    Account,
    Help,
    Quit,
    Unknown(String),
}

/// Blank lines and slash commands are recognized after trimming; a query is
/// submitted exactly as typed, minus the line terminator.
pub(crate) fn parse_repl_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplInput::Empty;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return ReplInput::Query(line.trim_end_matches(['\r', '\n']).to_string());
    };
    let name = command.split_whitespace().next().unwrap_or_default();
    ReplInput::Command(match name {
        "account" => SlashCommand::Account,
        "help" => SlashCommand::Help,
        "quit" | "exit" => SlashCommand::Quit,
        other => SlashCommand::Unknown(other.to_string()),
    })
}

pub(crate) fn render_help(renderer: &dyn RenderSink) {
    renderer.activity("Type a question and press Enter to ask the agent.");
    renderer.field("/account", "connect the wallet and show the active account");
    renderer.field("/help", "show this help");
    renderer.field("/quit, /exit", "leave");
}

/// Connect (or reuse the connection) and show the active account.
pub(crate) async fn show_account(
    renderer: &dyn RenderSink,
    config: &Config,
    session: &mut QuerySession,
) -> Result<(), RunError> {
    let wallet = session.connect().await?;
    let account = wallet.account.to_string();
    renderer.field("account", &account);
    renderer.field(
        "network",
        &format!(
            "{} (chain {}, {})",
            config.network.name, wallet.chain_id, config.network.currency
        ),
    );
    renderer.link("explorer", &config.explorer_address_url(&account));
    Ok(())
}

/// `filplorer init [--force]`.
pub(crate) fn run_init(renderer: &dyn RenderSink, force: bool) -> i32 {
    match initialize_default_global_config(force) {
        Ok(GlobalConfigInitResult::Created { path }) => {
            renderer.activity(&format!("wrote default config to {}", path.display()));
            0
        }
        Ok(GlobalConfigInitResult::AlreadyInitialized { path }) => {
            renderer.warn(&format!(
                "{} already exists; pass --force to overwrite it",
                path.display()
            ));
            0
        }
        Ok(GlobalConfigInitResult::Overwritten { path, backup_path }) => {
            renderer.activity(&format!(
                "rewrote {} (previous file saved as {})",
                path.display(),
                backup_path.display()
            ));
            0
        }
        Err(err) => {
            renderer.error(&format!("failed to initialize config: {err}"));
            1
        }
    }
}
