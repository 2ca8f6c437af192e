//! Filplorer: ask an on-chain agent a question from the terminal.
//!
//! A query is submitted to the agent contract through an external wallet,
//! the run id is read from the transaction receipt, and the run's message
//! history is polled until the contract reports it finished.
//!
//! # Quick start
//!
//! ```no_run
//! use filplorer::agent::NullSink;
//! use filplorer::config::load_config;
//! use filplorer::session::QuerySession;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! let mut session = QuerySession::from_config(&config)?;
//! session.submit("What is on Filecoin?", &mut NullSink).await?;
//! for line in session.transcript().lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod build_info;
pub mod config;
pub mod error;
pub mod logging;
pub mod rpc;
pub mod session;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
pub mod wallet;
