//! Build metadata baked in by `build.rs`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const GIT_COMMIT: &str = env!("FILPLORER_BUILD_GIT_HASH");

pub const BUILD_TIMESTAMP: &str = env!("FILPLORER_BUILD_TIMESTAMP");

/// Appended to `filplorer --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build:\n  commit: ",
    env!("FILPLORER_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("FILPLORER_BUILD_TIMESTAMP")
);

/// One-line summary for the interactive banner.
pub fn banner_version() -> String {
    format!("v{VERSION} ({GIT_COMMIT})")
}

/// Body of `filplorer --version`; clap prefixes the binary name.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("FILPLORER_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("FILPLORER_BUILD_TIMESTAMP")
);
