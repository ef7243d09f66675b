use crate::cmds::{build_cli, run};
use clap::{App, ArgMatches};

use utility::Error;

pub mod cmds;
pub(crate) mod context;
pub(crate) mod invoke;
pub(crate) mod list;
pub(crate) mod metadata;
pub(crate) mod namespaces;
pub(crate) mod priority;
pub(crate) mod remove;
pub(crate) mod store;
pub(crate) mod watch;

type Result = std::result::Result<(), State>;

#[derive(thiserror::Error, Debug)]
pub enum State {
    #[error("command matched")]
    Matched,
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Error(#[from] Error),
}

/// Parses the process arguments and runs the matching subcommand.
/// Must be polled inside a `tokio::task::LocalSet`.
pub async fn exec() {
    let app = build_cli();
    let args: ArgMatches = app.get_matches();
    if let Err(err) = run(&args).await {
        colour::red!("{}\n", err.to_string());
        std::process::exit(1);
    }
}

pub(crate) trait CommandAppend {
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static>;
}
