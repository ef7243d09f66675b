use crate::invoke::Invoke;
use crate::list::List;
use crate::metadata::Metadata;
use crate::namespaces::Namespaces;
use crate::remove::Remove;
use crate::store::Store;
use crate::watch::Watch;
use crate::{CommandAppend, State};
use clap::{App, AppSettings, Arg, ArgMatches};
use utility::{Error, Result};

const WELCOME_MSG: &str = r#"  ___                   _____           ____      _   _ ___
 / _ \ _ __   ___ _ __ |  ___|_ _  __ _/ ___|    | | | |_ _|
| | | | '_ \ / _ \ '_ \| |_ / _` |/ _` \___ \    | | | || |
| |_| | |_) |  __/ | | |  _| (_| | (_| |___) |   | |_| || |
 \___/| .__/ \___|_| |_|_|  \__,_|\__,_|____/     \___/|___|
      |_|


Watch, invoke and manage your OpenFaaS functions from the terminal"#;

pub fn build_cli() -> App<'static, 'static> {
    let app = App::new("faas-ui")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::VersionlessSubcommands)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::ColoredHelp)
        .setting(AppSettings::DeriveDisplayOrder)
        .global_settings(&[AppSettings::ColoredHelp])
        .about(WELCOME_MSG)
        .arg(
            Arg::with_name("gateway")
                .long("gateway")
                .short("g")
                .takes_value(true)
                .global(true)
                .help("Gateway URL starting with http(s)://"),
        )
        .arg(
            Arg::with_name("namespace")
                .long("namespace")
                .short("n")
                .takes_value(true)
                .global(true)
                .help("Namespace functions are listed and managed in"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .takes_value(true)
                .global(true)
                .help("Path of the dashboard config file"),
        );

    let app = Watch::append_subcommand(app);
    let app = List::append_subcommand(app);
    let app = Invoke::append_subcommand(app);
    let app = Namespaces::append_subcommand(app);
    let app = Store::append_subcommand(app);
    let app = Metadata::append_subcommand(app);
    let app = Remove::append_subcommand(app);
    app
}

pub async fn run(args: &ArgMatches<'_>) -> Result<()> {
    match dispatch_command(args).await {
        Ok(_) => Err(Error::Custom(
            "command not matched please contact the development team".to_string(),
        )),
        Err(s) => match s {
            State::Matched => Ok(()),
            State::Error(e) => Err(e),
            state => Err(Error::Custom(state.to_string())),
        },
    }
}

pub async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
    Watch::dispatch_command(args).await?;
    List::dispatch_command(args).await?;
    Invoke::dispatch_command(args).await?;
    Namespaces::dispatch_command(args).await?;
    Store::dispatch_command(args).await?;
    Metadata::dispatch_command(args).await?;
    Remove::dispatch_command(args).await
}
