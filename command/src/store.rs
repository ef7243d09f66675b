use crate::context::Context;
use crate::{CommandAppend, State};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dashboard::store::{CatalogEntry, StoreCatalog};

pub(crate) struct Store;

impl CommandAppend for Store {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("store")
                .about("Browse and deploy functions from the OpenFaaS store")
                .setting(AppSettings::SubcommandRequiredElseHelp)
                .subcommand(
                    SubCommand::with_name("list")
                        .alias("ls")
                        .about("List functions available for the configured platform")
                        .arg_from_usage(
                            "-s ,--search [search] 'Only list functions whose title or description contains this text'",
                        ),
                )
                .subcommand(
                    SubCommand::with_name("deploy")
                        .about("Deploy a function from the store into the selected namespace")
                        .arg_from_usage("<NAME> 'Name of the store function'")
                        .arg_from_usage("--name [name] 'Name the function is deployed under'"),
                ),
        );
        app
    }
}

impl Store {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        let s_args = match args.subcommand_matches("store") {
            Some(s_args) => s_args,
            None => return Ok(()),
        };

        if let Some(l_args) = s_args.subcommand_matches("list") {
            let context = Context::from_args(args, l_args)?;
            let catalog = load_catalog(&context).await?;
            print_catalog(&catalog.search(l_args.value_of("search").unwrap_or("")));
            return Err(State::Matched);
        }

        if let Some(d_args) = s_args.subcommand_matches("deploy") {
            let context = Context::from_args(args, d_args)?;
            let name = d_args.value_of("NAME").unwrap_or_default();
            let catalog = load_catalog(&context).await?;
            let entry = catalog.find(name).ok_or_else(|| {
                State::Custom(format!(
                    "function {} is not available for {} in the store",
                    name, context.config.arch
                ))
            })?;

            let dashboard = context.dashboard()?;
            let mut dialog = dashboard.open_create_dialog().await;
            dialog.from_store(entry);
            if let Some(service) = d_args.value_of("name") {
                dialog.service = service.to_string();
            }

            colour::green!("Deploying: {}\n", dialog.service);
            if let Err(e) = dashboard.create_function(&mut dialog).await {
                let reason = dialog
                    .validation_error()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string());
                return Err(State::Custom(reason));
            }
            return Err(State::Matched);
        }

        Err(State::Custom("unknown store subcommand".to_string()))
    }
}

async fn load_catalog(context: &Context) -> std::result::Result<StoreCatalog, State> {
    let client = context.client()?;
    let catalog = StoreCatalog::load(
        &client,
        context.config.store_url.as_str(),
        context.config.arch.as_str(),
    )
    .await;
    match catalog.message() {
        Some(message) => Err(State::Custom(message.to_string())),
        None => Ok(catalog),
    }
}

fn print_catalog(entries: &[&CatalogEntry]) {
    println!(
        "{}{}",
        format!("{:width$}", "FUNCTION", width = 30),
        "DESCRIPTION"
    );
    for entry in entries {
        println!(
            "{}{}",
            format!("{:width$}", entry.function.name, width = 30),
            entry.function.description
        );
    }
}
