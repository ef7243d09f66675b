use crate::context::Context;
use crate::{CommandAppend, State};
use clap::{App, ArgMatches, SubCommand};

pub(crate) struct Namespaces;

impl CommandAppend for Namespaces {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("namespaces")
                .alias("ns")
                .about(
                    r#"Lists OpenFaaS namespaces either on a local or remote gateway
	Example:  faas-ui namespaces
  faas-ui namespaces --gateway https://127.0.0.1:8080"#,
                ),
        );
        app
    }
}

impl Namespaces {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(ns_args) = args.subcommand_matches("namespaces") {
            let context = Context::from_args(args, ns_args)?;
            let dashboard = context.dashboard()?;
            dashboard.load_namespaces().await?;

            let namespace = dashboard.session().namespace();
            print_namespaces(namespace.all(), namespace.selected());

            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

fn print_namespaces(namespaces: &[String], selected: &str) {
    println!("Namespaces:\n");
    for ns in namespaces {
        if ns == selected {
            println!(" * {}", ns);
        } else {
            println!(" - {}", ns);
        }
    }
}
