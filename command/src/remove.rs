use crate::context::Context;
use crate::{CommandAppend, State};
use clap::{App, ArgMatches, SubCommand};
use dashboard::DeleteOutcome;
use std::io::{BufRead, Write};
use utility::Error;

pub(crate) struct Remove;

impl CommandAppend for Remove {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("remove")
                .aliases(&["rm", "delete"])
                .about(
                    r#"Removes/deletes a deployed OpenFaaS function after asking for confirmation
	Example:  faas-ui remove url-ping
  faas-ui remove img2ansi --yes --gateway=http://remote-site.com:8080"#,
                )
                .args_from_usage(
                    "<FUNCTION-NAME>   'Name of the function to delete'
                     -y, --yes         'Do not ask for confirmation'",
                ),
        );

        app
    }
}

impl Remove {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(r_args) = args.subcommand_matches("remove") {
            let context = Context::from_args(args, r_args)?;
            let function_name = r_args.value_of("FUNCTION-NAME").unwrap_or_default();
            let assume_yes = r_args.is_present("yes");

            let dashboard = context.dashboard()?;
            dashboard.refresh_functions().await?;
            dashboard
                .select_function(function_name)
                .ok_or_else(|| State::Error(Error::NotFound(function_name.to_string())))?;

            let confirm = |prompt: &str| assume_yes || ask(prompt);
            match dashboard.delete_selected(&confirm).await? {
                DeleteOutcome::Deleted => {
                    colour::green!("Deleted: {}.{}\n", function_name, context.namespace)
                }
                DeleteOutcome::Cancelled => println!("Cancelled"),
            }

            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

/// prompts on stderr and reads a y/N answer from stdin
fn ask(prompt: &str) -> bool {
    eprint!("{} [y/N] ", prompt);
    let _ = std::io::stderr().flush();
    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_yes(answer.as_str())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
