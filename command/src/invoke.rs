use crate::context::Context;
use crate::{CommandAppend, State};
use clap::{App, Arg, ArgMatches, SubCommand};
use dashboard::invocation::InvocationStatus;
use dashboard::ContentMode;
use std::io::{Read, Write};
use utility::Error;

pub(crate) struct Invoke;

impl CommandAppend for Invoke {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("invoke")
                .about(
                    r#"Invokes an OpenFaaS function and reads from STDIN for the body of the request
	Example:  echo hello | faas-ui invoke echo
  faas-ui invoke nodeinfo --content-type json < request.json
  faas-ui invoke qrcode --content-type binary < url.txt"#,
                )
                .arg_from_usage("<NAME> 'Name of the deployed function'")
                .arg(
                    Arg::with_name("content-type")
                        .long("content-type")
                        .takes_value(true)
                        .possible_values(&["text", "json", "binary"])
                        .help("How the request is sent and the response is read back, binary responses are saved to the download directory"),
                ),
        );
        app
    }
}

impl Invoke {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(i_args) = args.subcommand_matches("invoke") {
            let context = Context::from_args(args, i_args)?;
            let function_name = i_args.value_of("NAME").ok_or_else(|| {
                State::Custom("you must set function name using NAME".to_string())
            })?;
            let mode = match i_args.value_of("content-type") {
                Some(mode) => Some(mode.parse::<ContentMode>()?),
                None => None,
            };

            let dashboard = context.dashboard()?;
            dashboard.refresh_functions().await?;
            dashboard.select_function(function_name).ok_or_else(|| {
                State::Error(Error::NotFound(format!(
                    "{} in namespace {:?}",
                    function_name, context.namespace
                )))
            })?;

            let mut function_input = Vec::new();
            std::io::stdin()
                .read_to_end(&mut function_input)
                .map_err(|e| State::Custom(format!("unable to read standard input: {}", e)))?;

            dashboard.set_request(function_input);
            if let Some(mode) = mode {
                dashboard.set_content_mode(mode);
            }

            let status = dashboard.fire_invocation().await?;
            let state = dashboard.invocation();
            if let Some(seconds) = state.round_trip_seconds() {
                tracing::info!(function = %function_name, seconds, "round trip");
            }
            match status {
                InvocationStatus::Failed { message, .. } => Err(State::Custom(message)),
                _ => {
                    if let Some(path) = state.saved_as() {
                        eprintln!("saved to {}", path.display());
                    }
                    let mut out = std::io::stdout();
                    writeln!(out, "{}", state.response())
                        .map_err(|e| State::Custom(e.to_string()))?;
                    Err(State::Matched)
                }
            }
        } else {
            Ok(())
        }
    }
}
