use crate::context::Context;
use crate::{CommandAppend, State};
use clap::{App, Arg, ArgMatches, SubCommand};
use dashboard::registry::{RecordRef, SortKey};
use utility::faas::types::model::FunctionStatus;
use utility::Error;

pub(crate) struct List;

impl CommandAppend for List {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("list")
                .alias("ls")
                .about("Lists OpenFaaS functions either on a local or remote gateway")
                .args_from_usage(
                    "-q ,--quiet              'Quiet mode - print out only the function's ID'
                     -s ,--search [search]    'Only list functions whose name contains this text'",
                )
                .arg(
                    Arg::with_name("sort")
                        .long("sort")
                        .default_value("name")
                        .possible_values(&["name", "invocations"])
                        .takes_value(true)
                        .help(r#"Sort the functions by "name" or "invocations""#),
                )
                .arg(
                    Arg::with_name("output")
                        .long("output")
                        .short("o")
                        .default_value("text")
                        .possible_values(&["text", "json"])
                        .takes_value(true)
                        .help("Output format"),
                ),
        );
        app
    }
}

impl List {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(largs) = args.subcommand_matches("list") {
            let context = Context::from_args(args, largs)?;
            let search = largs.value_of("search").unwrap_or("");
            let sort = parse_sort(largs.value_of("sort").unwrap_or("name"))?;

            let dashboard = context.dashboard()?;
            dashboard.refresh_functions().await?;
            let functions = dashboard.visible(search, sort);

            if largs.is_present("quiet") {
                for function in &functions {
                    println!("{}", function.borrow().name);
                }
            } else if largs.value_of("output") == Some("json") {
                let records: Vec<FunctionStatus> =
                    functions.iter().map(|f| f.borrow().clone()).collect();
                let json = serde_json::to_string_pretty(&records).map_err(Error::from)?;
                println!("{}", json);
            } else {
                print_functions(&functions);
            }
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

pub(crate) fn parse_sort(sort: &str) -> std::result::Result<SortKey, State> {
    match sort {
        "name" => Ok(SortKey::Name),
        "invocations" => Ok(SortKey::Invocations),
        other => Err(State::Custom(format!(
            "sort must be name or invocations, found {}",
            other
        ))),
    }
}

pub(crate) fn print_functions(functions: &[RecordRef]) {
    println!(
        "{}",
        format_with_space("Function", "Invocations", "Replicas", "Ready")
    );
    for function in functions {
        let function = function.borrow();
        println!(
            "{}",
            format_with_space(
                function.name.as_str(),
                function.invocation_count.to_string().as_str(),
                function.replicas.to_string().as_str(),
                if function.ready { "yes" } else { "" },
            )
        );
    }
}

fn format_with_space(str1: &str, str2: &str, str3: &str, str4: &str) -> String {
    format!("{:width$}", str1, width = 30)
        + format!("{:width$}", str2, width = 15).as_str()
        + format!("{:width$}", str3, width = 10).as_str()
        + str4
}
