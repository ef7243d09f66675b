use crate::context::Context;
use crate::list::{parse_sort, print_functions};
use crate::{CommandAppend, State};
use clap::{App, Arg, ArgMatches, SubCommand};
use dashboard::registry::SortKey;
use dashboard::Dashboard;
use proxy::client::Client;
use std::rc::Rc;
use tokio::task::spawn_local;
use tokio::time::interval;
use tracing::{info, warn};

pub(crate) struct Watch;

impl CommandAppend for Watch {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("watch")
                .about(
                    r#"Polls the gateway and prints the function list whenever it is refreshed
	Example:  faas-ui watch
  faas-ui watch --function figlet --sort invocations"#,
                )
                .args_from_usage(
                    "-f ,--function [function] 'Function whose readiness is polled'
                     -s ,--search [search]     'Only show functions whose name contains this text'
                     --ticks [ticks]           'Stop after this many list refreshes'",
                )
                .arg(
                    Arg::with_name("sort")
                        .long("sort")
                        .default_value("name")
                        .possible_values(&["name", "invocations"])
                        .takes_value(true)
                        .help(r#"Sort the functions by "name" or "invocations""#),
                ),
        );
        app
    }
}

impl Watch {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(w_args) = args.subcommand_matches("watch") {
            let context = Context::from_args(args, w_args)?;
            let ticks = match w_args.value_of("ticks") {
                Some(ticks) => Some(ticks.parse::<u64>().map_err(|e| {
                    State::Custom(format!("ticks must be a number: {}", e))
                })?),
                None => None,
            };
            let view = View {
                function: w_args.value_of("function").map(str::to_string),
                search: w_args.value_of("search").unwrap_or("").to_string(),
                sort: parse_sort(w_args.value_of("sort").unwrap_or("name"))?,
            };

            let dashboard = Rc::new(context.dashboard()?);
            if let Err(e) = dashboard.load_namespaces().await {
                warn!(error = %e, "namespace list failed");
            }
            info!(
                gateway = %context.gateway,
                namespace = %context.namespace,
                "watching functions"
            );
            watch(dashboard, &context, Rc::new(view), ticks).await;
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

struct View {
    function: Option<String>,
    search: String,
    sort: SortKey,
}

/// Drives the two polling timers until ctrl-c or after `ticks` list refreshes.
/// Each tick spawns its request without waiting for earlier ones.
async fn watch(dashboard: Rc<Dashboard<Client>>, context: &Context, view: Rc<View>, ticks: Option<u64>) {
    let mut fetch = interval(context.config.fetch_functions_delay());
    let mut query = interval(context.config.query_function_delay());
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut fetched = 0u64;
    let mut pending = Vec::new();
    loop {
        tokio::select! {
            _ = fetch.tick() => {
                if ticks.map(|max| fetched >= max).unwrap_or(false) {
                    break;
                }
                fetched += 1;
                let refresh = spawn_local(refresh_functions(dashboard.clone(), view.clone()));
                if ticks.is_some() {
                    pending.push(refresh);
                }
            }
            _ = query.tick() => {
                spawn_local(refresh_selected(dashboard.clone()));
            }
            _ = &mut ctrl_c => {
                info!("stopped");
                break;
            }
        }
    }

    // a bounded watch reports every refresh it started
    for refresh in pending {
        if let Err(e) = refresh.await {
            warn!(error = %e, "refresh task failed");
        }
    }
}

async fn refresh_functions(dashboard: Rc<Dashboard<Client>>, view: Rc<View>) {
    if let Err(e) = dashboard.refresh_functions().await {
        warn!(error = %e, "function list refresh failed");
        return;
    }
    if let Some(name) = view.function.as_deref() {
        if dashboard.registry().selected_name() != Some(name) {
            dashboard.select_function(name);
        }
    }
    print_functions(&dashboard.visible(view.search.as_str(), view.sort));
}

async fn refresh_selected(dashboard: Rc<Dashboard<Client>>) {
    dashboard.refresh_selected().await;
    if let Some(record) = dashboard.selected() {
        let record = record.borrow();
        info!(
            function = %record.name,
            ready = record.ready,
            available_replicas = record.available_replicas,
            "status"
        );
    }
}
