use crate::priority::{get_gateway_url, get_namespace, OPENFAAS_URL_ENVIRONMENT};
use clap::ArgMatches;
use config::{load_config, DashboardConfig};
use dashboard::download::DirectorySink;
use dashboard::namespace::NamespaceContext;
use dashboard::session::Session;
use dashboard::Dashboard;
use proxy::client::{Client, NoAuth};
use utility::{Result, DEFAULT_GATEWAY};

/// Resolved settings of one command run.
pub(crate) struct Context {
    pub(crate) config: DashboardConfig,
    pub(crate) gateway: String,
    pub(crate) namespace: String,
}

/// value of a global flag, whichever side of the subcommand it was given on
fn global_value<'a>(args: &'a ArgMatches<'_>, sub: &'a ArgMatches<'_>, name: &str) -> Option<&'a str> {
    sub.value_of(name).or_else(|| args.value_of(name))
}

impl Context {
    pub(crate) fn from_args(args: &ArgMatches<'_>, sub: &ArgMatches<'_>) -> Result<Context> {
        let config = load_config(global_value(args, sub, "config"))?;
        let environment_url = std::env::var(OPENFAAS_URL_ENVIRONMENT).unwrap_or_default();
        let gateway = get_gateway_url(
            global_value(args, sub, "gateway").unwrap_or(""),
            DEFAULT_GATEWAY,
            config.gateway.as_str(),
            environment_url.as_str(),
        );
        let namespace = get_namespace(
            global_value(args, sub, "namespace").unwrap_or(""),
            config.namespace.as_str(),
        );
        tracing::debug!(gateway = %gateway, namespace = %namespace, "resolved gateway");

        Ok(Context {
            config,
            gateway,
            namespace,
        })
    }

    pub(crate) fn client(&self) -> Result<Client> {
        Client::with_timeout(
            Box::new(NoAuth),
            self.gateway.as_str(),
            self.config.invoke_timeout(),
        )
    }

    pub(crate) fn dashboard(&self) -> Result<Dashboard<Client>> {
        let session = Session::new(NamespaceContext::new(self.namespace.as_str()));
        Ok(Dashboard::new(self.client()?, session)
            .with_downloads(DirectorySink::new(self.config.download_path())))
    }
}
