pub(crate) const OPENFAAS_URL_ENVIRONMENT: &str = "OPENFAAS_URL";

/// Gateway address: an explicit argument beats the config file, which beats
/// `OPENFAAS_URL`. Scheme-less addresses get `http://`.
pub(crate) fn get_gateway_url(
    argument_url: &str,
    default_url: &str,
    config_url: &str,
    environment_url: &str,
) -> String {
    let gateway_url = if !argument_url.is_empty() && argument_url != default_url {
        argument_url
    } else if !config_url.is_empty() && config_url != default_url {
        config_url
    } else if !environment_url.is_empty() {
        environment_url
    } else {
        default_url
    };

    let gateway_url = gateway_url.trim_end_matches('/').to_ascii_lowercase();
    if gateway_url.starts_with("http://") || gateway_url.starts_with("https://") {
        gateway_url
    } else {
        format!("http://{}", gateway_url)
    }
}

pub(crate) fn get_namespace(flag_namespace: &str, config_namespace: &str) -> String {
    if !flag_namespace.is_empty() {
        flag_namespace.into()
    } else {
        config_namespace.into()
    }
}
