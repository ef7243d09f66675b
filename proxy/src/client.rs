use crate::proxy::make_http_client;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use url::ParseError;
use utility::{Error, Result};

///an API client to perform all operations against the gateway
pub struct Client {
    pub(crate) http_client: reqwest::Client,
    ///ClientAuth a type implementing ClientAuth interface for client authentication
    pub client_auth: Box<dyn ClientAuth>,
    ///Gatewayurl base url of OpenFaaS gateway
    pub gateway: Url,
}

///ClientAuth an interface for client authentication.
// to add authentication to the client implement this interface
pub trait ClientAuth {
    fn set(&self, req: &mut reqwest::RequestBuilder) -> Result<()>;
}

///leaves requests untouched, for gateways that are not protected
#[derive(Clone, Default, Debug)]
pub struct NoAuth;

impl ClientAuth for NoAuth {
    fn set(&self, _req: &mut reqwest::RequestBuilder) -> Result<()> {
        Ok(())
    }
}

impl Client {
    /// initializes a new API client
    pub fn new(auth: Box<dyn ClientAuth>, gateway: &str) -> Result<Client> {
        Client::with_timeout(auth, gateway, None)
    }

    /// initializes a new API client whose requests give up after `timeout`
    pub fn with_timeout(
        auth: Box<dyn ClientAuth>,
        gateway: &str,
        timeout: Option<Duration>,
    ) -> Result<Client> {
        let url = gateway.trim_end_matches('/');
        let url = Url::parse(url)
            .map_err(|e| Error::Custom(format!("invalid gateway URL {}: {}", gateway, e)))?;

        Ok(Client {
            http_client: make_http_client(timeout)?,
            client_auth: auth,
            gateway: url,
        })
    }

    ///resolves `path` (and its query string) against the gateway url, keeping
    ///any base path the gateway is served under
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let u = parse_maybe_relative(path)?;

        let mut endpoint = self.gateway.clone();
        let joined = format!(
            "{}/{}",
            endpoint.path().trim_end_matches('/'),
            u.path().trim_start_matches('/')
        );
        endpoint.set_path(joined.as_str());
        endpoint.set_query(u.query());
        Ok(endpoint)
    }

    ///create a new HTTP request with authentication
    pub fn new_request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: String,
    ) -> Result<reqwest::RequestBuilder> {
        let endpoint = self.endpoint(path)?;

        let mut req = self.http_client.request(method, endpoint);
        if !body.is_empty() {
            req = req.header("Content-Type", "application/json").body(body);
        }
        self.client_auth.set(&mut req)?;

        Ok(req)
    }

    ///perform an HTTP request
    pub(crate) async fn do_request(&self, req: reqwest::Request) -> Result<reqwest::Response> {
        tracing::debug!(method = %req.method(), url = %req.url(), "gateway request");
        let resp = self.http_client.execute(req).await?;
        Ok(resp)
    }
}

///turns a response the caller did not expect into an error carrying the gateway's body
pub(crate) async fn unexpected_status(res: reqwest::Response) -> Error {
    match res.status() {
        StatusCode::UNAUTHORIZED => Error::Unauthorized,
        status => match res.text().await {
            Ok(body) => Error::Status {
                code: status.as_u16(),
                body,
            },
            Err(e) => Error::Reqwest(e),
        },
    }
}

fn parse_maybe_relative(url: &str) -> Result<Url> {
    match Url::parse(url) {
        Ok(u) => Ok(u),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let url = format!("http://example.com/{}", url.trim_start_matches('/'));
            Ok(Url::parse(url.as_str())?)
        }
        Err(e) => Err(Error::Custom(format!("{:?}", e))),
    }
}

///appends `params` to the query string of `url`, which may be relative
pub(crate) fn add_query_params(url: &str, params: &[(&str, &str)]) -> Result<String> {
    let relative = matches!(Url::parse(url), Err(ParseError::RelativeUrlWithoutBase));
    let mut parsed_url = parse_maybe_relative(url)?;
    {
        let mut modifier = parsed_url.query_pairs_mut();
        for (key, val) in params {
            modifier.append_pair(key, val);
        }
    }

    let url = parsed_url.to_string();
    if relative {
        Ok(url.trim_start_matches("http://example.com").to_string())
    } else {
        Ok(url)
    }
}

#[test]
fn test_add_query_params() {
    struct TestCase {
        _name: &'static str,
        params: Vec<(&'static str, &'static str)>,
        url: &'static str,
        expected_url: &'static str,
    }

    let cases = vec![
        TestCase {
            _name: "url without hostname",
            params: vec![("namespace", "openfaas-fn")],
            url: "/system/functions",
            expected_url: "/system/functions?namespace=openfaas-fn",
        },
        TestCase {
            _name: "url hostname",
            params: vec![("namespace", "openfaas-fn")],
            url: "http://127.0.0.1/system/functions",
            expected_url: "http://127.0.0.1/system/functions?namespace=openfaas-fn",
        },
        TestCase {
            _name: "A url with simple hostname",
            params: vec![("namespace", "openfaas-fn")],
            url: "example",
            expected_url: "/example?namespace=openfaas-fn",
        },
        TestCase {
            _name: "value needing encoding",
            params: vec![("namespace", "a b")],
            url: "/system/functions",
            expected_url: "/system/functions?namespace=a+b",
        },
    ];

    for test in cases {
        let res = add_query_params(test.url, &test.params);
        assert!(res.is_ok());
        let url = res.unwrap();
        assert_eq!(url, test.expected_url);
    }
}
