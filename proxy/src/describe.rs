use crate::client::{unexpected_status, Client};
use crate::utils::{build_url, function_path};
use reqwest::{Method, StatusCode};
use utility::faas::types::model::FunctionStatus;
use utility::{Error, Result};

impl Client {
    ///get a single function, with its readiness derived from the available replicas
    pub async fn get_function_info(
        &self,
        function_name: &str,
        namespace: &str,
    ) -> Result<FunctionStatus> {
        let function_path = build_url(function_path(function_name).as_str(), namespace)?;

        let req = self
            .new_request(Method::GET, function_path.as_str(), String::new())?
            .build()?;

        let res = self.do_request(req).await.map_err(|_| {
            Error::Custom(format!(
                "can't connect to OpenFaaS on URL: {}",
                self.gateway.as_str()
            ))
        })?;
        match res.status() {
            StatusCode::OK => {
                let body = res.bytes().await?;
                let mut status: FunctionStatus = serde_json::from_slice(&body)?;
                status.ready = status.is_ready();
                Ok(status)
            }
            StatusCode::NOT_FOUND => Err(Error::NotFound(function_name.to_string())),
            _ => Err(unexpected_status(res).await),
        }
    }
}
