use crate::client::{unexpected_status, Client};
use crate::utils::{build_url, SYSTEM_PATH};
use reqwest::{Method, StatusCode};
use utility::faas::types::model::FunctionStatus;
use utility::{Error, Result};

impl Client {
    /// ListFunctions list deployed functions of `namespace`
    pub async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>> {
        let list_endpoint = build_url(SYSTEM_PATH, namespace)?;

        let req = self
            .new_request(Method::GET, list_endpoint.as_str(), String::new())?
            .build()?;

        let res = self.do_request(req).await.map_err(|e| {
            Error::Custom(format!(
                "can't read list from OpenFaaS on URL {}: {}",
                self.gateway.as_str(),
                e
            ))
        })?;

        match res.status() {
            StatusCode::OK => {
                let body = res.bytes().await?;
                let functions: Vec<FunctionStatus> = serde_json::from_slice(&body)?;
                Ok(functions)
            }
            _ => Err(unexpected_status(res).await),
        }
    }
}
