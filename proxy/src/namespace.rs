use crate::client::{unexpected_status, Client};
use crate::utils::NAMESPACES_PATH;
use reqwest::{Method, StatusCode};
use utility::{Error, Result};

impl Client {
    ///lists the namespaces functions can be deployed to
    pub async fn list_namespaces(&self) -> Result<Vec<String>> {
        let req = self
            .new_request(Method::GET, NAMESPACES_PATH, String::new())?
            .build()?;

        let res = self.do_request(req).await.map_err(|_e| {
            Error::Custom(format!(
                "can't read namespaces from OpenFaaS on URL {}",
                self.gateway.as_str(),
            ))
        })?;

        match res.status() {
            StatusCode::OK => {
                let body = res.bytes().await?;
                let namespaces: Vec<String> = serde_json::from_slice(&body)?;
                Ok(namespaces)
            }
            _ => Err(unexpected_status(res).await),
        }
    }
}
