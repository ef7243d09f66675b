use crate::client::{unexpected_status, Client};
use crate::utils::SYSTEM_PATH;
use reqwest::{Method, StatusCode};
use utility::faas::types::model::FunctionDeployment;
use utility::{Error, Result};

impl Client {
    /// creates a function. A rejected deployment comes back as `Error::Status`
    /// carrying the gateway's validation message as body
    pub async fn create_function(&self, deployment: &FunctionDeployment) -> Result<()> {
        let req_bytes = serde_json::to_string(deployment)?;

        let request = self
            .new_request(Method::POST, SYSTEM_PATH, req_bytes)?
            .build()?;

        let response = self
            .do_request(request)
            .await
            .map_err(|e| Error::Custom(format!("InternalServerError:{}", e)))?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(()),
            _ => Err(unexpected_status(response).await),
        }
    }
}
