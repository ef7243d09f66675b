use crate::client::{unexpected_status, Client};
use crate::utils::{build_url, SYSTEM_PATH};
use reqwest::{Method, StatusCode};
use std::collections::HashMap;
use utility::faas_provider::types::UpdateMetadataRequest;
use utility::{Error, Result};

impl Client {
    /// replaces the labels and annotations of a deployed function
    pub async fn update_function_metadata(
        &self,
        service: &str,
        image: &str,
        labels: &HashMap<String, String>,
        annotations: &HashMap<String, String>,
        namespace: &str,
    ) -> Result<()> {
        let update = UpdateMetadataRequest {
            service,
            image,
            labels,
            annotations,
        };
        let req_data = serde_json::to_string(&update)?;
        let update_endpoint = build_url(SYSTEM_PATH, namespace)?;

        let req = self
            .new_request(Method::PUT, update_endpoint.as_str(), req_data)?
            .build()?;

        let resp = self.do_request(req).await.map_err(|e| {
            Error::Custom(format!(
                "can't update function on OpenFaaS on URL {}: {}",
                self.gateway.as_str(),
                e
            ))
        })?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(()),
            StatusCode::NOT_FOUND => Err(Error::NotFound(service.to_string())),
            _ => Err(unexpected_status(resp).await),
        }
    }
}
