use crate::client::{unexpected_status, Client};
use crate::utils::{build_url, SYSTEM_PATH};
use reqwest::{Method, StatusCode};
use utility::faas_provider::types::DeleteFunctionRequest;
use utility::{Error, Result};

impl Client {
    ///DeleteFunction delete a function from the OpenFaaS server
    pub async fn delete_function(&self, function_name: &str, namespace: &str) -> Result<()> {
        let del_req = DeleteFunctionRequest { function_name };

        let req_data = serde_json::to_string(&del_req)?;
        let delete_endpoint = build_url(SYSTEM_PATH, namespace)?;

        let req = self
            .new_request(Method::DELETE, delete_endpoint.as_str(), req_data)
            .map_err(|e| {
                Error::Custom(format!(
                    "can't delete function from OpenFaaS on URL {}\nand debug reason {:?}",
                    self.gateway.as_str(),
                    e
                ))
            })?
            .build()?;
        let resp = self.do_request(req).await?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(()),
            StatusCode::NOT_FOUND => Err(Error::NotFound(function_name.to_string())),
            _ => Err(unexpected_status(resp).await),
        }
    }
}
