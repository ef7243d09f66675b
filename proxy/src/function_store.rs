use reqwest::StatusCode;
use utility::store::{Store, StoreFunction};
use utility::{Error, Result};

/// returns functions from a store URL
pub async fn function_store_list(store: &str) -> Result<Vec<StoreFunction>> {
    let store = store.trim_end_matches('/');
    let resp = reqwest::get(store).await?;

    match resp.status() {
        StatusCode::OK => {
            let body = resp.bytes().await?;
            let store_res: Store = serde_json::from_slice(&body)?;
            Ok(store_res.functions)
        }
        status => Err(Error::Custom(format!(
            "expected status is ok but found {}",
            status
        ))),
    }
}
