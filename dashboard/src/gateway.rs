use async_trait::async_trait;
use proxy::{Client, ContentMode, InvokeResponse};
use std::collections::HashMap;
use utility::faas::types::model::{FunctionDeployment, FunctionStatus};
use utility::store::StoreFunction;
use utility::Result;

/// The gateway operations the dashboard depends on.
///
/// Futures are not required to be `Send`: the dashboard runs on a single-threaded
/// event loop and shares its state through `Rc`.
#[async_trait(?Send)]
pub trait Gateway {
    async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>>;

    async fn get_function(&self, name: &str, namespace: &str) -> Result<FunctionStatus>;

    async fn create_function(&self, deployment: &FunctionDeployment) -> Result<()>;

    /// persists labels and annotations only
    async fn update_function_metadata(
        &self,
        service: &str,
        image: &str,
        labels: &HashMap<String, String>,
        annotations: &HashMap<String, String>,
        namespace: &str,
    ) -> Result<()>;

    async fn delete_function(&self, name: &str, namespace: &str) -> Result<()>;

    async fn list_namespaces(&self) -> Result<Vec<String>>;

    async fn invoke_function(
        &self,
        name: &str,
        namespace: &str,
        body: Vec<u8>,
        mode: ContentMode,
    ) -> Result<InvokeResponse>;
}

/// Where the public function store is read from.
#[async_trait(?Send)]
pub trait StoreSource {
    async fn fetch_store(&self, url: &str) -> Result<Vec<StoreFunction>>;
}

#[async_trait(?Send)]
impl Gateway for Client {
    async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>> {
        Client::list_functions(self, namespace).await
    }

    async fn get_function(&self, name: &str, namespace: &str) -> Result<FunctionStatus> {
        self.get_function_info(name, namespace).await
    }

    async fn create_function(&self, deployment: &FunctionDeployment) -> Result<()> {
        Client::create_function(self, deployment).await
    }

    async fn update_function_metadata(
        &self,
        service: &str,
        image: &str,
        labels: &HashMap<String, String>,
        annotations: &HashMap<String, String>,
        namespace: &str,
    ) -> Result<()> {
        Client::update_function_metadata(self, service, image, labels, annotations, namespace)
            .await
    }

    async fn delete_function(&self, name: &str, namespace: &str) -> Result<()> {
        Client::delete_function(self, name, namespace).await
    }

    async fn list_namespaces(&self) -> Result<Vec<String>> {
        Client::list_namespaces(self).await
    }

    async fn invoke_function(
        &self,
        name: &str,
        namespace: &str,
        body: Vec<u8>,
        mode: ContentMode,
    ) -> Result<InvokeResponse> {
        Client::invoke_function(self, name, namespace, body, mode).await
    }
}

#[async_trait(?Send)]
impl StoreSource for Client {
    async fn fetch_store(&self, url: &str) -> Result<Vec<StoreFunction>> {
        proxy::function_store::function_store_list(url).await
    }
}
