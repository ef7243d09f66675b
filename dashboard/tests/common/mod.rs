#![allow(dead_code)]

use async_trait::async_trait;
use dashboard::download::DownloadSink;
use dashboard::notify::Notifier;
use dashboard::session::Session;
use dashboard::{Dashboard, Gateway, StoreSource};
use proxy::{ContentMode, InvokeResponse};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::rc::Rc;
use utility::faas::types::model::{FunctionDeployment, FunctionStatus};
use utility::store::StoreFunction;
use utility::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(String),
    Get(String, String),
    Create(FunctionDeployment),
    Update {
        service: String,
        image: String,
        labels: HashMap<String, String>,
        annotations: HashMap<String, String>,
        namespace: String,
    },
    Delete(String, String),
    Namespaces,
    Invoke {
        name: String,
        namespace: String,
        body: Vec<u8>,
        mode: ContentMode,
    },
}

/// In-memory gateway recording every call it receives.
#[derive(Default)]
pub struct FakeGateway {
    pub functions: RefCell<Vec<FunctionStatus>>,
    pub namespaces: Vec<String>,
    pub invoke_results: RefCell<VecDeque<Result<InvokeResponse>>>,
    pub create_error: RefCell<Option<Error>>,
    pub update_error: RefCell<Option<Error>>,
    pub fail_status: Cell<bool>,
    /// scheduler yields before the n-th list/invoke call completes
    pub list_delays: RefCell<VecDeque<usize>>,
    pub invoke_delays: RefCell<VecDeque<usize>>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeGateway {
    pub fn with_functions(functions: Vec<FunctionStatus>) -> Self {
        FakeGateway {
            functions: RefCell::new(functions),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

async fn stall(delays: &RefCell<VecDeque<usize>>) {
    let yields = delays.borrow_mut().pop_front().unwrap_or(0);
    for _ in 0..yields {
        tokio::task::yield_now().await;
    }
}

#[async_trait(?Send)]
impl Gateway for FakeGateway {
    async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>> {
        self.record(Call::List(namespace.to_string()));
        let functions: Vec<FunctionStatus> = self
            .functions
            .borrow()
            .iter()
            .filter(|f| f.namespace == namespace)
            .cloned()
            .collect();
        stall(&self.list_delays).await;
        Ok(functions)
    }

    async fn get_function(&self, name: &str, namespace: &str) -> Result<FunctionStatus> {
        self.record(Call::Get(name.to_string(), namespace.to_string()));
        if self.fail_status.get() {
            return Err(Error::Custom("connection refused".to_string()));
        }
        self.functions
            .borrow()
            .iter()
            .find(|f| f.name == name && f.namespace == namespace)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    async fn create_function(&self, deployment: &FunctionDeployment) -> Result<()> {
        self.record(Call::Create(deployment.clone()));
        match self.create_error.borrow_mut().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn update_function_metadata(
        &self,
        service: &str,
        image: &str,
        labels: &HashMap<String, String>,
        annotations: &HashMap<String, String>,
        namespace: &str,
    ) -> Result<()> {
        self.record(Call::Update {
            service: service.to_string(),
            image: image.to_string(),
            labels: labels.clone(),
            annotations: annotations.clone(),
            namespace: namespace.to_string(),
        });
        if let Some(e) = self.update_error.borrow_mut().take() {
            return Err(e);
        }
        for function in self.functions.borrow_mut().iter_mut() {
            if function.name == service && function.namespace == namespace {
                function.labels = labels.clone();
                function.annotations = annotations.clone();
            }
        }
        Ok(())
    }

    async fn delete_function(&self, name: &str, namespace: &str) -> Result<()> {
        self.record(Call::Delete(name.to_string(), namespace.to_string()));
        self.functions
            .borrow_mut()
            .retain(|f| !(f.name == name && f.namespace == namespace));
        Ok(())
    }

    async fn list_namespaces(&self) -> Result<Vec<String>> {
        self.record(Call::Namespaces);
        Ok(self.namespaces.clone())
    }

    async fn invoke_function(
        &self,
        name: &str,
        namespace: &str,
        body: Vec<u8>,
        mode: ContentMode,
    ) -> Result<InvokeResponse> {
        self.record(Call::Invoke {
            name: name.to_string(),
            namespace: namespace.to_string(),
            body,
            mode,
        });
        let result = self
            .invoke_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Custom("no invocation scripted".to_string())));
        stall(&self.invoke_delays).await;
        result
    }
}

/// Store source serving a fixed document, or failing when empty.
pub struct FakeStore(pub Option<Vec<StoreFunction>>);

#[async_trait(?Send)]
impl StoreSource for FakeStore {
    async fn fetch_store(&self, _url: &str) -> Result<Vec<StoreFunction>> {
        self.0
            .clone()
            .ok_or_else(|| Error::Custom("store offline".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier(pub Rc<RefCell<Vec<String>>>);

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

#[derive(Clone, Default)]
pub struct MemorySink(pub Rc<RefCell<Vec<(String, Vec<u8>)>>>);

impl MemorySink {
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.0.borrow().clone()
    }
}

impl DownloadSink for MemorySink {
    fn save(&self, filename: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        self.0
            .borrow_mut()
            .push((filename.to_string(), data.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

pub fn function(name: &str, namespace: &str) -> FunctionStatus {
    FunctionStatus {
        name: name.to_string(),
        namespace: namespace.to_string(),
        image: format!("functions/{}:latest", name),
        replicas: 1,
        ..Default::default()
    }
}

pub struct Harness {
    pub dashboard: Dashboard<FakeGateway>,
    pub notifier: RecordingNotifier,
    pub downloads: MemorySink,
}

pub fn harness(gateway: FakeGateway) -> Harness {
    let notifier = RecordingNotifier::default();
    let downloads = MemorySink::default();
    let dashboard = Dashboard::new(gateway, Session::default())
        .with_notifier(notifier.clone())
        .with_downloads(downloads.clone());
    Harness {
        dashboard,
        notifier,
        downloads,
    }
}
