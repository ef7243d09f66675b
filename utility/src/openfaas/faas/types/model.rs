use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FunctionDeployment is the body of a request creating a function.
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionDeployment {
    // Service is the name of the function deployment
    #[serde(default)]
    pub service: String,
    // Image is a fully-qualified container image
    #[serde(default)]
    pub image: String,

    // Namespace for the function, if supported by the faas_provider
    #[serde(default)]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub namespace: String,

    // EnvProcess overrides the fprocess environment variable and can be used
    // with the watchdog
    #[serde(rename = "envProcess")]
    #[serde(default)]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub env_process: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub network: String,

    #[serde(rename = "envVars")]
    #[serde(default)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub env_vars: HashMap<String, String>,

    // Secrets list of secrets to be made available to function
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub annotations: HashMap<String, String>,

    #[serde(rename = "readOnlyRootFilesystem")]
    #[serde(default)]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub read_only_root_filesystem: bool,
}

/// FunctionStatus is a function record as reported by the system/functions endpoint
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionStatus {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub image: String,

    // Namespace for the function, empty when the provider is not namespaced
    #[serde(default)]
    pub namespace: String,

    #[serde(rename = "envProcess")]
    #[serde(default)]
    pub env_process: String,

    #[serde(default)]
    pub network: String,

    // EnvVars are fixed at creation time
    #[serde(rename = "envVars", alias = "environment")]
    #[serde(default)]
    pub env_vars: HashMap<String, String>,

    #[serde(default)]
    pub secrets: Vec<String>,

    #[serde(default)]
    pub labels: HashMap<String, String>,

    #[serde(default)]
    pub annotations: HashMap<String, String>,

    // ================
    // Fields for status
    // ================

    #[serde(rename = "invocationCount")]
    #[serde(default)]
    pub invocation_count: f64,

    // Replicas desired within the cluster
    #[serde(default)]
    pub replicas: u64,

    // AvailableReplicas is the count of replicas ready to receive
    // invocations as reported by the faas_provider
    #[serde(rename = "availableReplicas")]
    #[serde(default)]
    pub available_replicas: u64,

    //rfc3339
    #[serde(rename = "createdAt")]
    #[serde(default)]
    #[serde(skip_serializing_if = "crate::is_default")]
    pub created_at: String,

    // derived locally from available_replicas, never sent by the gateway
    #[serde(skip)]
    pub ready: bool,
}

impl FunctionStatus {
    /// a function is ready once at least one replica can receive invocations
    pub fn is_ready(&self) -> bool {
        self.available_replicas > 0
    }

    /// extension hint for binary responses, taken from the `com.openfaas.ui.ext` label
    pub fn download_extension(&self) -> Option<&str> {
        self.labels
            .get(crate::UI_EXTENSION_LABEL)
            .map(|ext| ext.as_str())
            .filter(|ext| !ext.is_empty())
    }
}
