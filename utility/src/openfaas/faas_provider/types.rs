use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// DeleteFunctionRequest delete a deployed function
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct DeleteFunctionRequest<'s> {
    #[serde(rename = "functionName")]
    pub function_name: &'s str,
}

/// UpdateMetadataRequest replaces the labels and annotations of a deployed function.
/// Secrets and environment variables are not part of this call.
#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct UpdateMetadataRequest<'s> {
    pub service: &'s str,
    pub image: &'s str,
    pub labels: &'s HashMap<String, String>,
    pub annotations: &'s HashMap<String, String>,
}
