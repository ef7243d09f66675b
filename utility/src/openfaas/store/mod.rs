use serde::{Deserialize, Serialize};
use std::collections::HashMap;

///StoreFunction represents a multi-arch function in the function store
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct StoreFunction {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fprocess: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(rename = "readOnlyRootFilesystem")]
    #[serde(default)]
    pub read_only_root_filesystem: bool,
    #[serde(default)]
    pub environment: HashMap<String, String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    #[serde(default)]
    pub images: HashMap<String, String>,
}

impl StoreFunction {
    ///image of the function built for `platform`
    pub fn get_image_name(&self, platform: &str) -> Option<&String> {
        self.images.get(platform)
    }

    ///case-insensitive match on title or description, an empty needle matches everything
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Store is the document served by a function store URL
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Store {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub functions: Vec<StoreFunction>,
}
