//! Public function store, filtered to the platform functions can run on.

use crate::gateway::StoreSource;
use tracing::warn;
use utility::store::StoreFunction;

pub const STORE_UNREACHABLE: &str = "Unable to reach the function store";

/// A store function together with its image for the configured architecture.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub function: StoreFunction,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreCatalog {
    entries: Vec<CatalogEntry>,
    message: Option<String>,
}

impl StoreCatalog {
    /// keeps the functions published for `arch`
    pub fn from_functions(functions: Vec<StoreFunction>, arch: &str) -> Self {
        let entries = functions
            .into_iter()
            .filter_map(|function| {
                let image = function.get_image_name(arch)?.clone();
                Some(CatalogEntry { function, image })
            })
            .collect();
        StoreCatalog {
            entries,
            message: None,
        }
    }

    /// An unreachable store yields an empty catalog carrying a message.
    pub async fn load<S: StoreSource + ?Sized>(source: &S, url: &str, arch: &str) -> Self {
        match source.fetch_store(url).await {
            Ok(functions) => StoreCatalog::from_functions(functions, arch),
            Err(e) => {
                warn!(url, error = %e, "function store fetch failed");
                StoreCatalog {
                    entries: Vec::new(),
                    message: Some(STORE_UNREACHABLE.to_string()),
                }
            }
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// case-insensitive match on title or description
    pub fn search(&self, text: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.function.matches(text))
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.function.name == name)
    }
}
