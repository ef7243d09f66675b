//! Editable metadata of one function: labels, annotations, environment and secrets.

use crate::codec::{self, KeyValue, SecretName};
use crate::gateway::Gateway;
use crate::notify::Notifier;
use std::collections::HashMap;
use tracing::warn;
use utility::faas::types::model::FunctionStatus;
use utility::{is_reserved_key, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Labels,
    Annotations,
    EnvVars,
    Secrets,
}

/// Button a row action was triggered with. Only `Primary` removes rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Rows of one group. Never empty: an empty group holds one blank row and is hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorList<T> {
    rows: Vec<T>,
    visible: bool,
}

impl<T: Default> EditorList<T> {
    fn seeded(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            EditorList {
                rows: vec![T::default()],
                visible: false,
            }
        } else {
            EditorList {
                rows,
                visible: true,
            }
        }
    }

    fn insert_after(&mut self, after: usize) {
        let at = if after < self.rows.len() {
            after + 1
        } else {
            self.rows.len()
        };
        self.rows.insert(at, T::default());
        self.visible = true;
    }

    fn remove(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        if self.rows.is_empty() {
            self.rows.push(T::default());
            self.visible = false;
        }
        true
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

impl<T: Default> Default for EditorList<T> {
    fn default() -> Self {
        EditorList::seeded(Vec::new())
    }
}

/// Editor state for one dialog session, discarded when the dialog closes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataEditor {
    pub service: String,
    pub image: String,
    pub namespace: String,
    labels: EditorList<KeyValue>,
    annotations: EditorList<KeyValue>,
    env_vars: EditorList<KeyValue>,
    secrets: EditorList<SecretName>,
}

impl MetadataEditor {
    /// an editor for a new function, every group empty and hidden
    pub fn new() -> Self {
        MetadataEditor::default()
    }

    pub fn for_function(record: &FunctionStatus) -> Self {
        let mut editor = MetadataEditor::new();
        editor.load_from_record(record);
        editor
    }

    pub fn load_from_record(&mut self, record: &FunctionStatus) {
        self.service = record.name.clone();
        self.image = record.image.clone();
        self.namespace = record.namespace.clone();
        self.load_maps(
            &record.labels,
            &record.annotations,
            &record.env_vars,
            &record.secrets,
        );
    }

    pub(crate) fn load_maps(
        &mut self,
        labels: &HashMap<String, String>,
        annotations: &HashMap<String, String>,
        env_vars: &HashMap<String, String>,
        secrets: &[String],
    ) {
        self.labels = EditorList::seeded(codec::to_list(labels));
        self.annotations = EditorList::seeded(codec::to_list(annotations));
        self.env_vars = EditorList::seeded(codec::to_list(env_vars));
        self.secrets = EditorList::seeded(codec::secrets_to_list(secrets));
    }

    fn key_values(&self, group: Group) -> Option<&EditorList<KeyValue>> {
        match group {
            Group::Labels => Some(&self.labels),
            Group::Annotations => Some(&self.annotations),
            Group::EnvVars => Some(&self.env_vars),
            Group::Secrets => None,
        }
    }

    fn key_values_mut(&mut self, group: Group) -> Option<&mut EditorList<KeyValue>> {
        match group {
            Group::Labels => Some(&mut self.labels),
            Group::Annotations => Some(&mut self.annotations),
            Group::EnvVars => Some(&mut self.env_vars),
            Group::Secrets => None,
        }
    }

    pub fn rows(&self, group: Group) -> Option<&[KeyValue]> {
        self.key_values(group).map(EditorList::rows)
    }

    pub fn secret_rows(&self) -> &[SecretName] {
        self.secrets.rows()
    }

    pub fn is_visible(&self, group: Group) -> bool {
        match self.key_values(group) {
            Some(list) => list.visible,
            None => self.secrets.visible,
        }
    }

    pub fn set_visible(&mut self, group: Group, visible: bool) {
        match self.key_values_mut(group) {
            Some(list) => list.visible = visible,
            None => self.secrets.visible = visible,
        }
    }

    pub fn toggle_visible(&mut self, group: Group) {
        let visible = self.is_visible(group);
        self.set_visible(group, !visible);
    }

    /// inserts a blank row after `after` (appends when out of range) and shows the group
    pub fn add_row(&mut self, group: Group, after: usize) {
        match self.key_values_mut(group) {
            Some(list) => list.insert_after(after),
            None => self.secrets.insert_after(after),
        }
    }

    /// Removes a row. Ignored unless triggered with the primary button, and rows
    /// holding a platform-owned key are kept.
    pub fn remove_row(&mut self, group: Group, index: usize, button: PointerButton) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        match self.key_values_mut(group) {
            Some(list) => {
                let reserved = list
                    .rows
                    .get(index)
                    .map(|row| is_reserved_key(&row.key))
                    .unwrap_or(false);
                if reserved {
                    return false;
                }
                list.remove(index)
            }
            None => self.secrets.remove(index),
        }
    }

    /// returns false when the row does not exist or `group` is `Secrets`
    pub fn set_entry(&mut self, group: Group, index: usize, key: &str, value: &str) -> bool {
        let row = self
            .key_values_mut(group)
            .and_then(|list| list.rows.get_mut(index));
        match row {
            Some(row) => {
                row.key = key.to_string();
                row.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_secret(&mut self, index: usize, name: &str) -> bool {
        match self.secrets.rows.get_mut(index) {
            Some(row) => {
                row.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn labels(&self) -> HashMap<String, String> {
        codec::to_mapping(self.labels.rows())
    }

    pub fn annotations(&self) -> HashMap<String, String> {
        codec::to_mapping(self.annotations.rows())
    }

    pub fn env_vars(&self) -> HashMap<String, String> {
        codec::to_mapping(self.env_vars.rows())
    }

    pub fn secrets(&self) -> Vec<String> {
        codec::list_to_secrets(self.secrets.rows())
    }

    /// Persists labels and annotations, then re-seeds every group from the
    /// gateway's copy of the function. Local rows are kept when the update fails.
    pub async fn submit<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        notifier: &dyn Notifier,
    ) -> Result<()> {
        let labels = self.labels();
        let annotations = self.annotations();
        let res = gateway
            .update_function_metadata(
                &self.service,
                &self.image,
                &labels,
                &annotations,
                &self.namespace,
            )
            .await;
        if let Err(e) = res {
            warn!(function = %self.service, error = %e, "metadata update failed");
            notifier.notify("Error");
            return Err(e);
        }
        notifier.notify("Success");

        match gateway.list_functions(&self.namespace).await {
            Ok(functions) => {
                if let Some(record) = functions.iter().find(|f| f.name == self.service) {
                    self.load_from_record(record);
                }
            }
            Err(e) => warn!(function = %self.service, error = %e, "refetch after metadata update failed"),
        }
        Ok(())
    }
}
