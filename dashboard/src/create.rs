//! The create-function dialog: a store tab and a manual form.

use crate::editor::MetadataEditor;
use crate::gateway::Gateway;
use crate::notify::Notifier;
use crate::session::{DeployTab, Session};
use crate::store::CatalogEntry;
use tracing::warn;
use utility::faas::types::model::{FunctionDeployment, FunctionStatus};
use utility::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFunctionDialog {
    tab: DeployTab,
    pub service: String,
    pub image: String,
    pub env_process: String,
    pub network: String,
    pub read_only_root_filesystem: bool,
    pub metadata: MetadataEditor,
    store_selection: Option<String>,
    validation_error: Option<String>,
    open: bool,
}

impl CreateFunctionDialog {
    /// opens on the tab used last in this session
    pub fn new(session: &Session) -> Self {
        CreateFunctionDialog {
            tab: session.deploy_tab(),
            service: String::new(),
            image: String::new(),
            env_process: String::new(),
            network: String::new(),
            read_only_root_filesystem: false,
            metadata: MetadataEditor::new(),
            store_selection: None,
            validation_error: None,
            open: true,
        }
    }

    pub fn tab(&self) -> DeployTab {
        self.tab
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// name of the store function the form was filled from
    pub fn store_selection(&self) -> Option<&str> {
        self.store_selection.as_deref()
    }

    /// Leaving the store tab forgets the picked store function, leaving the
    /// manual tab clears the form.
    pub fn select_tab(&mut self, session: &Session, tab: DeployTab) {
        if tab != self.tab {
            match self.tab {
                DeployTab::Store => self.store_selection = None,
                DeployTab::Manual => self.reset_form(),
            }
            self.tab = tab;
        }
        session.remember_deploy_tab(tab);
    }

    pub fn from_store(&mut self, entry: &CatalogEntry) {
        let function = &entry.function;
        self.service = function.name.clone();
        self.image = entry.image.clone();
        self.env_process = function.fprocess.clone();
        self.network = function.network.clone();
        self.read_only_root_filesystem = function.read_only_root_filesystem;
        self.metadata.load_maps(
            &function.labels,
            &function.annotations,
            &function.environment,
            &[],
        );
        self.store_selection = Some(function.name.clone());
    }

    /// fills the form with a copy of an existing function
    pub fn from_record(&mut self, record: &FunctionStatus) {
        self.service = record.name.clone();
        self.image = record.image.clone();
        self.env_process = record.env_process.clone();
        self.network = record.network.clone();
        self.metadata.load_from_record(record);
    }

    pub fn deployment(&self, namespace: &str) -> FunctionDeployment {
        FunctionDeployment {
            service: self.service.trim().to_string(),
            image: self.image.trim().to_string(),
            namespace: namespace.to_string(),
            env_process: self.env_process.clone(),
            network: self.network.clone(),
            env_vars: self.metadata.env_vars(),
            secrets: self.metadata.secrets(),
            labels: self.metadata.labels(),
            annotations: self.metadata.annotations(),
            read_only_root_filesystem: self.read_only_root_filesystem,
        }
    }

    fn reset_form(&mut self) {
        self.service.clear();
        self.image.clear();
        self.env_process.clear();
        self.network.clear();
        self.read_only_root_filesystem = false;
        self.metadata = MetadataEditor::new();
    }

    /// Deploys the form into the session's namespace. A rejected deployment keeps
    /// the dialog open on the manual tab with the gateway's reason.
    pub async fn submit<G: Gateway + ?Sized>(
        &mut self,
        session: &Session,
        gateway: &G,
        notifier: &dyn Notifier,
    ) -> Result<()> {
        let deployment = self.deployment(&session.selected_namespace());
        match gateway.create_function(&deployment).await {
            Ok(()) => {
                self.reset_form();
                self.store_selection = None;
                self.validation_error = None;
                self.close();
                notifier.notify("Function created");
                Ok(())
            }
            Err(e) => {
                warn!(function = %deployment.service, error = %e, "create function failed");
                notifier.notify("Error");
                self.select_tab(session, DeployTab::Manual);
                self.validation_error = Some(match &e {
                    Error::Status { body, .. } => body.clone(),
                    other => other.to_string(),
                });
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Group;
    use std::collections::HashMap;
    use utility::store::StoreFunction;

    fn store_entry() -> CatalogEntry {
        let mut environment = HashMap::new();
        environment.insert("write_debug".to_string(), "true".to_string());
        CatalogEntry {
            function: StoreFunction {
                name: "figlet".to_string(),
                title: "Figlet".to_string(),
                fprocess: "figlet".to_string(),
                environment,
                ..Default::default()
            },
            image: "functions/figlet:0.13.0".to_string(),
        }
    }

    #[test]
    fn opens_on_remembered_tab() {
        let session = Session::default();
        assert_eq!(CreateFunctionDialog::new(&session).tab(), DeployTab::Store);

        let mut dialog = CreateFunctionDialog::new(&session);
        dialog.select_tab(&session, DeployTab::Manual);
        assert_eq!(CreateFunctionDialog::new(&session).tab(), DeployTab::Manual);
    }

    #[test]
    fn store_selection_fills_form() {
        let session = Session::default();
        let mut dialog = CreateFunctionDialog::new(&session);
        dialog.from_store(&store_entry());

        let deployment = dialog.deployment("dev");
        assert_eq!(deployment.service, "figlet");
        assert_eq!(deployment.image, "functions/figlet:0.13.0");
        assert_eq!(deployment.env_process, "figlet");
        assert_eq!(deployment.namespace, "dev");
        assert_eq!(
            deployment.env_vars.get("write_debug").map(String::as_str),
            Some("true")
        );
        assert!(dialog.metadata.is_visible(Group::EnvVars));
        assert_eq!(dialog.store_selection(), Some("figlet"));
    }

    #[test]
    fn switching_tabs_clears_state() {
        let session = Session::default();
        let mut dialog = CreateFunctionDialog::new(&session);
        dialog.from_store(&store_entry());

        dialog.select_tab(&session, DeployTab::Manual);
        assert_eq!(dialog.store_selection(), None);
        assert_eq!(dialog.service, "figlet");

        dialog.select_tab(&session, DeployTab::Store);
        assert_eq!(dialog.service, "");
        assert!(dialog.deployment("").env_vars.is_empty());
    }
}
