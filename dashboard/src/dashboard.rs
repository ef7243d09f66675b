use crate::create::CreateFunctionDialog;
use crate::download::{DirectorySink, DownloadSink};
use crate::editor::MetadataEditor;
use crate::gateway::Gateway;
use crate::invocation::{self, InvocationState, InvocationStatus};
use crate::notify::{Confirmation, LogNotifier, Notifier};
use crate::registry::{FunctionRegistry, Reconciliation, RecordRef, SortKey};
use crate::session::{DeployTab, Session};
use proxy::{ContentMode, InvokeBody};
use std::cell::{Ref, RefCell};
use std::time::Instant;
use tracing::{debug, warn};
use utility::{Error, Result};

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// the operator declined, nothing was sent
    Cancelled,
}

/// The dashboard engine. Every operation takes `&self` so one instance can be
/// shared through an `Rc` by the polling tasks of a single-threaded event loop;
/// no `RefCell` borrow is held across an `.await`.
pub struct Dashboard<G> {
    gateway: G,
    session: Session,
    registry: RefCell<FunctionRegistry>,
    invocation: RefCell<InvocationState>,
    notifier: Box<dyn Notifier>,
    downloads: Box<dyn DownloadSink>,
}

impl<G: Gateway> Dashboard<G> {
    pub fn new(gateway: G, session: Session) -> Self {
        Dashboard {
            gateway,
            session,
            registry: RefCell::new(FunctionRegistry::default()),
            invocation: RefCell::new(InvocationState::default()),
            notifier: Box::new(LogNotifier),
            downloads: Box::new(DirectorySink::new(".")),
        }
    }

    pub fn with_notifier<N: Notifier + 'static>(mut self, notifier: N) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_downloads<D: DownloadSink + 'static>(mut self, downloads: D) -> Self {
        self.downloads = Box::new(downloads);
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> Ref<'_, FunctionRegistry> {
        self.registry.borrow()
    }

    pub fn invocation(&self) -> Ref<'_, InvocationState> {
        self.invocation.borrow()
    }

    pub fn selected(&self) -> Option<RecordRef> {
        self.registry.borrow().selected()
    }

    pub fn visible(&self, search: &str, sort: SortKey) -> Vec<RecordRef> {
        self.registry.borrow().visible(search, sort)
    }

    /// Fetches the functions of the active namespace and reconciles them with
    /// the local set.
    pub async fn refresh_functions(&self) -> Result<Reconciliation> {
        let namespace = self.session.selected_namespace();
        let fetched = self.gateway.list_functions(&namespace).await?;
        let outcome = self.registry.borrow_mut().reconcile(fetched);
        debug!(namespace = %namespace, ?outcome, "functions reconciled");
        Ok(outcome)
    }

    /// Refreshes readiness of the selected function. Failures are logged and dropped.
    pub async fn refresh_selected(&self) {
        let record = match self.selected() {
            Some(record) => record,
            None => return,
        };
        let (name, namespace) = {
            let record = record.borrow();
            (record.name.clone(), record.namespace.clone())
        };
        match self.gateway.get_function(&name, &namespace).await {
            Ok(status) => {
                let mut record = record.borrow_mut();
                record.available_replicas = status.available_replicas;
                record.ready = status.is_ready();
            }
            Err(e) => warn!(function = %name, error = %e, "function status query failed"),
        }
    }

    /// Selects a function. Switching to another function starts a fresh
    /// invocation cycle, selecting the current one again keeps the panel as is.
    pub fn select_function(&self, name: &str) -> Option<RecordRef> {
        let changed = self.registry.borrow().selected_name() != Some(name);
        let record = self.registry.borrow_mut().select(name)?;
        if changed {
            *self.invocation.borrow_mut() = InvocationState::for_function(&record.borrow());
        }
        Some(record)
    }

    /// Opens the create dialog on the manual tab, filled with a copy of the
    /// selected function.
    pub async fn open_clone_dialog(&self) -> Option<CreateFunctionDialog> {
        let record = self.selected()?;
        let mut dialog = self.open_create_dialog().await;
        dialog.select_tab(&self.session, DeployTab::Manual);
        dialog.from_record(&record.borrow());
        Some(dialog)
    }

    pub fn set_request<B: Into<Vec<u8>>>(&self, body: B) {
        self.invocation.borrow_mut().request = body.into();
    }

    pub fn set_content_mode(&self, mode: ContentMode) {
        self.invocation.borrow_mut().mode = mode;
    }

    /// Invokes the selected function with the current request body. Binary
    /// responses are handed to the download sink.
    ///
    /// In-flight requests are never cancelled and the last response to arrive
    /// overwrites the invocation panel, even when the selection moved to another
    /// function in the meantime. Overlapping invocations race the same way.
    pub async fn fire_invocation(&self) -> Result<InvocationStatus> {
        let record = self
            .selected()
            .ok_or_else(|| Error::Custom("no function selected".to_string()))?;
        let (name, namespace, extension) = {
            let record = record.borrow();
            (
                record.name.clone(),
                record.namespace.clone(),
                record.download_extension().map(str::to_string),
            )
        };
        let (body, mode) = {
            let mut state = self.invocation.borrow_mut();
            state.begin();
            (state.request.clone(), state.mode)
        };

        let start = Instant::now();
        let res = self
            .gateway
            .invoke_function(&name, &namespace, body, mode)
            .await;
        let round_trip = start.elapsed().as_secs_f64();

        let (status, response, saved_as) = match res {
            Ok(res) => {
                self.notifier.notify("Success");
                match res.body {
                    InvokeBody::Binary(bytes) => {
                        let filename = invocation::download_filename(extension.as_deref());
                        match self.downloads.save(&filename, &bytes) {
                            Ok(path) => (
                                InvocationStatus::Succeeded(res.status),
                                format!("{} byte(s) received", bytes.len()),
                                Some(path),
                            ),
                            Err(e) => {
                                warn!(function = %name, file = %filename, error = %e, "saving response failed");
                                (InvocationStatus::Succeeded(res.status), e.to_string(), None)
                            }
                        }
                    }
                    body => (
                        InvocationStatus::Succeeded(res.status),
                        invocation::render_response(&body),
                        None,
                    ),
                }
            }
            Err(e) => {
                warn!(function = %name, error = %e, "invocation failed");
                self.notifier.notify("Error");
                let (status, message) = invocation::failure_message(&e);
                (
                    InvocationStatus::Failed {
                        status,
                        message: message.clone(),
                    },
                    message,
                    None,
                )
            }
        };

        self.invocation
            .borrow_mut()
            .finish(status.clone(), response, round_trip, saved_as);
        Ok(status)
    }

    pub async fn load_namespaces(&self) -> Result<()> {
        let namespaces = self.gateway.list_namespaces().await?;
        self.session.namespace_mut().set_all(namespaces);
        Ok(())
    }

    /// Switches namespace: drops the selection and the local set, then fetches
    /// the new namespace right away.
    pub async fn set_namespace(&self, namespace: &str) -> Result<Reconciliation> {
        self.session.namespace_mut().select(namespace);
        self.registry.borrow_mut().clear();
        *self.invocation.borrow_mut() = InvocationState::default();
        self.refresh_functions().await
    }

    /// Deletes the selected function once `confirm` agrees.
    pub async fn delete_selected(&self, confirm: &dyn Confirmation) -> Result<DeleteOutcome> {
        let record = self
            .selected()
            .ok_or_else(|| Error::Custom("no function selected".to_string()))?;
        let (name, namespace) = {
            let record = record.borrow();
            (record.name.clone(), record.namespace.clone())
        };

        let prompt = format!("Are you sure you want to delete {}?", name);
        if !confirm.confirm(&prompt) {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.gateway.delete_function(&name, &namespace).await {
            warn!(function = %name, error = %e, "delete failed");
            self.notifier.notify("Error");
            return Err(e);
        }
        self.notifier.notify("Success");
        if let Err(e) = self.refresh_functions().await {
            warn!(error = %e, "refresh after delete failed");
        }
        Ok(DeleteOutcome::Deleted)
    }

    /// editor seeded from the selected function
    pub fn metadata_editor(&self) -> Option<MetadataEditor> {
        let record = self.selected()?;
        let editor = MetadataEditor::for_function(&record.borrow());
        Some(editor)
    }

    pub async fn submit_metadata(&self, editor: &mut MetadataEditor) -> Result<()> {
        editor.submit(&self.gateway, self.notifier.as_ref()).await
    }

    /// Refreshes the namespace list and opens the create dialog.
    pub async fn open_create_dialog(&self) -> CreateFunctionDialog {
        if let Err(e) = self.load_namespaces().await {
            warn!(error = %e, "namespace list failed");
        }
        CreateFunctionDialog::new(&self.session)
    }

    pub async fn create_function(&self, dialog: &mut CreateFunctionDialog) -> Result<()> {
        dialog
            .submit(&self.session, &self.gateway, self.notifier.as_ref())
            .await?;
        if let Err(e) = self.refresh_functions().await {
            warn!(error = %e, "refresh after create failed");
        }
        Ok(())
    }
}
