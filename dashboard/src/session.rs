use crate::namespace::NamespaceContext;
use std::cell::{Cell, Ref, RefCell, RefMut};

/// Tabs of the create-function dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTab {
    Store = 0,
    Manual = 1,
}

impl Default for DeployTab {
    fn default() -> Self {
        DeployTab::Store
    }
}

/// State shared by every dialog of one dashboard session.
#[derive(Debug, Default)]
pub struct Session {
    namespace: RefCell<NamespaceContext>,
    deploy_tab: Cell<DeployTab>,
}

impl Session {
    pub fn new(namespace: NamespaceContext) -> Self {
        Session {
            namespace: RefCell::new(namespace),
            deploy_tab: Cell::new(DeployTab::default()),
        }
    }

    pub fn namespace(&self) -> Ref<'_, NamespaceContext> {
        self.namespace.borrow()
    }

    pub fn namespace_mut(&self) -> RefMut<'_, NamespaceContext> {
        self.namespace.borrow_mut()
    }

    /// owned copy of the selected namespace, safe to hold across an await
    pub fn selected_namespace(&self) -> String {
        self.namespace.borrow().selected().to_string()
    }

    /// tab the next create-function dialog opens on
    pub fn deploy_tab(&self) -> DeployTab {
        self.deploy_tab.get()
    }

    pub fn remember_deploy_tab(&self, tab: DeployTab) {
        self.deploy_tab.set(tab);
    }
}
