//! Local copy of the function list and its reconciliation with each poll.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;
use utility::faas::types::model::FunctionStatus;

/// Shared handle on a function record. Handles survive a poll when the
/// function set keeps its shape, so views bound to one keep working.
pub type RecordRef = Rc<RefCell<FunctionStatus>>;

/// What a poll did to the local function set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// cardinality or namespace changed, every record was replaced
    Replaced { selection_cleared: bool },
    /// same shape, mutable fields of `patched` records were updated in place
    Patched { patched: usize },
}

/// Merges `fetched` into `current`.
///
/// A change of namespace or of the number of functions replaces the whole set and
/// drops `selection` when its function is gone. Otherwise image, replicas and
/// invocation count are patched by name, keeping every handle.
///
/// A poll where one function was removed and another created is seen as
/// "same shape": the new function only shows up after the next size change.
pub fn reconcile(
    current: &mut Vec<RecordRef>,
    fetched: Vec<FunctionStatus>,
    selection: &mut Option<String>,
) -> Reconciliation {
    let current_namespace = current
        .first()
        .map(|record| record.borrow().namespace.clone())
        .unwrap_or_default();
    let fetched_namespace = fetched
        .first()
        .map(|record| record.namespace.as_str())
        .unwrap_or("");

    let changed_namespace = current_namespace != fetched_namespace;
    let changed_cardinality = current.len() != fetched.len();

    if changed_namespace || changed_cardinality {
        *current = fetched
            .into_iter()
            .map(|record| Rc::new(RefCell::new(record)))
            .collect();

        let selection_cleared = match selection {
            Some(name) => !current.iter().any(|record| record.borrow().name == *name),
            None => false,
        };
        if selection_cleared {
            *selection = None;
        }
        return Reconciliation::Replaced { selection_cleared };
    }

    let by_name: HashMap<&str, &FunctionStatus> = fetched
        .iter()
        .map(|record| (record.name.as_str(), record))
        .collect();

    let mut patched = 0;
    for record in current.iter() {
        let mut record = record.borrow_mut();
        if let Some(update) = by_name.get(record.name.as_str()) {
            record.image = update.image.clone();
            record.replicas = update.replicas;
            record.invocation_count = update.invocation_count;
            patched += 1;
        }
    }
    Reconciliation::Patched { patched }
}

/// Ordering of the function list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    /// most invoked first
    Invocations,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Name
    }
}

/// Functions of the active namespace plus the operator's selection.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: Vec<RecordRef>,
    selected: Option<String>,
}

impl FunctionRegistry {
    pub fn functions(&self) -> &[RecordRef] {
        &self.functions
    }

    pub fn reconcile(&mut self, fetched: Vec<FunctionStatus>) -> Reconciliation {
        reconcile(&mut self.functions, fetched, &mut self.selected)
    }

    pub fn find(&self, name: &str) -> Option<RecordRef> {
        self.functions
            .iter()
            .find(|record| record.borrow().name == name)
            .cloned()
    }

    /// selects `name`, returning its record; unknown names leave the selection as is
    pub fn select(&mut self, name: &str) -> Option<RecordRef> {
        let record = self.find(name)?;
        self.selected = Some(name.to_string());
        Some(record)
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<RecordRef> {
        self.selected.as_deref().and_then(|name| self.find(name))
    }

    pub fn clear(&mut self) {
        self.functions.clear();
        self.selected = None;
    }

    /// functions whose name contains `search`, in `sort` order
    pub fn visible(&self, search: &str, sort: SortKey) -> Vec<RecordRef> {
        let mut visible: Vec<RecordRef> = self
            .functions
            .iter()
            .filter(|record| record.borrow().name.contains(search))
            .cloned()
            .collect();
        visible.sort_by(|a, b| {
            let (a, b) = (a.borrow(), b.borrow());
            match sort {
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Invocations => b
                    .invocation_count
                    .partial_cmp(&a.invocation_count)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.name.cmp(&b.name)),
            }
        });
        visible
    }
}
