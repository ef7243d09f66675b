/// The namespace functions are listed, invoked and managed in.
/// An empty selection is the gateway's default namespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamespaceContext {
    selected: String,
    all: Vec<String>,
}

impl NamespaceContext {
    pub fn new<S: Into<String>>(selected: S) -> Self {
        NamespaceContext {
            selected: selected.into(),
            all: Vec::new(),
        }
    }

    pub fn selected(&self) -> &str {
        self.selected.as_str()
    }

    pub fn all(&self) -> &[String] {
        &self.all
    }

    pub fn set_all(&mut self, namespaces: Vec<String>) {
        self.all = namespaces;
    }

    /// returns whether the selection changed
    pub fn select(&mut self, namespace: &str) -> bool {
        if self.selected == namespace {
            return false;
        }
        self.selected = namespace.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::NamespaceContext;

    #[test]
    fn select_reports_change() {
        let mut ctx = NamespaceContext::default();
        assert_eq!(ctx.selected(), "");
        assert!(ctx.select("prod"));
        assert!(!ctx.select("prod"));
        assert_eq!(ctx.selected(), "prod");
    }
}
