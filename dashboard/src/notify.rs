/// Short user-facing notifications ("Success", "Error", ...).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Sends notifications to the log.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "faas_ui::notify", "{}", message);
    }
}

/// Asks the operator to confirm a destructive action. `false` means cancelled.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
