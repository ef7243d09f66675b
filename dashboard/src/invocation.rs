//! State of the ad-hoc invocation panel.

use proxy::{ContentMode, InvokeBody};
use reqwest::StatusCode;
use std::path::PathBuf;
use utility::faas::types::model::FunctionStatus;
use utility::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum InvocationStatus {
    Idle,
    InProgress,
    Succeeded(u16),
    /// `status` is `None` when no response arrived at all
    Failed {
        status: Option<u16>,
        message: String,
    },
}

impl Default for InvocationStatus {
    fn default() -> Self {
        InvocationStatus::Idle
    }
}

/// One invocation cycle of the selected function. Replaced when the selection
/// changes; the last response to arrive wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationState {
    pub function: String,
    pub request: Vec<u8>,
    pub mode: ContentMode,
    status: InvocationStatus,
    response: String,
    round_trip_seconds: Option<f64>,
    saved_as: Option<PathBuf>,
}

impl InvocationState {
    /// Binary mode is preselected for functions that declare a download extension.
    pub fn for_function(record: &FunctionStatus) -> Self {
        let mode = if record.labels.contains_key(utility::UI_EXTENSION_LABEL) {
            ContentMode::Binary
        } else {
            ContentMode::Text
        };
        InvocationState {
            function: record.name.clone(),
            mode,
            ..Default::default()
        }
    }

    pub fn begin(&mut self) {
        self.status = InvocationStatus::InProgress;
        self.response.clear();
        self.round_trip_seconds = None;
        self.saved_as = None;
    }

    pub fn finish(
        &mut self,
        status: InvocationStatus,
        response: String,
        round_trip_seconds: f64,
        saved_as: Option<PathBuf>,
    ) {
        self.status = status;
        self.response = response;
        self.round_trip_seconds = Some(round_trip_seconds);
        self.saved_as = saved_as;
    }

    pub fn status(&self) -> &InvocationStatus {
        &self.status
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn round_trip_seconds(&self) -> Option<f64> {
        self.round_trip_seconds
    }

    pub fn saved_as(&self) -> Option<&PathBuf> {
        self.saved_as.as_ref()
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == InvocationStatus::InProgress
    }
}

/// random name for a saved binary response
pub fn download_filename(extension: Option<&str>) -> String {
    let id = Uuid::new_v4();
    match extension {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}

/// JSON documents are pretty printed with a two space indent, text is kept verbatim.
/// Binary bodies are never rendered here.
pub fn render_response(body: &InvokeBody) -> String {
    match body {
        InvokeBody::Text(text) => text.clone(),
        InvokeBody::Json(serde_json::Value::String(text)) => text.clone(),
        InvokeBody::Json(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        InvokeBody::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// status of a failed invocation and the message shown for it: the status
/// text followed by the response body
pub fn failure_message(err: &Error) -> (Option<u16>, String) {
    match err {
        Error::Status { code, body } => (Some(*code), format!("{}\n{}", status_text(*code), body)),
        other => match other.status_code() {
            Some(code) => (Some(code), format!("{}\n{}", status_text(code), other)),
            None => (None, other.to_string()),
        },
    }
}

fn status_text(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}
