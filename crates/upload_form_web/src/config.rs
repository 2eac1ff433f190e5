//! Identifiers and names the controller needs from the host page.

use serde::Deserialize;
use upload_form_core::{Control, StyleState};

use crate::BindError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub file_input_id: String,
    pub mode_select_id: String,
    pub pattern_input_id: String,
    pub submit_button_id: String,
    /// CSS selector for the form(s) whose submission locks the submit button.
    pub form_selector: String,
    pub inactive_class: String,
    pub active_class: String,
    /// Replaces the default "please wait" label when set.
    pub wait_label: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            file_input_id: "button1".to_string(),
            mode_select_id: "button2".to_string(),
            pattern_input_id: "button3".to_string(),
            submit_button_id: "button4".to_string(),
            form_selector: "form".to_string(),
            inactive_class: "buttonInactive".to_string(),
            active_class: "buttonActive".to_string(),
            wait_label: None,
        }
    }
}

impl FormConfig {
    /// Parses a JSON object; omitted fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, BindError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn id_for(&self, control: Control) -> &str {
        match control {
            Control::FileInput => &self.file_input_id,
            Control::ModeSelect => &self.mode_select_id,
            Control::PatternInput => &self.pattern_input_id,
            Control::SubmitButton => &self.submit_button_id,
        }
    }

    pub fn class_for(&self, style: StyleState) -> &str {
        match style {
            StyleState::Inactive => &self.inactive_class,
            StyleState::Active => &self.active_class,
        }
    }
}
