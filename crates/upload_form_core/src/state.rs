use crate::view_model::{FormViewModel, SubmitView};
use crate::{Mode, StyleState};

/// Label shown on the submit button while the upload is in flight.
pub const PLEASE_WAIT_LABEL: &str = "Please wait while form is being submited...";

/// Mirror of what the controller last commanded on the page.
///
/// Starts out the way the upload page is served: nothing selected, the pattern
/// input and the submit button hidden, the submit button disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    file: String,
    pattern: String,
    pattern_visible: bool,
    mode: Mode,
    submit: SubmitView,
    submitted: bool,
    wait_label: String,
    dirty: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            file: String::new(),
            pattern: String::new(),
            pattern_visible: false,
            mode: Mode::Empty,
            submit: SubmitView::default(),
            submitted: false,
            wait_label: PLEASE_WAIT_LABEL.to_owned(),
            dirty: false,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the label shown once the form is submitted.
    pub fn with_wait_label(mut self, label: impl Into<String>) -> Self {
        self.wait_label = label.into();
        self
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel {
            file: self.file.clone(),
            pattern: self.pattern.clone(),
            pattern_visible: self.pattern_visible,
            mode: self.mode.clone(),
            submit: self.submit.clone(),
            submitted: self.submitted,
            dirty: self.dirty,
        }
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn wait_label(&self) -> &str {
        &self.wait_label
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_file(&mut self, value: String) {
        if self.file != value {
            self.file = value;
            self.dirty = true;
        }
    }

    pub(crate) fn set_pattern(&mut self, value: String) {
        if self.pattern != value {
            self.pattern = value;
            self.dirty = true;
        }
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.dirty = true;
        }
    }

    pub(crate) fn set_pattern_visible(&mut self, visible: bool) {
        if self.pattern_visible != visible {
            self.pattern_visible = visible;
            self.dirty = true;
        }
    }

    pub(crate) fn set_submit_shown(&mut self, shown: bool) {
        if self.submit.enabled != shown || self.submit.visible != shown {
            self.submit.enabled = shown;
            self.submit.visible = shown;
            self.dirty = true;
        }
    }

    /// Locks the submit button: waiting label, active style, disabled.
    /// The button keeps its visibility.
    pub(crate) fn mark_submitted(&mut self) {
        let label = Some(self.wait_label.clone());
        if !self.submitted
            || self.submit.enabled
            || self.submit.style != StyleState::Active
            || self.submit.label != label
        {
            self.submitted = true;
            self.submit.enabled = false;
            self.submit.style = StyleState::Active;
            self.submit.label = label;
            self.dirty = true;
        }
    }
}
