use crate::{Mode, StyleState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitView {
    pub enabled: bool,
    pub visible: bool,
    /// `None` while the page's own label is still shown.
    pub label: Option<String>,
    pub style: StyleState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub file: String,
    pub pattern: String,
    pub pattern_visible: bool,
    pub mode: Mode,
    pub submit: SubmitView,
    pub submitted: bool,
    pub dirty: bool,
}
