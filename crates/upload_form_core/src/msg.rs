use crate::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// File picker changed; carries the picker's new value.
    FileChanged(String),
    /// Pattern text input changed.
    PatternChanged(String),
    /// Mode select changed.
    ModeChanged(Mode),
    /// Host form fired its submit event.
    FormSubmitted,
    /// Fallback for placeholder wiring.
    NoOp,
}
