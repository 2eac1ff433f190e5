/// Duration of every slide transition issued by the controller.
pub const SLIDE_DURATION_MS: u32 = 100;

/// The page controls the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    FileInput,
    ModeSelect,
    PatternInput,
    SubmitButton,
}

/// Style state of the submit button, mapped to CSS classes by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleState {
    #[default]
    Inactive,
    Active,
}

/// Fire-and-forget commands for the platform layer. None of them report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetEnabled { control: Control, enabled: bool },
    SlideDown { control: Control, duration_ms: u32 },
    SlideUp { control: Control, duration_ms: u32 },
    ClearValue { control: Control },
    SetLabel { control: Control, text: String },
    SwapStyle {
        control: Control,
        from: StyleState,
        to: StyleState,
    },
}
