/// Option value that asks for a summary of the uploaded file.
pub const SUMMARY: &str = "Summary";

/// Value of the mode select, converted once from the raw option string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Placeholder option; nothing selected.
    #[default]
    Empty,
    Summary,
    /// Any other option. These need a search pattern before submitting.
    Other(String),
}

impl Mode {
    /// Comparison is exact: no trimming, no case folding.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => Mode::Empty,
            SUMMARY => Mode::Summary,
            other => Mode::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mode::Empty => "",
            Mode::Summary => SUMMARY,
            Mode::Other(value) => value,
        }
    }
}

impl From<&str> for Mode {
    fn from(raw: &str) -> Self {
        Mode::parse(raw)
    }
}

impl From<String> for Mode {
    fn from(raw: String) -> Self {
        Mode::parse(&raw)
    }
}
