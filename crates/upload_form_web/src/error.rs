use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the controller to the page.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no window or document available")]
    NoDocument,

    #[error("control #{id} not found on the page")]
    MissingControl { id: String },

    #[error("control #{id} is not {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("no form matches `{selector}`")]
    MissingForm { selector: String },

    #[error("invalid form config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
