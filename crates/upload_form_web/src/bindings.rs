//! Page controls, looked up once and handed to the listeners and the effect runner.

use upload_form_core::Control;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::{BindError, FormConfig};

#[derive(Debug, Clone)]
pub struct FormBindings {
    pub file_input: HtmlInputElement,
    pub mode_select: HtmlSelectElement,
    pub pattern_input: HtmlInputElement,
    pub submit_button: HtmlElement,
    pub forms: Vec<HtmlFormElement>,
}

impl FormBindings {
    pub fn resolve(document: &Document, config: &FormConfig) -> Result<Self, BindError> {
        Ok(Self {
            file_input: lookup(document, &config.file_input_id, "an <input>")?,
            mode_select: lookup(document, &config.mode_select_id, "a <select>")?,
            pattern_input: lookup(document, &config.pattern_input_id, "an <input>")?,
            submit_button: lookup(document, &config.submit_button_id, "an HTML element")?,
            forms: find_forms(document, &config.form_selector)?,
        })
    }

    pub fn element(&self, control: Control) -> &HtmlElement {
        match control {
            Control::FileInput => &*self.file_input,
            Control::ModeSelect => &*self.mode_select,
            Control::PatternInput => &*self.pattern_input,
            Control::SubmitButton => &self.submit_button,
        }
    }
}

fn lookup<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingControl { id: id.to_string() })?
        .dyn_into::<T>()
        .map_err(|_| BindError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

fn find_forms(document: &Document, selector: &str) -> Result<Vec<HtmlFormElement>, BindError> {
    let missing = || BindError::MissingForm {
        selector: selector.to_string(),
    };
    let nodes = document.query_selector_all(selector).map_err(|_| missing())?;
    let forms: Vec<HtmlFormElement> = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlFormElement>().ok())
        .collect();
    if forms.is_empty() {
        return Err(missing());
    }
    Ok(forms)
}
