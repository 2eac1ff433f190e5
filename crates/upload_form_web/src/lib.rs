//! GenBank upload form controller (WASM).
//!
//! Binds the upload page's file picker, mode select, pattern input and submit
//! button once the DOM is ready, and keeps them in step with
//! [`upload_form_core`].
mod bindings;
mod config;
mod controller;
mod effects;
mod error;
mod slide;

use std::cell::RefCell;

use form_logging::{form_error, form_info};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use bindings::FormBindings;
pub use config::FormConfig;
pub use controller::FormController;
pub use effects::EffectRunner;
pub use error::BindError;

thread_local! {
    static CONTROLLER: RefCell<Option<FormController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    form_logging::initialize(form_logging::default_level());

    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            form_error!("upload form not attached: {}", err);
            return;
        }
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| attach_default()).forget();
    } else {
        attach_default();
    }
}

/// Attaches the controller with a JSON config, replacing any earlier one.
/// Omitted fields keep the upload page defaults.
#[wasm_bindgen]
pub fn attach_upload_form(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(raw) => FormConfig::from_json(&raw)?,
        None => FormConfig::default(),
    };
    install(config)?;
    Ok(())
}

/// Runs at page-ready; a controller the page attached earlier takes precedence.
fn attach_default() {
    if CONTROLLER.with(|slot| slot.borrow().is_some()) {
        form_info!("upload form already attached; default binding skipped");
        return;
    }
    if let Err(err) = install(FormConfig::default()) {
        form_error!("upload form not attached: {}", err);
    }
}

fn install(config: FormConfig) -> Result<(), BindError> {
    let controller = FormController::attach(&document()?, config)?;
    let replaced = CONTROLLER.with(|slot| slot.replace(Some(controller)));
    if replaced.is_some() {
        form_info!("previous upload form controller detached");
    }
    Ok(())
}

fn document() -> Result<Document, BindError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BindError::NoDocument)
}
