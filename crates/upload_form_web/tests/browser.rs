#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use upload_form_core::{Msg, PLEASE_WAIT_LABEL};
use upload_form_web::{BindError, FormConfig, FormController};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

const UPLOAD_PAGE: &str = r#"
<form id="upload" action="javascript:void(0)">
  <input type="file" id="button1" name="file">
  <select id="button2" name="selectedOption">
    <option value="">Choose an option</option>
    <option>Summary</option>
    <option>Fetch Gene(s)</option>
    <option>Find Site(s)</option>
  </select>
  <input type="text" id="button3" name="optionInputValue" style="display: none">
  <input type="submit" id="button4" class="buttonInactive" value="Upload" disabled style="display: none">
</form>
"#;

fn build_page(html: &str) -> Document {
    form_logging::initialize_for_tests();
    let document = web_sys::window().unwrap().document().unwrap();
    // Keep the test runner's own markup; render into a dedicated fixture.
    let fixture = match document.get_element_by_id("fixture") {
        Some(fixture) => fixture,
        None => {
            let fixture = document.create_element("div").unwrap();
            fixture.set_id("fixture");
            document.body().unwrap().append_child(&fixture).unwrap();
            fixture
        }
    };
    fixture.set_inner_html(html);
    document
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> T {
    document.get_element_by_id(id).unwrap().dyn_into().unwrap()
}

fn fire(document: &Document, id: &str, event: &str) {
    let el: HtmlElement = by_id(document, id);
    el.dispatch_event(&Event::new(event).unwrap()).unwrap();
}

/// Dispatches a cancelable submit; returns whether the default action survived.
fn submit_form(document: &Document, id: &str) -> bool {
    let form: HtmlElement = by_id(document, id);
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    let not_canceled = form.dispatch_event(&event).unwrap();
    not_canceled && !event.default_prevented()
}

fn is_displayed(document: &Document, id: &str) -> bool {
    let el: HtmlElement = by_id(document, id);
    el.style().get_property_value("display").unwrap() != "none"
}

fn is_disabled(document: &Document, id: &str) -> bool {
    let el: HtmlElement = by_id(document, id);
    el.has_attribute("disabled")
}

async fn settle() {
    TimeoutFuture::new(200).await;
}

#[wasm_bindgen_test]
async fn summary_then_file_then_submit() {
    let document = build_page(UPLOAD_PAGE);
    let controller = FormController::attach(&document, FormConfig::default()).unwrap();

    let select: HtmlSelectElement = by_id(&document, "button2");
    select.set_value("Summary");
    fire(&document, "button2", "change");
    // Browsers refuse scripted file selection, so the file change is fed directly.
    controller.dispatch(Msg::FileChanged("NC_000913.gb".to_string()));
    settle().await;

    assert!(!is_disabled(&document, "button4"));
    assert!(is_displayed(&document, "button4"));
    assert!(!is_displayed(&document, "button3"));

    assert!(submit_form(&document, "upload"));
    let submit: HtmlInputElement = by_id(&document, "button4");
    assert_eq!(submit.value(), PLEASE_WAIT_LABEL);
    assert!(submit.disabled());
    assert!(submit.class_list().contains("buttonActive"));
    assert!(!submit.class_list().contains("buttonInactive"));
    assert!(controller.view().submitted);

    // A second attempt (Enter in a field) still goes through and keeps the lock.
    assert!(submit_form(&document, "upload"));
    assert!(submit.disabled());
    assert_eq!(submit.value(), PLEASE_WAIT_LABEL);
}

#[wasm_bindgen_test]
async fn other_mode_reveals_pattern_and_pattern_enables_submit() {
    let document = build_page(UPLOAD_PAGE);
    let _controller = FormController::attach(&document, FormConfig::default()).unwrap();

    let select: HtmlSelectElement = by_id(&document, "button2");
    select.set_value("Fetch Gene(s)");
    fire(&document, "button2", "change");
    settle().await;

    assert!(is_displayed(&document, "button3"));
    assert!(!is_displayed(&document, "button4"));
    assert!(is_disabled(&document, "button4"));

    let pattern: HtmlInputElement = by_id(&document, "button3");
    pattern.set_value("dnaA");
    fire(&document, "button3", "change");
    settle().await;

    assert!(is_displayed(&document, "button4"));
    assert!(!is_disabled(&document, "button4"));

    pattern.set_value("");
    fire(&document, "button3", "change");
    settle().await;

    assert!(!is_displayed(&document, "button4"));
    assert!(is_disabled(&document, "button4"));
}

#[wasm_bindgen_test]
async fn empty_mode_clears_and_hides_pattern() {
    let document = build_page(UPLOAD_PAGE);
    let controller = FormController::attach(&document, FormConfig::default()).unwrap();

    let select: HtmlSelectElement = by_id(&document, "button2");
    select.set_value("Find Site(s)");
    fire(&document, "button2", "change");
    let pattern: HtmlInputElement = by_id(&document, "button3");
    pattern.set_value("GAATTC");
    fire(&document, "button3", "change");
    settle().await;

    select.set_value("");
    fire(&document, "button2", "change");
    settle().await;

    assert_eq!(pattern.value(), "");
    assert!(!is_displayed(&document, "button3"));
    assert!(!is_displayed(&document, "button4"));
    assert_eq!(controller.view().pattern, "");
}

#[wasm_bindgen_test]
async fn latest_slide_wins() {
    let document = build_page(UPLOAD_PAGE);
    let controller = FormController::attach(&document, FormConfig::default()).unwrap();

    controller.dispatch(Msg::FileChanged("a.gb".to_string()));
    controller.dispatch(Msg::FileChanged(String::new()));
    settle().await;

    assert!(!is_displayed(&document, "button4"));
    assert!(is_disabled(&document, "button4"));
}

#[wasm_bindgen_test]
fn custom_config_binds_other_ids() {
    let document = build_page(
        r#"
<form class="gbk">
  <input type="file" id="gbk-file">
  <select id="gbk-mode"><option value="">-</option><option>Summary</option></select>
  <input type="text" id="gbk-pattern">
  <button type="submit" id="gbk-submit" class="idle">Upload</button>
</form>
"#,
    );
    let config = FormConfig::from_json(
        r#"{
            "file_input_id": "gbk-file",
            "mode_select_id": "gbk-mode",
            "pattern_input_id": "gbk-pattern",
            "submit_button_id": "gbk-submit",
            "form_selector": "form.gbk",
            "inactive_class": "idle",
            "active_class": "busy",
            "wait_label": "Uploading..."
        }"#,
    )
    .unwrap();
    let controller = FormController::attach(&document, config).unwrap();

    controller.dispatch(Msg::FormSubmitted);

    let button: HtmlElement = by_id(&document, "gbk-submit");
    assert_eq!(button.text_content().as_deref(), Some("Uploading..."));
    assert!(button.class_list().contains("busy"));
    assert!(!button.class_list().contains("idle"));
    assert!(button.has_attribute("disabled"));
}

#[wasm_bindgen_test]
fn missing_control_is_reported() {
    let document = build_page(r#"<form><input type="file" id="button1"></form>"#);

    match FormController::attach(&document, FormConfig::default()) {
        Err(BindError::MissingControl { id }) => assert_eq!(id, "button2"),
        other => panic!("unexpected result: {:?}", other.err()),
    }
}

#[wasm_bindgen_test]
fn wrong_element_type_is_reported() {
    let document = build_page(
        r#"<form>
  <input type="file" id="button1">
  <input type="text" id="button2">
  <input type="text" id="button3">
  <input type="submit" id="button4">
</form>"#,
    );

    match FormController::attach(&document, FormConfig::default()) {
        Err(BindError::WrongElementType { id, .. }) => assert_eq!(id, "button2"),
        other => panic!("unexpected result: {:?}", other.err()),
    }
}

#[wasm_bindgen_test]
fn missing_form_is_reported() {
    let document = build_page(
        r#"
  <input type="file" id="button1">
  <select id="button2"></select>
  <input type="text" id="button3">
  <input type="submit" id="button4">
"#,
    );

    assert!(matches!(
        FormController::attach(&document, FormConfig::default()),
        Err(BindError::MissingForm { .. })
    ));
}
