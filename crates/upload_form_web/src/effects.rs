use std::collections::HashMap;

use form_logging::{form_trace, form_warn};
use gloo::timers::callback::Timeout;
use upload_form_core::{Control, Effect};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::{slide, FormBindings, FormConfig};

pub struct EffectRunner {
    bindings: FormBindings,
    config: FormConfig,
    /// Finishing timers of in-flight slides, one per control.
    pending: HashMap<Control, Timeout>,
}

impl EffectRunner {
    pub fn new(bindings: FormBindings, config: FormConfig) -> Self {
        Self {
            bindings,
            config,
            pending: HashMap::new(),
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            form_trace!("effect {:?}", effect);
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SetEnabled { control, enabled } => {
                let el = self.bindings.element(control);
                let result = if enabled {
                    el.remove_attribute("disabled")
                } else {
                    el.set_attribute("disabled", "")
                };
                if let Err(err) = result {
                    form_warn!("{:?}: could not set enabled={}: {:?}", control, enabled, err);
                }
            }
            Effect::SlideDown {
                control,
                duration_ms,
            } => {
                // Dropping the previous timer cancels its finish.
                self.pending.remove(&control);
                if let Some(timer) = slide::down(self.bindings.element(control), duration_ms) {
                    self.pending.insert(control, timer);
                }
            }
            Effect::SlideUp {
                control,
                duration_ms,
            } => {
                // Dropping the previous timer cancels its finish.
                self.pending.remove(&control);
                if let Some(timer) = slide::up(self.bindings.element(control), duration_ms) {
                    self.pending.insert(control, timer);
                }
            }
            Effect::ClearValue { control } => match control {
                Control::PatternInput => self.bindings.pattern_input.set_value(""),
                _ => form_warn!("{:?}: clearing is only wired for the pattern input", control),
            },
            Effect::SetLabel { control, text } => {
                set_label(self.bindings.element(control), &text);
            }
            Effect::SwapStyle { control, from, to } => {
                let classes = self.bindings.element(control).class_list();
                let from = self.config.class_for(from);
                let to = self.config.class_for(to);
                if let Err(err) = classes.remove_1(from).and_then(|()| classes.add_1(to)) {
                    form_warn!("{:?}: could not swap {} -> {}: {:?}", control, from, to, err);
                }
            }
        }
    }
}

/// `<input type="submit">` shows its value; anything else shows its text.
fn set_label(el: &HtmlElement, text: &str) {
    match el.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.set_value(text),
        None => el.set_text_content(Some(text)),
    }
}
