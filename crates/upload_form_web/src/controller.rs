use std::cell::RefCell;
use std::rc::Rc;

use form_logging::{form_debug, form_info, form_trace};
use gloo::events::EventListener;
use upload_form_core::{update, FormState, FormViewModel, Mode, Msg};
use web_sys::Document;

use crate::{BindError, EffectRunner, FormBindings, FormConfig};

/// Live wiring between the page and the form state machine.
///
/// Dropping the controller removes every listener it registered.
pub struct FormController {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

struct Inner {
    state: RefCell<FormState>,
    runner: RefCell<EffectRunner>,
}

impl FormController {
    pub fn attach(document: &Document, config: FormConfig) -> Result<Self, BindError> {
        let bindings = FormBindings::resolve(document, &config)?;

        let mut state = FormState::new();
        if let Some(label) = &config.wait_label {
            state = state.with_wait_label(label.clone());
        }
        let inner = Rc::new(Inner {
            state: RefCell::new(state),
            runner: RefCell::new(EffectRunner::new(bindings.clone(), config.clone())),
        });

        let mut listeners = Vec::with_capacity(3 + bindings.forms.len());
        {
            let inner = Rc::clone(&inner);
            let input = bindings.file_input.clone();
            listeners.push(EventListener::new(&bindings.file_input, "change", move |_| {
                inner.dispatch(Msg::FileChanged(input.value()));
            }));
        }
        {
            let inner = Rc::clone(&inner);
            let input = bindings.pattern_input.clone();
            listeners.push(EventListener::new(&bindings.pattern_input, "change", move |_| {
                inner.dispatch(Msg::PatternChanged(input.value()));
            }));
        }
        {
            let inner = Rc::clone(&inner);
            let select = bindings.mode_select.clone();
            listeners.push(EventListener::new(&bindings.mode_select, "change", move |_| {
                inner.dispatch(Msg::ModeChanged(Mode::from(select.value())));
            }));
        }
        for form in &bindings.forms {
            let inner = Rc::clone(&inner);
            // The default action is never prevented; the upload always goes through.
            listeners.push(EventListener::new(form, "submit", move |_| {
                inner.dispatch(Msg::FormSubmitted);
            }));
        }

        form_info!(
            "upload form bound: file=#{} mode=#{} pattern=#{} submit=#{} forms={}",
            config.file_input_id,
            config.mode_select_id,
            config.pattern_input_id,
            config.submit_button_id,
            bindings.forms.len()
        );

        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }

    /// Feeds a message through the state machine as if the page had raised it.
    pub fn dispatch(&self, msg: Msg) {
        self.inner.dispatch(msg);
    }

    pub fn view(&self) -> FormViewModel {
        self.inner.state.borrow().view()
    }
}

impl Inner {
    fn dispatch(&self, msg: Msg) {
        form_debug!("msg {:?}", msg);
        let effects = {
            let mut guard = self.state.borrow_mut();
            let state = std::mem::take(&mut *guard);
            let (mut state, effects) = update(state, msg);
            if state.consume_dirty() {
                form_trace!("view {:?}", state.view());
            }
            *guard = state;
            effects
        };
        self.runner.borrow_mut().run(effects);
    }
}
