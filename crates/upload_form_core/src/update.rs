use crate::{Control, Effect, FormState, Mode, Msg, StyleState, SLIDE_DURATION_MS};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let mut effects = Vec::new();
    match msg {
        Msg::FileChanged(value) => {
            let shown = !value.is_empty();
            state.set_file(value);
            toggle_submit(&mut state, &mut effects, shown);
        }
        Msg::PatternChanged(value) => {
            let shown = !value.is_empty();
            state.set_pattern(value);
            toggle_submit(&mut state, &mut effects, shown);
        }
        Msg::ModeChanged(mode) => {
            state.set_mode(mode.clone());
            match mode {
                Mode::Other(_) => {
                    toggle_submit(&mut state, &mut effects, false);
                    show_pattern(&mut state, &mut effects);
                }
                Mode::Summary => {
                    hide_pattern(&mut state, &mut effects);
                    clear_pattern(&mut state, &mut effects);
                    toggle_submit(&mut state, &mut effects, true);
                }
                Mode::Empty => {
                    clear_pattern(&mut state, &mut effects);
                    hide_pattern(&mut state, &mut effects);
                    toggle_submit(&mut state, &mut effects, false);
                }
            }
        }
        Msg::FormSubmitted => {
            state.mark_submitted();
            effects.push(Effect::SetLabel {
                control: Control::SubmitButton,
                text: state.wait_label().to_owned(),
            });
            effects.push(Effect::SwapStyle {
                control: Control::SubmitButton,
                from: StyleState::Inactive,
                to: StyleState::Active,
            });
            effects.push(Effect::SetEnabled {
                control: Control::SubmitButton,
                enabled: false,
            });
        }
        Msg::NoOp => {}
    }

    (state, effects)
}

/// Enables and reveals, or disables and hides, the submit button.
/// After submission the button stays locked until the page reloads.
fn toggle_submit(state: &mut FormState, effects: &mut Vec<Effect>, shown: bool) {
    if state.submitted() {
        return;
    }
    state.set_submit_shown(shown);
    effects.push(Effect::SetEnabled {
        control: Control::SubmitButton,
        enabled: shown,
    });
    effects.push(slide(Control::SubmitButton, shown));
}

fn show_pattern(state: &mut FormState, effects: &mut Vec<Effect>) {
    state.set_pattern_visible(true);
    effects.push(slide(Control::PatternInput, true));
}

fn hide_pattern(state: &mut FormState, effects: &mut Vec<Effect>) {
    state.set_pattern_visible(false);
    effects.push(slide(Control::PatternInput, false));
}

fn clear_pattern(state: &mut FormState, effects: &mut Vec<Effect>) {
    state.set_pattern(String::new());
    effects.push(Effect::ClearValue {
        control: Control::PatternInput,
    });
}

fn slide(control: Control, down: bool) -> Effect {
    if down {
        Effect::SlideDown {
            control,
            duration_ms: SLIDE_DURATION_MS,
        }
    } else {
        Effect::SlideUp {
            control,
            duration_ms: SLIDE_DURATION_MS,
        }
    }
}
