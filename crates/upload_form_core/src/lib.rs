//! Upload form core: pure state machine for the GenBank upload form controls.
mod effect;
mod mode;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Control, Effect, StyleState, SLIDE_DURATION_MS};
pub use mode::{Mode, SUMMARY};
pub use msg::Msg;
pub use state::{FormState, PLEASE_WAIT_LABEL};
pub use update::update;
pub use view_model::{FormViewModel, SubmitView};
