//! Input plumbing: raw window events become logical navigation actions.
//!
//! # Invariants
//! - The navigator only ever sees [`Action`]s, never platform key codes.
//! - Events are queued by window callbacks and drained once per frame, so every
//!   event delivered before a frame is applied before that frame steps.

pub mod action;
pub mod bindings;
pub mod queue;
pub mod state;

pub use action::Action;
pub use bindings::{BindingError, KeyBindings};
pub use queue::{InputEvent, InputQueue};
pub use state::InputState;

pub fn crate_info() -> &'static str {
    concat!("freefly-input v", env!("CARGO_PKG_VERSION"))
}
