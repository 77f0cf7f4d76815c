//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate navigation state; they only read the matrix they are handed.
//! - Scene geometry is static: uploaded once, drawn every frame.
//!
//! The [`Renderer`] trait is implemented here by a debug text renderer used by
//! the CLI and tests; the wgpu backend lives in `freefly-render-wgpu`.

mod renderer;
mod scene;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use scene::{Scene, SceneError, SceneVertex};

pub fn crate_info() -> &'static str {
    concat!("freefly-render v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
