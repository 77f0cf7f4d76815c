//! wgpu render backend for the freefly demos.
//!
//! Uploads a [`freefly_render::Scene`] once and draws it every frame with the
//! view-projection matrix supplied by the caller.
//!
//! # Invariants
//! - The renderer never touches navigation state.
//! - Buffers are created once; only the uniform is rewritten per frame.

mod gpu;
mod shaders;

pub use gpu::{SceneStyle, WgpuRenderer};
