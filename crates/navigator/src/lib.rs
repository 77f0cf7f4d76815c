//! First-person navigation model.
//!
//! The navigator owns camera position and orientation, consumes logical input
//! and elapsed time, and produces a view-projection matrix. It knows nothing
//! about windows or GPUs.
//!
//! # Invariants
//! - All state lives in a [`Navigator`] instance; there is no global state.
//! - With pitch clamping enabled, pitch stays within [-π/2, π/2].
//! - `view_projection` is a pure function of the current state.

mod navigator;

pub use navigator::Navigator;
