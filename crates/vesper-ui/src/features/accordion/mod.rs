//! Single-open FAQ accordion.
//!
//! # Design
//! - The open index is the whole shared state; heights are measured in the
//!   view at activation time so the collapse transition can animate.
//! - Re-activation retargets the running transition instead of queueing.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
