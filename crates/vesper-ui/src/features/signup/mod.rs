//! Signup form: four field validators, a strength scorer, and submit
//! gating.
//!
//! # Design
//! - Every rule is a pure function over the current field values, so the
//!   whole contract tests natively; the view only echoes computed
//!   messages.
//! - Each field revalidates on its own input events; submit revalidates
//!   all four together and clears the form on success.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
