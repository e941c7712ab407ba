//! Tab group with exclusive activation and decoupled roving focus.
//!
//! # Design
//! - Activation lives in the store; focus stays in the document. Arrow
//!   keys only move focus, never the active pair.
//! - Wrap-around arithmetic is DOM-free in [`state`].

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
