//! Bounded counter widget.
//!
//! # Design
//! - Clamped transitions and milestone selectors are DOM-free in [`state`].
//! - The wasm view dispatches actions, replays the pulse timer, and fires
//!   the audible cue at the ceiling.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
