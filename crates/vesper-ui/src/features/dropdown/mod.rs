//! Navbar dropdown revealed by keyboard activation on its trigger.
//!
//! # Design
//! - Visibility is component-local; nothing about the menu belongs in the
//!   shared store.
//! - Hiding waits out a short grace delay so focus can land inside the
//!   submenu first; focus returning to the container cancels the pending
//!   hide, and a fresh focus loss replaces it.

/// Grace delay before a focus loss hides the submenu, in milliseconds.
pub const HIDE_GRACE_MS: u32 = 150;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
