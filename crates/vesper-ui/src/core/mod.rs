//! DOM-free primitives shared by every widget: theme tokens, keyboard
//! interpretation, and the page-wide store.

pub mod keys;
pub mod store;
pub mod theme;
