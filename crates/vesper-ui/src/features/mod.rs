//! Widget feature modules: DOM-free state next to wasm-only views.

pub mod accordion;
pub mod counter;
pub mod dropdown;
pub mod signup;
pub mod tabs;
