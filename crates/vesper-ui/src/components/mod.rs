//! Page chrome shared across sections.

pub(crate) mod shell;
