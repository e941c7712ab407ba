//! Keyboard interpretation shared by the interactive widgets.
//!
//! Views translate raw key strings here so the mapping stays testable
//! without a live document.

/// Direction of a roving-focus move inside a widget group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMove {
    /// Focus the previous sibling, wrapping at the front.
    Prev,
    /// Focus the next sibling, wrapping at the end.
    Next,
}

/// True for the keys that activate a focused control (Enter and Space).
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Maps horizontal arrow keys to a roving-focus move; everything else is
/// left to the browser.
#[must_use]
pub fn focus_move(key: &str) -> Option<FocusMove> {
    match key {
        "ArrowLeft" => Some(FocusMove::Prev),
        "ArrowRight" => Some(FocusMove::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("Spacebar"));
    }

    #[test]
    fn horizontal_arrows_move_focus() {
        assert_eq!(focus_move("ArrowLeft"), Some(FocusMove::Prev));
        assert_eq!(focus_move("ArrowRight"), Some(FocusMove::Next));
        assert_eq!(focus_move("ArrowUp"), None);
        assert_eq!(focus_move("Tab"), None);
    }
}
