//! Tab selection transitions and roving-focus arithmetic.

use crate::core::keys::FocusMove;

/// Tab slice of the page store. Exactly one pair is active at a time by
/// construction; index 0 is active at load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabsState {
    /// Index of the active tab/panel pair.
    pub active: usize,
}

/// Activates the pair at `index`; out-of-range requests are ignored.
pub const fn activate(state: &mut TabsState, index: usize, len: usize) {
    if index < len {
        state.active = index;
    }
}

/// Focus target for an arrow move from `index` in a strip of `len` tabs,
/// wrapping at both ends. Activation is untouched.
#[must_use]
pub const fn moved_focus(index: usize, len: usize, direction: FocusMove) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match direction {
        FocusMove::Prev => {
            if index == 0 {
                len - 1
            } else {
                index - 1
            }
        }
        FocusMove::Next => {
            if index + 1 >= len {
                0
            } else {
                index + 1
            }
        }
    })
}
