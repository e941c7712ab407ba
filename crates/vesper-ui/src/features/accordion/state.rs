//! Accordion open/close transitions.

/// Accordion slice of the page store; at most one panel open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    /// Currently open panel, if any. All panels start closed.
    pub open: Option<usize>,
}

/// Toggles panel `index`: everything closes first, then `index` reopens
/// unless it was the panel already open.
pub fn toggle(state: &mut AccordionState, index: usize) {
    state.open = if state.open == Some(index) {
        None
    } else {
        Some(index)
    };
}

/// True when panel `index` is the open one.
#[must_use]
pub const fn is_open(state: AccordionState, index: usize) -> bool {
    match state.open {
        Some(open) => open == index,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_start_closed() {
        let state = AccordionState::default();
        assert_eq!(state.open, None);
        assert!(!is_open(state, 0));
    }

    #[test]
    fn toggling_an_open_panel_closes_everything() {
        let mut state = AccordionState::default();
        toggle(&mut state, 1);
        assert_eq!(state.open, Some(1));
        toggle(&mut state, 1);
        assert_eq!(state.open, None);
    }

    #[test]
    fn opening_another_panel_swaps_the_open_one() {
        let mut state = AccordionState::default();
        toggle(&mut state, 0);
        toggle(&mut state, 2);
        assert_eq!(state.open, Some(2));
        assert!(is_open(state, 2));
        assert!(!is_open(state, 0));
    }

    #[test]
    fn at_most_one_panel_open_across_any_sequence() {
        let mut state = AccordionState::default();
        for index in [0, 1, 1, 2, 0, 2, 2, 1] {
            toggle(&mut state, index);
            let open_count = (0..3).filter(|i| is_open(state, *i)).count();
            assert!(open_count <= 1);
        }
    }
}
