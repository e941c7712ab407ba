//! Counter transitions and milestone selectors, testable without a DOM.

use crate::core::theme::Tone;

/// Inclusive floor for the counter value.
pub const MIN_VALUE: i32 = -10;
/// Inclusive ceiling for the counter value.
pub const MAX_VALUE: i32 = 20;
/// How long the value pulse stays enlarged, in milliseconds.
pub const PULSE_MS: u32 = 120;

/// Counter slice of the page store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current value, always within `MIN_VALUE..=MAX_VALUE`.
    pub value: i32,
}

/// A mutation requested by one of the three counter controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    /// `+1`, capped at [`MAX_VALUE`].
    Increment,
    /// `-1`, capped at [`MIN_VALUE`].
    Decrement,
    /// Back to zero.
    Reset,
}

/// Applies one action, clamping the result to the counter bounds.
pub fn apply(state: &mut CounterState, action: CounterAction) {
    state.value = match action {
        CounterAction::Increment => (state.value + 1).min(MAX_VALUE),
        CounterAction::Decrement => (state.value - 1).max(MIN_VALUE),
        CounterAction::Reset => 0,
    };
}

/// Milestone feedback tied to three exact values, not ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Milestone {
    /// Sitting on the ceiling.
    Ceiling,
    /// Sitting on the floor.
    Floor,
    /// Back at zero, including the initial page load.
    Origin,
}

impl Milestone {
    /// Message shown under the counter for this milestone.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ceiling => "🎉 Congrats! You've reached 20!",
            Self::Floor => "😮 Counter at -10. Try positive!",
            Self::Origin => "Counter reset.",
        }
    }

    /// Color applied to the displayed number, when the milestone has one.
    #[must_use]
    pub const fn tone(self) -> Option<Tone> {
        match self {
            Self::Ceiling => Some(Tone::Success),
            Self::Floor => Some(Tone::Danger),
            Self::Origin => None,
        }
    }
}

/// Milestone for the current value, if it sits on one.
#[must_use]
pub const fn milestone_for(value: i32) -> Option<Milestone> {
    match value {
        MAX_VALUE => Some(Milestone::Ceiling),
        MIN_VALUE => Some(Milestone::Floor),
        0 => Some(Milestone::Origin),
        _ => None,
    }
}

/// Progress-bar value: distance from zero.
#[must_use]
pub const fn progress_value(value: i32) -> i32 {
    value.abs()
}

/// True when a mutation landing on `value` replays the audible cue.
#[must_use]
pub const fn plays_cue(value: i32) -> bool {
    value == MAX_VALUE
}
