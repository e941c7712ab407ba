//! App-wide yewdux store.
//!
//! # Design
//! - One store with a small slice per stateful widget so reducers stay
//!   predictable and the slices test natively.
//! - Transient render details (pulse flag, dropdown visibility, measured
//!   panel heights) live in component hooks, not here.

use crate::features::accordion::state::AccordionState;
use crate::features::counter::state::CounterState;
use crate::features::signup::state::SignupState;
use crate::features::tabs::state::TabsState;
use yewdux::store::Store;

/// Shared state for the whole page; one field per stateful widget.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct PageStore {
    /// Bounded counter widget.
    pub counter: CounterState,
    /// Exclusive tab selection.
    pub tabs: TabsState,
    /// Single-open accordion.
    pub accordion: AccordionState,
    /// Signup form fields and outcomes.
    pub signup: SignupState,
}
