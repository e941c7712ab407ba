#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Vesper demo site front-end: six self-contained page widgets (theme
//! toggle, dropdown, tabs, counter, accordion, signup validation) with
//! pure, natively testable state and a thin wasm render layer.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::store::PageStore;
    use crate::core::theme::ThemeMode;
    use crate::features::counter::state::{self as counter, CounterAction, Milestone};
    use crate::features::signup::state as signup;

    #[test]
    fn counter_reaches_its_celebration_through_the_store() {
        let mut store = PageStore::default();
        for _ in 0..counter::MAX_VALUE {
            counter::apply(&mut store.counter, CounterAction::Increment);
        }
        assert_eq!(store.counter.value, counter::MAX_VALUE);
        assert_eq!(
            counter::milestone_for(store.counter.value),
            Some(Milestone::Ceiling)
        );
        assert!(counter::plays_cue(store.counter.value));
    }

    #[test]
    fn signup_happy_path_through_the_store() {
        let mut store = PageStore::default();
        signup::edit_name(&mut store.signup, "Ada Lovelace".to_owned());
        signup::edit_email(&mut store.signup, "ada@example.org".to_owned());
        signup::edit_password(&mut store.signup, "Correct1!".to_owned());
        signup::edit_confirm(&mut store.signup, "Correct1!".to_owned());
        signup::submit(&mut store.signup);
        assert!(store.signup.submitted);
        assert!(store.signup.password.is_empty());
    }

    #[test]
    fn persisted_theme_flags_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_flag(mode.as_str()), mode);
        }
    }
}
