use super::state;
use crate::core::keys::focus_move;
use crate::core::store::PageStore;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const TABS: [(&str, &str); 3] = [
    (
        "Overview",
        "Vesper is a playground of six small widgets: a persisted theme, \
         a keyboard-friendly dropdown, this tab strip, a clamped counter, \
         a single-open FAQ, and a validated signup form.",
    ),
    (
        "Accessibility",
        "Every control carries its ARIA wiring: selected and expanded \
         flags, labelled panels, and live error slots. Arrow keys rove \
         focus across these tabs without activating them.",
    ),
    (
        "Under the hood",
        "Widget logic is pure Rust compiled to WebAssembly; the page is \
         just the render target. State transitions run the same way in \
         native unit tests as they do here.",
    ),
];

#[function_component(TabGroup)]
pub(crate) fn tab_group() -> Html {
    let active = use_selector(|store: &PageStore| store.tabs.active);
    let dispatch = Dispatch::<PageStore>::new();
    // Cloned `NodeRef`s alias one slot, so each tab needs its own.
    let tab_refs =
        use_mut_ref(|| (0..TABS.len()).map(|_| NodeRef::default()).collect::<Vec<_>>());

    let on_activate = move |index: usize| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| state::activate(&mut store.tabs, index, TABS.len()));
        })
    };

    let on_keydown = {
        let tab_refs = tab_refs.clone();
        move |index: usize| {
            let tab_refs = tab_refs.clone();
            Callback::from(move |event: KeyboardEvent| {
                if let Some(direction) = focus_move(&event.key())
                    && let Some(target) = state::moved_focus(index, TABS.len(), direction)
                    && let Some(tab) = tab_refs.borrow()[target].cast::<web_sys::HtmlElement>()
                {
                    let _ = tab.focus();
                }
            })
        }
    };

    html! {
        <div class="tab-group">
            <div class="tab-list" role="tablist" aria-label="About Vesper">
                {for TABS.iter().enumerate().map(|(index, (label, _))| {
                    let selected = index == *active;
                    html! {
                        <button
                            id={format!("tab-{index}")}
                            class={classes!("tab", selected.then_some("tab-active"))}
                            role="tab"
                            aria-selected={if selected { "true" } else { "false" }}
                            aria-controls={format!("panel-{index}")}
                            ref={tab_refs.borrow()[index].clone()}
                            onclick={on_activate(index)}
                            onkeydown={on_keydown(index)}
                        >
                            {*label}
                        </button>
                    }
                })}
            </div>
            {for TABS.iter().enumerate().map(|(index, (_, body))| {
                let selected = index == *active;
                html! {
                    <div
                        id={format!("panel-{index}")}
                        class={classes!("tab-panel", (!selected).then_some("hidden"))}
                        role="tabpanel"
                        aria-labelledby={format!("tab-{index}")}
                    >
                        <p>{*body}</p>
                    </div>
                }
            })}
        </div>
    }
}
