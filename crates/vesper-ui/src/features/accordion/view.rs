use super::state;
use crate::core::keys::is_activation_key;
use crate::core::store::PageStore;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const ITEMS: [(&str, &str); 3] = [
    (
        "Is my theme choice saved?",
        "Yes. Flipping the toggle stores the choice in your browser, and the \
         page restores it on the next visit. Before you ever touch the \
         toggle, the page follows your operating system preference.",
    ),
    (
        "Why does the counter stop at 20 and -10?",
        "The playground clamps the value to that range. Presses past either \
         end keep the value pinned, and landing on 20 replays the chime \
         every time.",
    ),
    (
        "What makes a password strong enough?",
        "Four checks each score a point: at least eight characters, an \
         uppercase letter, a digit, and a symbol. Three points or more \
         passes.",
    ),
];

#[function_component(FaqAccordion)]
pub(crate) fn faq_accordion() -> Html {
    let accordion = use_selector(|store: &PageStore| store.accordion);
    let dispatch = Dispatch::<PageStore>::new();
    let open_height = use_state(|| 0);
    // Cloned `NodeRef`s alias one slot, so each panel needs its own.
    let answer_refs =
        use_mut_ref(|| (0..ITEMS.len()).map(|_| NodeRef::default()).collect::<Vec<_>>());

    let on_click = {
        let dispatch = dispatch.clone();
        let answer_refs = answer_refs.clone();
        let open_height = open_height.clone();
        move |index: usize| {
            let dispatch = dispatch.clone();
            let answer_refs = answer_refs.clone();
            let open_height = open_height.clone();
            Callback::from(move |_: MouseEvent| {
                toggle_panel(&dispatch, &answer_refs, &open_height, index);
            })
        }
    };

    let on_keydown = {
        let answer_refs = answer_refs.clone();
        let open_height = open_height.clone();
        move |index: usize| {
            let dispatch = dispatch.clone();
            let answer_refs = answer_refs.clone();
            let open_height = open_height.clone();
            Callback::from(move |event: KeyboardEvent| {
                if is_activation_key(&event.key()) {
                    event.prevent_default();
                    toggle_panel(&dispatch, &answer_refs, &open_height, index);
                }
            })
        }
    };

    html! {
        <div class="accordion">
            {for ITEMS.iter().enumerate().map(|(index, (question, answer))| {
                let expanded = state::is_open(*accordion, index);
                html! {
                    <div class="faq-item">
                        <button
                            class="faq-question"
                            aria-expanded={if expanded { "true" } else { "false" }}
                            aria-controls={format!("faq-answer-{index}")}
                            onclick={on_click(index)}
                            onkeydown={on_keydown(index)}
                        >
                            {*question}
                        </button>
                        <div
                            id={format!("faq-answer-{index}")}
                            class="faq-answer"
                            role="region"
                            aria-hidden={if expanded { "false" } else { "true" }}
                            ref={answer_refs.borrow()[index].clone()}
                            style={expanded.then(|| format!("max-height: {}px", *open_height))}
                        >
                            <p>{*answer}</p>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

/// Collapses or expands one panel, measuring its full height first so the
/// height transition has a pixel target.
fn toggle_panel(
    dispatch: &Dispatch<PageStore>,
    answer_refs: &Rc<RefCell<Vec<NodeRef>>>,
    open_height: &UseStateHandle<i32>,
    index: usize,
) {
    let measured = answer_refs.borrow()[index]
        .cast::<Element>()
        .map_or(0, |panel| panel.scroll_height());
    dispatch.reduce_mut(|store| state::toggle(&mut store.accordion, index));
    if dispatch.get().accordion.open == Some(index) {
        open_height.set(measured);
    }
}
