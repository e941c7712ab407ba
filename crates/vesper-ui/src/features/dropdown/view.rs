use super::HIDE_GRACE_MS;
use crate::core::keys::is_activation_key;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

const MENU_ITEMS: [(&str, &str); 3] = [
    ("Documentation", "#docs"),
    ("Changelog", "#changelog"),
    ("Community", "#community"),
];

#[function_component(NavDropdown)]
pub(crate) fn nav_dropdown() -> Html {
    let open = use_state(|| false);
    let hide_timer = use_mut_ref(|| None as Option<Timeout>);

    let reveal = {
        let open = open.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                open.set(true);
            }
        })
    };

    // Focus landing anywhere inside the container outruns a pending hide.
    let cancel_hide = {
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: FocusEvent| {
            hide_timer.borrow_mut().take();
        })
    };

    let schedule_hide = {
        let open = open.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: FocusEvent| {
            let open = open.clone();
            let hide_timer_handle = hide_timer.clone();
            let handle = Timeout::new(HIDE_GRACE_MS, move || {
                hide_timer_handle.borrow_mut().take();
                open.set(false);
            });
            *hide_timer.borrow_mut() = Some(handle);
        })
    };

    html! {
        <div
            class={classes!("dropdown", open.then_some("open"))}
            onfocusin={cancel_hide}
            onfocusout={schedule_hide}
        >
            <a
                href="#resources"
                class="dropdown-trigger"
                role="button"
                aria-haspopup="true"
                aria-expanded={if *open { "true" } else { "false" }}
                onkeydown={reveal}
            >
                {"Resources"}
            </a>
            <ul class="dropdown-menu">
                {for MENU_ITEMS.iter().map(|(label, href)| html! {
                    <li><a href={*href}>{*label}</a></li>
                })}
            </ul>
        </div>
    }
}
