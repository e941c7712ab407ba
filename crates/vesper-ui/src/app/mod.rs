//! Root component: shell chrome, the four widget sections, and theme
//! persistence.

mod preferences;

use crate::components::shell::AppShell;
use crate::core::theme::ThemeMode;
use crate::features::accordion::view::FaqAccordion;
use crate::features::counter::view::CounterCard;
use crate::features::signup::view::SignupForm;
use crate::features::tabs::view::TabGroup;
use gloo::utils::window;
use yew::prelude::*;

#[function_component(VesperApp)]
fn vesper_app() -> Html {
    let theme = use_state(preferences::load_theme);

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                || ()
            },
            theme,
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = (*theme).toggled();
            preferences::persist_theme(next);
            theme.set(next);
        })
    };

    html! {
        <AppShell theme={*theme} on_toggle_theme={toggle_theme}>
            <section id="explore" class="page-section">
                <h2>{"Explore"}</h2>
                <TabGroup />
            </section>
            <section id="playground" class="page-section">
                <h2>{"Counter playground"}</h2>
                <CounterCard />
            </section>
            <section id="faq" class="page-section">
                <h2>{"Frequently asked questions"}</h2>
                <FaqAccordion />
            </section>
            <section id="signup" class="page-section">
                <h2>{"Create your account"}</h2>
                <SignupForm />
            </section>
        </AppShell>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VesperApp>::with_root(root).render();
    } else {
        yew::Renderer::<VesperApp>::new().render();
    }
}
