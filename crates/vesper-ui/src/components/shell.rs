use crate::core::theme::ThemeMode;
use crate::features::dropdown::view::NavDropdown;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) theme: ThemeMode,
    pub(crate) on_toggle_theme: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let toggle = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="app-shell">
            <header class="navbar">
                <span class="brand">{"Vesper"}</span>
                <nav class="nav-links" aria-label="Primary">
                    <a href="#explore">{"Explore"}</a>
                    <a href="#faq">{"FAQ"}</a>
                    <NavDropdown />
                </nav>
                <button
                    class="ghost theme-toggle"
                    onclick={toggle}
                    aria-label={props.theme.toggle_label()}
                    aria-pressed={props.theme.pressed()}
                >
                    {props.theme.toggle_icon()}
                </button>
            </header>
            <main>
                {for props.children.iter()}
            </main>
            <footer class="footer">
                <span class="muted">{"Vesper · a small-widget playground"}</span>
            </footer>
        </div>
    }
}
