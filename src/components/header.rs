use leptos::prelude::*;

#[component]
pub fn Header(
    /// Fired when the menu button is pressed.
    on_drawer_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="app-bar">
            <button
                class="menu-button mobile-only"
                aria-label="Toggle navigation"
                on:click=move |_| on_drawer_toggle.run(())
            >
                "\u{2630}"
            </button>
            <a href="/" class="app-title">"Round Results"</a>
        </header>
    }
}
