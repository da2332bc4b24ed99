use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Round Results"</h2>
            <p class="page-description">
                "Pick a round from the menu to see its results. Rounds are grouped by year; "
                "entries marked with a dot are still provisional."
            </p>
        </div>
    }
}
