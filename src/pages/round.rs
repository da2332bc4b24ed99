use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::RoundsContext;
use crate::components::round_link::LinkVariant;

/// Landing page for a `/<id>` link from the sidebar.
#[component]
pub fn RoundPage() -> impl IntoView {
    let RoundsContext { rounds, is_loading } = expect_context();
    let params = use_params_map();

    let round = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        rounds.with(|r| r.iter().find(|round| round.id == id).cloned())
    };

    view! {
        <div class="page round-page">
            {move || {
                if is_loading.get() {
                    view! { <p class="round-loading">"Loading round..."</p> }.into_any()
                } else if let Some(round) = round() {
                    let status = match LinkVariant::for_round(&round).tooltip() {
                        Some(note) => note,
                        None => "Official results",
                    };
                    view! {
                        <h2>{round.label()}</h2>
                        <p class="round-status">{status}</p>
                    }
                    .into_any()
                } else {
                    view! { <p class="round-missing">"Round not found"</p> }.into_any()
                }
            }}
        </div>
    }
}
