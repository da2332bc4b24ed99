//! Navigation entries for single rounds.
//!
//! Rounds whose results are still provisional get a dot badge and a tooltip;
//! otherwise both variants render the same `"<name> <year>"` link to `/<id>`.

use leptos::prelude::*;

use crate::components::tooltip::TooltipContext;
use crate::model::Round;

pub const UNOFFICIAL_TOOLTIP: &str = "Results are not official yet";

/// Visual treatment of a round entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    Official,
    Unofficial,
}

impl LinkVariant {
    pub fn for_round(round: &Round) -> Self {
        if round.are_results_official {
            LinkVariant::Official
        } else {
            LinkVariant::Unofficial
        }
    }

    pub fn tooltip(self) -> Option<&'static str> {
        match self {
            LinkVariant::Official => None,
            LinkVariant::Unofficial => Some(UNOFFICIAL_TOOLTIP),
        }
    }

    pub fn has_badge(self) -> bool {
        self == LinkVariant::Unofficial
    }
}

/// Entry for one round, decorated according to its [`LinkVariant`].
#[component]
pub fn RoundLink(
    round: Round,
    /// Run when the link is followed.
    on_select: Callback<()>,
) -> impl IntoView {
    let variant = LinkVariant::for_round(&round);
    let tooltip = variant.tooltip();
    let tooltips = use_context::<TooltipContext>();
    let href = round.path();
    let label = round.label();

    let text = if variant.has_badge() {
        view! {
            <span class="badge badge-dot badge-secondary">
                <span class="list-item-text">{label}</span>
            </span>
        }
        .into_any()
    } else {
        view! { <span class="list-item-text">{label}</span> }.into_any()
    };

    view! {
        <li
            class="list-item nested"
            data-tooltip=tooltip
            on:mouseenter=move |ev| {
                if let (Some(text), Some(ctx)) = (tooltip, tooltips) {
                    ctx.show_beside(&ev, text);
                }
            }
            on:mouseleave=move |_| {
                if let Some(ctx) = tooltips {
                    ctx.hide();
                }
            }
        >
            <a href=href class="list-item-button" on:click=move |_| on_select.run(())>
                {text}
            </a>
        </li>
    }
}
