use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::round_link::RoundLink;
use crate::components::tooltip::{Tooltip, TooltipContext, TooltipLayer};
use crate::grouping::{group_rounds_by_year, YearAccordion, YearGroup};
use crate::model::Round;
use crate::theme::ThemeContext;

/// What the drawer shows in place of its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerContent {
    Loading,
    Groups(Vec<YearGroup>),
}

pub fn drawer_content(is_loading: bool, rounds: &[Round]) -> DrawerContent {
    if is_loading {
        DrawerContent::Loading
    } else {
        DrawerContent::Groups(group_rounds_by_year(rounds))
    }
}

/// Whether the drawer stays open after a round link is followed.
///
/// The temporary drawer closes; the permanent one is left alone.
pub fn drawer_open_after_select(toggle_drawer_on_select: bool, is_open: bool) -> bool {
    if toggle_drawer_on_select {
        false
    } else {
        is_open
    }
}

/// Navigation drawer listing rounds grouped by year.
///
/// Small screens get a temporary drawer opened from the header and closed
/// again when a round is picked. Large screens get a permanent drawer.
/// CSS decides which of the two is visible.
#[component]
pub fn Sidebar(
    #[prop(into)]
    is_loading: Signal<bool>,
    #[prop(into)]
    rounds: Signal<Vec<Round>>,
    /// Year expanded initially, and again whenever this changes.
    #[prop(optional, into)]
    open_year: MaybeProp<i32>,
) -> impl IntoView {
    let (is_drawer_open, set_is_drawer_open) = signal(false);
    let accordion = RwSignal::new(YearAccordion::new(open_year.get_untracked()));
    let expanded_year: Signal<Option<i32>> = Memo::new(move |_| accordion.get().open()).into();

    let tooltip = RwSignal::new(None::<Tooltip>);
    provide_context(TooltipContext(tooltip));

    Effect::new(move |_| {
        let year = open_year.get();
        accordion.update(|a| a.sync(year));
    });

    let handle_drawer_toggle = Callback::new(move |_: ()| {
        set_is_drawer_open.update(|open| *open = !*open);
    });

    let handle_year_click = Callback::new(move |year: i32| {
        accordion.update(|a| a.click(year));
    });

    let handle_round_select = Callback::new(move |toggle_drawer_on_select: bool| {
        tooltip.set(None);
        set_is_drawer_open.update(|open| {
            *open = drawer_open_after_select(toggle_drawer_on_select, *open)
        });
    });

    view! {
        <div class="sidebar">
            <Header on_drawer_toggle=handle_drawer_toggle />
            <nav class="drawer" aria-label="Rounds">
                <div class="mobile-only">
                    <Show when=move || is_drawer_open.get()>
                        <div
                            class="drawer-backdrop"
                            on:click=move |_| handle_drawer_toggle.run(())
                        ></div>
                    </Show>
                    <TemporaryDrawerPaper is_open=is_drawer_open>
                        <DrawerList
                            toggle_drawer_on_select=true
                            is_loading=is_loading
                            rounds=rounds
                            expanded_year=expanded_year
                            on_year_click=handle_year_click
                            on_round_select=handle_round_select
                        />
                    </TemporaryDrawerPaper>
                </div>
                <div class="desktop-only">
                    <div class="drawer-paper drawer-permanent">
                        <div class="toolbar"></div>
                        <DrawerList
                            toggle_drawer_on_select=false
                            is_loading=is_loading
                            rounds=rounds
                            expanded_year=expanded_year
                            on_year_click=handle_year_click
                            on_round_select=handle_round_select
                        />
                    </div>
                </div>
            </nav>
            <TooltipLayer tooltip=tooltip />
        </div>
    }
}

/// Sliding paper of the small-screen drawer, anchored by layout direction.
#[component]
fn TemporaryDrawerPaper(#[prop(into)] is_open: Signal<bool>, children: Children) -> impl IntoView {
    let theme = use_context::<ThemeContext>();
    let class = move || {
        let direction = theme.map(|t| t.direction.get()).unwrap_or_default();
        let mut class = format!("drawer-paper drawer-temporary {}", direction.drawer_anchor_class());
        if is_open.get() {
            class.push_str(" open");
        }
        class
    };

    // Off-screen while closed; keep it out of tab order and the a11y tree.
    view! {
        <div
            class=class
            inert=move || !is_open.get()
            aria-hidden=move || (!is_open.get()).to_string()
        >
            {children()}
        </div>
    }
}

/// Drawer body shared by both drawer variants.
#[component]
fn DrawerList(
    toggle_drawer_on_select: bool,
    is_loading: Signal<bool>,
    rounds: Signal<Vec<Round>>,
    expanded_year: Signal<Option<i32>>,
    on_year_click: Callback<i32>,
    on_round_select: Callback<bool>,
) -> impl IntoView {
    let on_select = Callback::new(move |_: ()| on_round_select.run(toggle_drawer_on_select));

    move || match drawer_content(is_loading.get(), &rounds.get()) {
        DrawerContent::Loading => view! {
            <div class="progress" role="progressbar" aria-label="Loading rounds"></div>
        }
        .into_any(),
        DrawerContent::Groups(groups) => view! {
            <ul class="list">
                {groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <YearGroupItem
                                group=group
                                expanded_year=expanded_year
                                on_year_click=on_year_click
                                on_select=on_select
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
    }
}

#[component]
fn YearGroupItem(
    group: YearGroup,
    expanded_year: Signal<Option<i32>>,
    on_year_click: Callback<i32>,
    on_select: Callback<()>,
) -> impl IntoView {
    let YearGroup { year, rounds } = group;
    let is_open = move || expanded_year.get() == Some(year);

    view! {
        <li class="year-group">
            <button
                class="list-item-button year-header"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| on_year_click.run(year)
            >
                <span class="list-item-text">{year}</span>
                <span class="chevron">
                    {move || if is_open() { "\u{25B4}" } else { "\u{25BE}" }}
                </span>
            </button>
            // Collapsed groups unmount their entries.
            <Show when=is_open>
                <ul class="list nested-list">
                    {rounds
                        .iter()
                        .cloned()
                        .map(|round| view! { <RoundLink round=round on_select=on_select /> })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </li>
    }
}
