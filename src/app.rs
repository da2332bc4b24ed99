use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::components::sidebar::Sidebar;
use crate::data;
use crate::model::Round;
use crate::pages::home::HomePage;
use crate::pages::round::RoundPage;
use crate::theme::{document_direction, ThemeContext};

/// Round list shared with the pages.
#[derive(Clone, Copy)]
pub struct RoundsContext {
    pub rounds: ReadSignal<Vec<Round>>,
    pub is_loading: ReadSignal<bool>,
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(ThemeContext {
        direction: Signal::stored(document_direction()),
    });

    let (rounds, set_rounds) = signal(Vec::<Round>::new());
    let (is_loading, set_is_loading) = signal(true);
    provide_context(RoundsContext { rounds, is_loading });

    // Load the embedded round list on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match data::load_rounds().await {
                Ok(loaded) => {
                    log!("Loaded {} rounds", loaded.len());
                    set_rounds.set(loaded);
                }
                Err(e) => {
                    error!("Failed to load rounds: {}", e);
                }
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <Router>
            <div class="app-layout">
                <RoutedSidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/:id") view=RoundPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Sidebar with its expanded year following the round currently shown.
#[component]
fn RoutedSidebar() -> impl IntoView {
    let RoundsContext { rounds, is_loading } = expect_context();
    let location = use_location();

    let open_year: Signal<Option<i32>> =
        Memo::new(move |_| rounds.with(|r| year_for_path(&location.pathname.get(), r))).into();

    view! { <Sidebar is_loading=is_loading rounds=rounds open_year=open_year /> }
}

/// Year of the round addressed by `path` (`/<id>`), if any.
pub fn year_for_path(path: &str, rounds: &[Round]) -> Option<i32> {
    let id = path.trim_start_matches('/').trim_end_matches('/');
    if id.is_empty() {
        return None;
    }
    rounds.iter().find(|r| r.id == id).map(|r| r.year)
}
