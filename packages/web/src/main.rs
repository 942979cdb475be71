use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AuthGate, Broadcast, Entry, EntryGate, HallOfFame, Home, Invite, Login, Records, Register,
    Vote,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/entry")]
    Entry {},
    #[layout(EntryGate)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[layout(AuthGate)]
        #[route("/protected-home")]
        Home {},
        #[route("/vote")]
        Vote {},
        #[route("/hall_of_fame")]
        HallOfFame {},
        #[route("/invite")]
        Invite {},
        #[route("/broadcast")]
        Broadcast {},
        #[route("/records")]
        Records {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!(
        "Starting with API base {}",
        api::ClientConfig::from_build_env().api.base
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/entry`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Entry {});
    rsx! {}
}

/// Unknown paths land on the entry page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Entry {});
    rsx! {}
}
