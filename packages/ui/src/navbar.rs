use dioxus::prelude::*;

use crate::icons::{FaEye, FaRightFromBracket};
use crate::nav::visible_items;
use crate::{use_session, Icon, LogoutButton};

/// Top bar shown on every signed-in page.
///
/// Links are filtered by the roles in the session token.
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let state = session();
    let permissions = state.permissions();
    let items = visible_items(&permissions);
    let tier = permissions.highest().map(|t| t.to_string());
    let username = state.username();

    rsx! {
        nav {
            class: "navbar",

            div {
                class: "nav-left",
                Icon { icon: FaEye, width: 22, height: 22, class: "nav-logo" }
                span { class: "nav-title", "Illuminati" }
            }

            div {
                class: "nav-center",
                for item in items {
                    Link { key: "{item.href}", to: item.href, "{item.name}" }
                }
            }

            div {
                class: "nav-right",
                if let Some(name) = username {
                    span { class: "nav-user", "{name}" }
                }
                if let Some(tier) = tier {
                    span { class: "nav-tier", "{tier}" }
                }
                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                LogoutButton { class: "nav-btn" }
            }
        }
    }
}
