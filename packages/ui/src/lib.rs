//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    mark_entry_verified, sign_in, sign_out, use_session, LogoutButton, SessionProvider,
    SessionState,
};

pub mod guard;
pub use guard::{Gate, GuardLevel};

pub mod nav;

mod navbar;
pub use navbar::Navbar;

pub mod map;
pub use map::{LatLng, RecordMap};

mod status;
pub use status::{Status, StatusLine};

mod download;
pub use download::save_file;

mod time;
pub use time::sleep;
