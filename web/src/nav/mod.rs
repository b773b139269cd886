//! Framework-free navigation logic for the top bar.
//!
//! Everything here works on plain values and the collaborator traits, so the
//! Leptos view in `components::navbar` stays a thin wiring layer.

pub mod dispatch;
pub mod location;
pub mod menu;
pub mod session;

pub use dispatch::{dispatch, handle_logout, resolve_nav_click, Document, NavIntent, Router};
pub use location::{is_active_link, Location};
pub use menu::{run_in_panel, MenuState, UserMenuAction};
pub use session::{dashboard_link, AuthView, SessionActions, SessionError, SessionReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        href: "/",
        label: "Home",
    },
    NavLink {
        href: "/#features",
        label: "Features",
    },
    NavLink {
        href: "/#how-it-works",
        label: "How It Works",
    },
    NavLink {
        href: "/#about",
        label: "About",
    },
];

pub const PROFILE_PATH: &str = "/profile";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
