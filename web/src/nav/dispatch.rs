use leptos::logging::{log, warn};

use super::location::{split_anchor, Location};
use super::session::SessionActions;

pub trait Router {
    fn location(&self) -> Location;
    fn navigate(&self, path: &str);
}

/// The bits of the browser document the bar needs for in-page anchors.
pub trait Document {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn scroll_into_view(&self, element: &Self::Element);
    /// Whole-page navigation, like assigning `location.href`.
    fn assign_location(&self, href: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Link already resolved, nothing to do.
    Stay,
    Route(String),
    Scroll { fragment: String, href: String },
}

/// Decide what a click on `href` should do from `location`.
///
/// Anchor links (`/#id`) scroll on the home page and route there first from
/// anywhere else.
pub fn resolve_nav_click(href: &str, location: &Location) -> NavIntent {
    if href.starts_with("/#") {
        if !location.is_home() {
            return NavIntent::Route(href.to_string());
        }
        let fragment = split_anchor(href).map_or("", |(_, fragment)| fragment);
        return NavIntent::Scroll {
            fragment: fragment.to_string(),
            href: href.to_string(),
        };
    }

    if href == location.pathname && location.hash.is_empty() {
        NavIntent::Stay
    } else {
        NavIntent::Route(href.to_string())
    }
}

/// Resolve and perform a nav click. Returns the intent that was carried out.
pub fn dispatch<R, D>(href: &str, router: &R, document: &D) -> NavIntent
where
    R: Router + ?Sized,
    D: Document + ?Sized,
{
    let intent = resolve_nav_click(href, &router.location());
    match &intent {
        NavIntent::Stay => {}
        NavIntent::Route(path) => router.navigate(path),
        NavIntent::Scroll { fragment, href } => match document.element_by_id(fragment) {
            Some(element) => document.scroll_into_view(&element),
            None => {
                log!("no element #{fragment} on page, loading {href}");
                document.assign_location(href);
            }
        },
    }
    intent
}

/// End the session and go home. The redirect happens even if logout fails.
pub fn handle_logout<S, R>(session: &S, router: &R)
where
    S: SessionActions + ?Sized,
    R: Router + ?Sized,
{
    if let Err(err) = session.logout() {
        warn!("logout failed: {err}");
    }
    router.navigate("/");
}
