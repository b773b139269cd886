use leptos::logging::{error, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::nav::Document;

/// The live page, through `web_sys`. Only meaningful in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDocument;

impl Document for BrowserDocument {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn scroll_into_view(&self, element: &web_sys::Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn assign_location(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            warn!("no window, cannot load {href}");
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            error!("failed to load {href}: {e:?}");
        }
    }
}
