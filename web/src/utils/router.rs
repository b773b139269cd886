use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::nav::{Location, Router};

/// `leptos_router` behind the nav `Router` trait.
#[derive(Clone)]
pub struct LeptosRouter {
    location: leptos_router::location::Location,
    navigate: Arc<dyn Fn(&str, NavigateOptions) + Send + Sync>,
}

impl LeptosRouter {
    /// Must be called inside a `<Router>`.
    pub fn from_context() -> Self {
        Self {
            location: use_location(),
            navigate: Arc::new(use_navigate()),
        }
    }
}

impl Router for LeptosRouter {
    fn location(&self) -> Location {
        Location::new(self.location.pathname.get(), self.location.hash.get())
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}
