use std::cell::RefCell;
use std::rc::Rc;

use web::nav::{
    dispatch, handle_logout, is_active_link, run_in_panel, Document, Location, MenuState,
    NavIntent, Router, SessionActions, SessionError, NAV_LINKS,
};

type Calls = Rc<RefCell<Vec<String>>>;

struct FakeRouter {
    location: Location,
    calls: Calls,
}

impl Router for FakeRouter {
    fn location(&self) -> Location {
        self.location.clone()
    }

    fn navigate(&self, path: &str) {
        self.calls.borrow_mut().push(format!("navigate {path}"));
    }
}

struct FakeDocument {
    ids: Vec<&'static str>,
    calls: Calls,
}

impl Document for FakeDocument {
    type Element = String;

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.ids.iter().find(|&&i| i == id).map(|i| i.to_string())
    }

    fn scroll_into_view(&self, element: &String) {
        self.calls.borrow_mut().push(format!("scroll {element}"));
    }

    fn assign_location(&self, href: &str) {
        self.calls.borrow_mut().push(format!("load {href}"));
    }
}

struct FakeSession {
    fail: bool,
    calls: Calls,
}

impl SessionActions for FakeSession {
    fn logout(&self) -> Result<(), SessionError> {
        self.calls.borrow_mut().push("logout".to_string());
        if self.fail {
            Err(SessionError::StorageUnavailable)
        } else {
            Ok(())
        }
    }
}

fn setup(pathname: &str, hash: &str, ids: Vec<&'static str>) -> (FakeRouter, FakeDocument, Calls) {
    let calls: Calls = Rc::default();
    let router = FakeRouter {
        location: Location::new(pathname, hash),
        calls: calls.clone(),
    };
    let document = FakeDocument {
        ids,
        calls: calls.clone(),
    };
    (router, document, calls)
}

#[test]
fn links_are_fixed_and_ordered() {
    let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
    assert_eq!(labels, ["Home", "Features", "How It Works", "About"]);
    assert_eq!(NAV_LINKS[0].href, "/");
}

#[test]
fn home_click_on_home_is_a_no_op_and_closes_menu() {
    let (router, document, calls) = setup("/", "", vec!["features"]);
    let mut menu = MenuState::Closed;
    menu.toggle();

    assert!(is_active_link("/", &router.location()));
    let intent = run_in_panel(&mut menu, || dispatch("/", &router, &document));

    assert_eq!(intent, NavIntent::Stay);
    assert!(calls.borrow().is_empty());
    assert_eq!(menu, MenuState::Closed);
}

#[test]
fn anchor_from_other_page_routes_without_scrolling() {
    let (router, document, calls) = setup("/dashboard", "", vec!["features"]);
    dispatch("/#features", &router, &document);
    assert_eq!(*calls.borrow(), ["navigate /#features"]);
}

#[test]
fn anchor_on_home_scrolls_to_existing_section() {
    let (router, document, calls) = setup("/", "", vec!["features"]);
    dispatch("/#features", &router, &document);
    assert_eq!(*calls.borrow(), ["scroll features"]);
}

#[test]
fn missing_section_falls_back_to_full_load() {
    let (router, document, calls) = setup("/", "", vec!["about"]);
    dispatch("/#features", &router, &document);
    assert_eq!(*calls.borrow(), ["load /#features"]);
}

#[test]
fn logout_runs_once_then_redirects_home() {
    let (router, _, calls) = setup("/owner", "", vec![]);
    let session = FakeSession {
        fail: false,
        calls: calls.clone(),
    };
    handle_logout(&session, &router);
    assert_eq!(*calls.borrow(), ["logout", "navigate /"]);
}

#[test]
fn failed_logout_still_redirects() {
    let (router, _, calls) = setup("/player", "", vec![]);
    let session = FakeSession {
        fail: true,
        calls: calls.clone(),
    };
    handle_logout(&session, &router);
    assert_eq!(*calls.borrow(), ["logout", "navigate /"]);
}

#[test]
fn every_mobile_link_leaves_menu_closed() {
    let (router, document, calls) = setup("/", "", vec!["features", "how-it-works", "about"]);
    for link in NAV_LINKS {
        let mut menu = MenuState::Open;
        run_in_panel(&mut menu, || dispatch(link.href, &router, &document));
        assert!(!menu.is_open(), "{} left the menu open", link.label);
    }
    assert_eq!(
        *calls.borrow(),
        ["scroll features", "scroll how-it-works", "scroll about"]
    );
}

#[test]
fn mobile_logout_closes_menu_after_redirect() {
    let (router, _, calls) = setup("/owner", "", vec![]);
    let session = FakeSession {
        fail: true,
        calls: calls.clone(),
    };
    let mut menu = MenuState::Open;
    run_in_panel(&mut menu, || handle_logout(&session, &router));
    assert_eq!(menu, MenuState::Closed);
    assert_eq!(*calls.borrow(), ["logout", "navigate /"]);
}
