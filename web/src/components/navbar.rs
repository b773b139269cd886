use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::nav::{
    self, AuthView, MenuState, NavLink, Router, UserMenuAction, LOGIN_PATH, NAV_LINKS,
    PROFILE_PATH, REGISTER_PATH,
};
use crate::utils::auth::use_auth;
use crate::utils::browser::BrowserDocument;
use crate::utils::router::LeptosRouter;

fn link_class(active: bool) -> &'static str {
    if active {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

/// Runs a mobile panel action and leaves the panel closed.
fn panel_action(menu: RwSignal<MenuState>, action: impl FnOnce()) {
    let mut state = menu.get_untracked();
    nav::run_in_panel(&mut state, action);
    menu.set(state);
}

/// Fixed top bar: anchor links, session area and the collapsible mobile panel.
#[component]
pub fn Navbar() -> impl IntoView {
    let router = LeptosRouter::from_context();
    let auth = use_auth();
    let menu = RwSignal::new(MenuState::Closed);

    let location = Memo::new({
        let router = router.clone();
        move |_| router.location()
    });
    let auth_view = Memo::new(move |_| AuthView::from_session(&auth));

    let on_nav = Callback::new({
        let router = router.clone();
        move |href: &'static str| {
            nav::dispatch(href, &router, &BrowserDocument);
        }
    });
    let on_logout = Callback::new({
        let router = router.clone();
        move |_: ()| nav::handle_logout(&auth, &router)
    });

    let desktop_links = NAV_LINKS
        .iter()
        .map(|&NavLink { href, label }| {
            view! {
                <li class="navbar__item">
                    <button
                        type="button"
                        class=move || link_class(location.with(|loc| nav::is_active_link(href, loc)))
                        on:click=move |_| on_nav.run(href)
                    >
                        {label}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__bar">
                    <A href="/" attr:class="navbar__logo">
                        "Kora"<span class="navbar__logo-accent">"Link"</span>
                    </A>

                    <ul class="navbar__links">{desktop_links}</ul>

                    <div class="navbar__auth">
                        {move || match auth_view.get() {
                            AuthView::SignedIn { name, dashboard } => {
                                view! { <UserMenu name dashboard router=router.clone() on_logout/> }
                                    .into_any()
                            }
                            AuthView::SignedOut => {
                                view! {
                                    <div class="navbar__auth-actions">
                                        <A href=LOGIN_PATH>
                                            <Button appearance=ButtonAppearance::Subtle>"Sign In"</Button>
                                        </A>
                                        <A href=REGISTER_PATH>
                                            <Button appearance=ButtonAppearance::Primary>
                                                "Get Started"
                                            </Button>
                                        </A>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>

                    <button
                        type="button"
                        class="navbar__toggle"
                        aria-label=move || {
                            if menu.get().is_open() { "Close menu" } else { "Open menu" }
                        }
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| menu.update(MenuState::toggle)
                    >
                        {move || if menu.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div class="navbar__mobile">
                        <ul class="navbar__mobile-links">
                            {NAV_LINKS
                                .iter()
                                .map(|&NavLink { href, label }| {
                                    view! {
                                        <li class="navbar__mobile-item">
                                            <button
                                                type="button"
                                                class="navbar__mobile-link"
                                                on:click=move |_| {
                                                    panel_action(menu, || on_nav.run(href))
                                                }
                                            >
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        {move || match auth_view.get() {
                            AuthView::SignedIn { dashboard, .. } => {
                                view! {
                                    <div class="navbar__mobile-auth">
                                        <A
                                            href=dashboard
                                            attr:class="navbar__mobile-link"
                                            on:click=move |_| panel_action(menu, || ())
                                        >
                                            "Dashboard"
                                        </A>
                                        <button
                                            type="button"
                                            class="navbar__mobile-link navbar__mobile-link--danger"
                                            on:click=move |_| {
                                                panel_action(menu, || on_logout.run(()))
                                            }
                                        >
                                            "Logout"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                            AuthView::SignedOut => {
                                view! {
                                    <div class="navbar__mobile-auth navbar__mobile-auth--stacked">
                                        <A href=LOGIN_PATH on:click=move |_| panel_action(menu, || ())>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                block=true
                                            >
                                                "Sign In"
                                            </Button>
                                        </A>
                                        <A href=REGISTER_PATH on:click=move |_| panel_action(menu, || ())>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                block=true
                                            >
                                                "Get Started"
                                            </Button>
                                        </A>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// Signed-in dropdown: dashboard, profile, logout.
#[component]
fn UserMenu(
    name: String,
    dashboard: &'static str,
    router: LeptosRouter,
    on_logout: Callback<()>,
) -> impl IntoView {
    let on_select = move |value: String| match UserMenuAction::from_value(&value) {
        Some(UserMenuAction::Logout) => on_logout.run(()),
        Some(action) => {
            if let Some(target) = action.target(dashboard) {
                router.navigate(target);
            }
        }
        None => leptos::logging::warn!("unknown user menu entry {value}"),
    };

    let follow_on_select = |ev: leptos::ev::MouseEvent| ev.prevent_default();

    view! {
        <Menu on_select position=MenuPosition::BottomEnd class="navbar__user-menu">
            <MenuTrigger slot>
                <Button appearance=ButtonAppearance::Subtle class="navbar__user-trigger">
                    <span class="navbar__avatar" aria-hidden="true">"👤"</span>
                    <span class="navbar__user-name">{name}</span>
                    <span class="navbar__chevron" aria-hidden="true">"▾"</span>
                </Button>
            </MenuTrigger>
            // Real hrefs for middle-click and copy; plain clicks route through on_select.
            <MenuItem value=UserMenuAction::Dashboard.value()>
                <A href=dashboard attr:class="navbar__menu-link" on:click=follow_on_select>
                    "Dashboard"
                </A>
            </MenuItem>
            <MenuItem value=UserMenuAction::Profile.value()>
                <A href=PROFILE_PATH attr:class="navbar__menu-link" on:click=follow_on_select>
                    "Profile"
                </A>
            </MenuItem>
            <div class="navbar__menu-separator" role="separator"></div>
            <MenuItem value=UserMenuAction::Logout.value() class="navbar__menu-item--danger">
                "Logout"
            </MenuItem>
        </Menu>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn panel_actions_close_the_open_panel() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = RwSignal::new(MenuState::Open);
            let calls = RwSignal::new(0);
            panel_action(menu, || calls.update(|n| *n += 1));
            assert_eq!(calls.get_untracked(), 1);
            assert_eq!(menu.get_untracked(), MenuState::Closed);
        });
    }

    #[test]
    fn link_only_panel_action_still_closes() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = RwSignal::new(MenuState::Open);
            panel_action(menu, || ());
            assert!(!menu.get_untracked().is_open());
        });
    }
}
