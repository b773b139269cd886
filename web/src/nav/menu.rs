/// Open/closed state of the mobile panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }
}

/// Runs an action triggered from inside the mobile panel, then closes it.
pub fn run_in_panel<T>(menu: &mut MenuState, action: impl FnOnce() -> T) -> T {
    let out = action();
    menu.close();
    out
}

/// Entries of the signed-in user menu, keyed by the value the dropdown reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuAction {
    Dashboard,
    Profile,
    Logout,
}

impl UserMenuAction {
    pub fn value(self) -> &'static str {
        match self {
            UserMenuAction::Dashboard => "dashboard",
            UserMenuAction::Profile => "profile",
            UserMenuAction::Logout => "logout",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "dashboard" => Some(UserMenuAction::Dashboard),
            "profile" => Some(UserMenuAction::Profile),
            "logout" => Some(UserMenuAction::Logout),
            _ => None,
        }
    }

    /// Route the entry links to. Logout has none, it runs the session action.
    pub fn target(self, dashboard: &'static str) -> Option<&'static str> {
        match self {
            UserMenuAction::Dashboard => Some(dashboard),
            UserMenuAction::Profile => Some(super::PROFILE_PATH),
            UserMenuAction::Logout => None,
        }
    }
}
