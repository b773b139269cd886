use shared_types::{SessionUser, UserRole};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session storage is not available")]
    StorageUnavailable,
    #[error("session storage rejected the operation: {0}")]
    Storage(String),
}

/// Read side of the auth collaborator.
pub trait SessionReader {
    fn is_authenticated(&self) -> bool;
    fn user(&self) -> Option<SessionUser>;
}

/// Write side of the auth collaborator.
pub trait SessionActions {
    fn logout(&self) -> Result<(), SessionError>;
}

/// Role-specific landing route, `/` when the role is unknown or nobody is signed in.
pub fn dashboard_link(user: Option<&SessionUser>) -> &'static str {
    match user.map(|u| u.role) {
        Some(UserRole::Player) => "/player",
        Some(UserRole::Owner) => "/owner",
        Some(UserRole::Unknown) | None => "/",
    }
}

/// What the trailing auth area of the bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthView {
    SignedOut,
    SignedIn {
        name: String,
        dashboard: &'static str,
    },
}

impl AuthView {
    pub fn from_session<S: SessionReader + ?Sized>(session: &S) -> Self {
        if !session.is_authenticated() {
            return AuthView::SignedOut;
        }
        let user = session.user();
        AuthView::SignedIn {
            dashboard: dashboard_link(user.as_ref()),
            name: user.map(|u| u.name).unwrap_or_default(),
        }
    }
}
