use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use leptos::prelude::*;
use serde::Deserialize;
use shared_types::{SessionUser, UserRole};
use thiserror::Error;

use crate::nav::{SessionActions, SessionError, SessionReader};

/// localStorage key holding the session JWT.
pub const AUTH_TOKEN_KEY: &str = "koralink_auth_token";

#[derive(Debug, Deserialize, Clone)]
struct Claims {
    exp: u64,
    name: String,
    #[serde(default)]
    role: UserRole,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token does not have three segments")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Payload(#[from] base64::DecodeError),
    #[error("token claims are invalid: {0}")]
    Claims(#[from] serde_json::Error),
}

fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Malformed);
    }

    let payload = URL_SAFE_NO_PAD.decode(parts[1].trim_end_matches('='))?;
    Ok(serde_json::from_slice(&payload)?)
}

/// Session user carried by `token`, `None` once it has expired.
/// `now` is in seconds since the epoch.
pub fn user_from_token(token: &str, now: u64) -> Result<Option<SessionUser>, TokenError> {
    let claims = decode_claims(token)?;
    if claims.exp <= now {
        return Ok(None);
    }
    Ok(Some(SessionUser {
        name: claims.name,
        role: claims.role,
    }))
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(SessionError::StorageUnavailable)
}

/// Reads the stored token on the client. Always `None` on the server.
fn restore_session_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let token = local_storage().ok()?.get_item(AUTH_TOKEN_KEY).ok().flatten()?;
        if token.is_empty() {
            return None;
        }
        let now = (js_sys::Date::now() / 1000.0) as u64;
        return match user_from_token(&token, now) {
            Ok(user) => user,
            Err(e) => {
                leptos::logging::warn!("ignoring stored session token: {e}");
                None
            }
        };
    }

    #[cfg(not(feature = "hydrate"))]
    None
}

fn clear_stored_token() -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .remove_item(AUTH_TOKEN_KEY)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))?;
    }
    Ok(())
}

/// Session state shared through Leptos context.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<SessionUser>>,
}

impl AuthContext {
    pub fn new(user: Option<SessionUser>) -> Self {
        Self {
            user: RwSignal::new(user),
        }
    }
}

impl SessionReader for AuthContext {
    fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    fn user(&self) -> Option<SessionUser> {
        self.user.get()
    }
}

impl SessionActions for AuthContext {
    fn logout(&self) -> Result<(), SessionError> {
        self.user.set(None);
        clear_stored_token()
    }
}

/// Provides the auth context. The stored session is restored once hydrated,
/// so server and client render the same signed-out markup first.
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::new(None);

    Effect::new(move |_| {
        if let Some(user) = restore_session_user() {
            auth.user.set(Some(user));
        }
    });

    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        leptos::logging::warn!("AuthContext missing, rendering signed out");
        AuthContext::new(None)
    })
}
