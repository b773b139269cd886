use serde::{Deserialize, Serialize};

/// Role carried in the session claims. Anything the app does not know about
/// deserializes to `Unknown` instead of failing.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Player,
    Owner,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognised_role_falls_back_to_unknown() {
        let user: SessionUser =
            serde_json::from_str(r#"{"name":"Ada","role":"admin"}"#).unwrap();
        assert_eq!(user.role, UserRole::Unknown);
    }

    #[test]
    fn missing_role_is_unknown() {
        let user: SessionUser = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(user.role, UserRole::Unknown);
    }

    #[test]
    fn known_roles_parse_lowercase() {
        let owner: UserRole = serde_json::from_str(r#""owner""#).unwrap();
        let player: UserRole = serde_json::from_str(r#""player""#).unwrap();
        assert_eq!(owner, UserRole::Owner);
        assert_eq!(player, UserRole::Player);
    }
}
