use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record.
///
/// This type deliberately does not derive `Serialize`: the password hash must
/// never leave the credential store boundary, and a record that cannot be
/// serialized cannot leak it through a response body. Anything that goes over
/// the wire is a [`UserProfile`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user record with a fresh id and the current timestamp.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// The public projection of a [`User`], as returned by the API.
///
/// Structurally incapable of carrying the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_projection_drops_hash() {
        let user = User::new(
            "test@example.com".to_string(),
            "test".to_string(),
            "$2b$10$hash".to_string(),
        );
        let id = user.id;
        let created_at = user.created_at;

        let profile = UserProfile::from(user);
        assert_eq!(profile.id, id);
        assert_eq!(profile.email, "test@example.com");
        assert_eq!(profile.name, "test");
        assert_eq!(profile.created_at, created_at);

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_new_users_get_distinct_ids() {
        let a = User::new("a@example.com".into(), "a".into(), "h".into());
        let b = User::new("b@example.com".into(), "b".into(), "h".into());
        assert_ne!(a.id, b.id);
    }
}
