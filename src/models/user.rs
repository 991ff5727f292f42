//! User model supplied by the session collaborator.
//!
//! The engine never authenticates anyone itself; the session layer resolves
//! an identity and hands the resulting [`User`] to the store, which scopes
//! the ledger and derives pay rates from the hourly rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An authenticated user as supplied by the session collaborator.
///
/// Field names serialize in camelCase to stay compatible with the web
/// client's stored documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// The user's display name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The user's pay rate per hour of work. Always positive.
    pub hourly_rate: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_from_camel_case() {
        let json = r#"{
            "id": "user-001",
            "name": "Ada",
            "email": "ada@example.com",
            "hourlyRate": "20"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "user-001");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.hourly_rate, Decimal::new(20, 0));
    }

    #[test]
    fn test_serialize_user_round_trip() {
        let user = User {
            id: "user-001".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            hourly_rate: Decimal::new(2550, 2), // 25.50
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("hourlyRate"));
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }
}
