//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of the local entity that owns subscriptions (the billable owner).
///
/// Owners come from the host application, so the id is an opaque non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Creates a new OwnerId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("owner_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a locally persisted subscription record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Creates a new random SubscriptionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SubscriptionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubscriptionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_accepts_non_empty_string() {
        let id = OwnerId::new("owner-123").unwrap();
        assert_eq!(id.as_str(), "owner-123");
    }

    #[test]
    fn owner_id_rejects_blank_string() {
        let result = OwnerId::new("   ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "owner_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn owner_id_displays_correctly() {
        let id = OwnerId::new("owner-456").unwrap();
        assert_eq!(format!("{}", id), "owner-456");
    }

    #[test]
    fn subscription_id_generates_unique_values() {
        let id1 = SubscriptionId::new();
        let id2 = SubscriptionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn subscription_id_parses_from_valid_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: SubscriptionId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn subscription_id_rejects_invalid_string() {
        let result: Result<SubscriptionId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn subscription_id_serializes_transparently() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = SubscriptionId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }
}
