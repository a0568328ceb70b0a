//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a saved budget scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(Uuid);

impl ScenarioId {
    /// Creates a new random ScenarioId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ScenarioId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ScenarioId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of the planning session that owns a scenario store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanningSessionId(Uuid);

impl PlanningSessionId {
    /// Creates a new random PlanningSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PlanningSessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PlanningSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlanningSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanningSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_id_generates_unique_values() {
        let id1 = ScenarioId::new();
        let id2 = ScenarioId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn scenario_id_parses_from_valid_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ScenarioId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn scenario_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ScenarioId>().is_err());
    }

    #[test]
    fn scenario_id_serializes_to_json() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ScenarioId = uuid_str.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid_str));
    }

    #[test]
    fn planning_session_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = PlanningSessionId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}
