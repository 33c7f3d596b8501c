//! Agent-related API types

use crate::de::null_to_default;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent availability as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum AgentStatus {
    Active,
    #[default]
    Inactive,
    Other(String),
}

impl AgentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AgentStatus::Active => "ACTIVE",
            AgentStatus::Inactive => "INACTIVE",
            AgentStatus::Other(raw) => raw.as_str(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AgentStatus::Active)
    }
}

impl From<Option<String>> for AgentStatus {
    fn from(raw: Option<String>) -> Self {
        let Some(raw) = raw else {
            return AgentStatus::Inactive;
        };
        let key = raw.trim().to_ascii_uppercase();
        match key.as_str() {
            "ACTIVE" => AgentStatus::Active,
            "INACTIVE" => AgentStatus::Inactive,
            _ => AgentStatus::Other(raw),
        }
    }
}

impl From<AgentStatus> for String {
    fn from(status: AgentStatus) -> Self {
        match status {
            AgentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An AI agent registered with the backend. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, rename = "type", alias = "agentType", deserialize_with = "null_to_default")]
    pub agent_type: String,
    #[serde(default)]
    pub status: AgentStatus,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_decode() {
        let a: Agent = serde_json::from_str(
            r#"{"id":"claude","name":"Claude","type":"CLI","status":"ACTIVE"}"#,
        )
        .unwrap();
        assert_eq!(a.agent_type, "CLI");
        assert!(a.status.is_active());
    }

    #[test]
    fn test_agent_null_fields() {
        let a: Agent =
            serde_json::from_str(r#"{"id":"x","name":null,"type":null,"status":null}"#).unwrap();
        assert_eq!(a.name, "");
        assert_eq!(a.agent_type, "");
        assert_eq!(a.status, AgentStatus::Inactive);
    }

    #[test]
    fn test_agent_status_fallbacks() {
        let a: Agent = serde_json::from_str(r#"{"id":"x","agentType":"API"}"#).unwrap();
        assert_eq!(a.agent_type, "API");
        assert_eq!(a.status, AgentStatus::Inactive);

        let b: Agent = serde_json::from_str(r#"{"id":"y","status":"busy"}"#).unwrap();
        assert_eq!(b.status.to_string(), "busy");
        assert!(!b.status.is_active());
    }
}
