use std::str::FromStr;

use apiward_core::AppError;
use serde::{Deserialize, Serialize};

/// Stable audit actions emitted by application use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    /// Emitted when an api's configuration changes.
    #[serde(rename = "api.update")]
    ApiUpdated,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiUpdated => "api.update",
        }
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "api.update" => Ok(Self::ApiUpdated),
            _ => Err(AppError::Validation(format!("unknown audit action '{value}'"))),
        }
    }
}

/// Kind of principal behind an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditActorKind {
    /// A signed-in dashboard user.
    User,
    /// An automated process acting on its own.
    System,
}

impl AuditActorKind {
    /// Returns a stable storage value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::System => "system",
        }
    }
}

impl FromStr for AuditActorKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "system" => Ok(Self::System),
            _ => Err(AppError::Validation(format!("unknown audit actor kind '{value}'"))),
        }
    }
}

/// Principal recorded on an audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditActor {
    /// Principal kind.
    pub kind: AuditActorKind,
    /// Principal identifier.
    pub id: String,
}

impl AuditActor {
    /// Creates a user actor.
    #[must_use]
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            kind: AuditActorKind::User,
            id: id.into(),
        }
    }
}

/// Resource touched by an audited action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResource {
    /// Resource type label, e.g. `api`.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Resource identifier.
    pub id: String,
}

/// Request metadata captured with an audit entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditContext {
    /// Client origin, usually the first forwarded address.
    pub location: Option<String>,
    /// Client user agent.
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{AuditAction, AuditActorKind, AuditResource};

    #[test]
    fn audit_action_storage_value_is_stable() {
        assert_eq!(AuditAction::ApiUpdated.as_str(), "api.update");
        assert!(AuditAction::from_str("api.update").is_ok());
        assert!(AuditAction::from_str("api.delete").is_err());
    }

    #[test]
    fn actor_kind_parses_system() {
        assert!(
            AuditActorKind::from_str("system").is_ok_and(|kind| kind == AuditActorKind::System)
        );
    }

    #[test]
    fn resource_serializes_type_key() {
        let resource = AuditResource {
            resource_type: "api".to_owned(),
            id: "api_1".to_owned(),
        };
        let json = serde_json::to_value(&resource);
        assert!(json.is_ok_and(|json| json["type"] == "api"));
    }
}
