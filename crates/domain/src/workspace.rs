use std::collections::BTreeSet;
use std::str::FromStr;

use apiward_core::{AppError, TenantId};
use serde::{Deserialize, Serialize};

/// Plan entitlements a workspace may or may not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Allows restricting api access to a list of client IP addresses.
    IpWhitelist,
}

impl Feature {
    /// Returns a stable storage value for this feature.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IpWhitelist => "ip_whitelist",
        }
    }

    /// Returns all known features.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Feature] = &[Feature::IpWhitelist];

        ALL
    }
}

impl FromStr for Feature {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ip_whitelist" => Ok(Self::IpWhitelist),
            _ => Err(AppError::Validation(format!("unknown feature value '{value}'"))),
        }
    }
}

/// Workspace with its resolved plan entitlements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    tenant_id: TenantId,
    name: String,
    features: BTreeSet<Feature>,
}

impl Workspace {
    /// Creates a workspace view.
    #[must_use]
    pub fn new(
        tenant_id: TenantId,
        name: impl Into<String>,
        features: impl IntoIterator<Item = Feature>,
    ) -> Self {
        Self {
            tenant_id,
            name: name.into(),
            features: features.into_iter().collect(),
        }
    }

    /// Returns the workspace identifier.
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// Returns the workspace name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns whether the plan includes the feature.
    #[must_use]
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Returns the entitlement set.
    #[must_use]
    pub fn features(&self) -> &BTreeSet<Feature> {
        &self.features
    }
}
