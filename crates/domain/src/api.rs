use std::fmt::{Display, Formatter};

use apiward_core::{AppResult, NonEmptyString, TenantId};
use chrono::{DateTime, Utc};

use crate::IP_WHITELIST_SEPARATOR;

/// Stable api identifier, unique across all workspaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiId(NonEmptyString);

impl ApiId {
    /// Creates a validated api identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ApiId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Api record owned by a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResource {
    id: ApiId,
    tenant_id: TenantId,
    name: NonEmptyString,
    ip_whitelist: Option<String>,
    deleted_at: Option<DateTime<Utc>>,
}

impl ApiResource {
    /// Creates an api record from persisted values.
    pub fn new(
        id: impl Into<String>,
        tenant_id: TenantId,
        name: impl Into<String>,
        ip_whitelist: Option<String>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: ApiId::new(id)?,
            tenant_id,
            name: NonEmptyString::new(name)?,
            ip_whitelist,
            deleted_at,
        })
    }

    /// Returns the api identifier.
    #[must_use]
    pub fn id(&self) -> &ApiId {
        &self.id
    }

    /// Returns the owning workspace.
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the stored whitelist column, `None` when unrestricted.
    #[must_use]
    pub fn ip_whitelist(&self) -> Option<&str> {
        self.ip_whitelist.as_deref()
    }

    /// Returns the stored whitelist split into its entries.
    #[must_use]
    pub fn ip_whitelist_entries(&self) -> Option<Vec<String>> {
        self.ip_whitelist.as_deref().map(|value| {
            value
                .split(IP_WHITELIST_SEPARATOR)
                .map(ToOwned::to_owned)
                .collect()
        })
    }

    /// Returns the soft-delete timestamp.
    #[must_use]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns whether the api has been soft-deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Replaces the stored whitelist value.
    pub fn set_ip_whitelist(&mut self, ip_whitelist: Option<String>) {
        self.ip_whitelist = ip_whitelist;
    }
}

#[cfg(test)]
mod tests {
    use apiward_core::TenantId;
    use chrono::Utc;

    use super::{ApiId, ApiResource};

    #[test]
    fn api_id_rejects_blank_values() {
        assert!(ApiId::new(" ").is_err());
        assert!(ApiId::new("api_123").is_ok());
    }

    #[test]
    fn stored_whitelist_splits_into_entries() {
        let api = ApiResource::new(
            "api_123",
            TenantId::new(),
            "Payments",
            Some("1.2.3.4,::1".to_owned()),
            None,
        );
        let Ok(api) = api else {
            panic!("api should be valid");
        };

        assert_eq!(
            api.ip_whitelist_entries(),
            Some(vec!["1.2.3.4".to_owned(), "::1".to_owned()])
        );
        assert!(!api.is_deleted());
    }

    #[test]
    fn deleted_at_marks_api_as_deleted() {
        let api = ApiResource::new("api_1", TenantId::new(), "Old", None, Some(Utc::now()));
        assert!(api.is_ok_and(|api| api.is_deleted()));
    }
}
