use std::net::IpAddr;
use std::str::FromStr;

use apiward_core::{AppError, AppResult};

/// Separator used when a whitelist is persisted as a single column value.
pub const IP_WHITELIST_SEPARATOR: char = ',';

/// Non-empty, ordered list of IPv4/IPv6 literals allowed to call an api.
///
/// Entries keep the caller's order and spelling (trimmed). Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpWhitelist {
    entries: Vec<String>,
}

impl IpWhitelist {
    /// Parses raw operator input.
    ///
    /// Returns `Ok(None)` when the input is absent or blank, which clears the
    /// whitelist. Entries are separated by commas or newlines. The first entry
    /// that is not an IP literal rejects the whole input.
    pub fn parse(input: Option<&str>) -> AppResult<Option<Self>> {
        let Some(input) = input else {
            return Ok(None);
        };
        if input.trim().is_empty() {
            return Ok(None);
        }

        let mut entries = Vec::new();
        for token in input.split([IP_WHITELIST_SEPARATOR, '\n']) {
            let token = token.trim();
            if token.is_empty() {
                return Err(AppError::Validation(
                    "IP whitelist must not contain empty entries".to_owned(),
                ));
            }

            IpAddr::from_str(token).map_err(|error| {
                AppError::Validation(format!("invalid IP address '{token}': {error}"))
            })?;
            entries.push(token.to_owned());
        }

        Ok(Some(Self { entries }))
    }

    /// Returns the validated entries in input order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        self.entries.as_slice()
    }

    /// Returns the single-column storage value.
    #[must_use]
    pub fn to_storage_value(&self) -> String {
        self.entries.join(IP_WHITELIST_SEPARATOR.to_string().as_str())
    }
}
