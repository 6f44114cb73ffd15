// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tool configuration.
//!
//! Settings come from an optional YAML or JSON file and are then overridden by
//! command line flags. Both workarounds default to enabled.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::source::DomainRef;

/// Toggles for the corrective passes run before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workarounds {
    /// Add `default_ns` records when the apex has no NS record
    pub no_ns: bool,
    /// Drop records sharing a non-wildcard owner name with a CNAME
    pub cname_and_other_data: bool,
}

impl Default for Workarounds {
    fn default() -> Self {
        Self {
            no_ns: true,
            cname_and_other_data: true,
        }
    }
}

/// Everything a conversion needs to know besides the records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Domain name to convert (exclusive with `domain_id`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Numeric id in the `domains` table (exclusive with `domain`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<i64>,

    /// Host the secondary transfers the zone from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_host: Option<String>,

    pub workaround_no_ns: bool,

    pub workaround_cname_and_other_data: bool,

    /// Nameservers added at the apex when the zone has none
    pub default_ns: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            domain: None,
            domain_id: None,
            master_host: None,
            workaround_no_ns: true,
            workaround_cname_and_other_data: true,
            default_ns: Vec::new(),
        }
    }
}

impl Settings {
    /// Parse settings from YAML or JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text does not match the layout.
    pub fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let parsed = if text.trim_start().starts_with('{') {
            serde_json::from_str(text).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(text).map_err(|e| e.to_string())
        };
        parsed.map_err(|reason| ConfigError::Parse {
            path: origin.to_string(),
            reason,
        })
    }

    /// Load settings from a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Ok(Self::parse(&text, &path.display().to_string())?)
    }

    /// Check the settings are usable for a conversion.
    ///
    /// `default_ns` may be empty here; it only becomes mandatory when the
    /// missing-NS workaround actually triggers.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.domain_ref()?;

        if self
            .master_host
            .as_deref()
            .map_or(true, |host| host.trim().is_empty())
        {
            return Err(ConfigError::MissingMasterHost);
        }

        if let Some(index) = self.default_ns.iter().position(|ns| ns.trim().is_empty()) {
            return Err(ConfigError::EmptyDefaultNs { index });
        }

        Ok(())
    }

    /// The domain selector, enforcing that exactly one of `domain` and
    /// `domain_id` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDomain`] or [`ConfigError::ConflictingDomain`].
    pub fn domain_ref(&self) -> Result<DomainRef, ConfigError> {
        match (&self.domain, self.domain_id) {
            (Some(domain), Some(domain_id)) => Err(ConfigError::ConflictingDomain {
                domain: domain.clone(),
                domain_id,
            }),
            (Some(domain), None) if !domain.trim().is_empty() => {
                Ok(DomainRef::Name(domain.trim().to_string()))
            }
            (None, Some(domain_id)) => Ok(DomainRef::Id(domain_id)),
            _ => Err(ConfigError::MissingDomain),
        }
    }

    #[must_use]
    pub fn workarounds(&self) -> Workarounds {
        Workarounds {
            no_ns: self.workaround_no_ns,
            cname_and_other_data: self.workaround_cname_and_other_data,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
