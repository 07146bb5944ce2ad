//! Named Canvas sub-accounts the report can be run against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Sub-accounts of the reference deployment.
const DEFAULT_SUB_ACCOUNTS: [(&str, u64); 8] = [
    ("Especialidad de Endodoncia", 746),
    ("Especialidad de Rehabilitación Oral", 734),
    ("Especialidad de Implantología Buco Maxilofacial", 732),
    ("Especialidad Odontológica en Imagenología Oral y Maxilofacial", 459),
    ("Especialidad en Medicina Familiar", 745),
    ("Especialidad Médica en Medicina Interna", 743),
    ("Especialidad en Imagenología Medica", 748),
    ("Especialidad en Medicina de Urgencia", 747),
];

/// Human-readable name to sub-account id.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SubAccounts(BTreeMap<String, u64>);

/// A resolved sub-account selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubAccount {
    pub name: String,
    pub id: u64,
}

impl Default for SubAccounts {
    fn default() -> Self {
        Self(
            DEFAULT_SUB_ACCOUNTS
                .iter()
                .map(|(name, id)| ((*name).to_string(), *id))
                .collect(),
        )
    }
}

impl FromIterator<(String, u64)> for SubAccounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl SubAccounts {
    pub fn iter(&self) -> impl Iterator<Item = SubAccount> + '_ {
        self.0.iter().map(|(name, id)| SubAccount {
            name: name.clone(),
            id: *id,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a selector: an exact name, a case-insensitive name, or a numeric id.
    ///
    /// A numeric id that is not in the map is still accepted and named after
    /// the id itself.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownSubAccount`] when nothing matches.
    pub fn resolve(&self, selector: &str) -> Result<SubAccount, ConfigError> {
        let selector = selector.trim();

        if let Some(id) = self.0.get(selector) {
            return Ok(SubAccount {
                name: selector.to_string(),
                id: *id,
            });
        }

        let lowered = selector.to_lowercase();
        if let Some((name, id)) = self
            .0
            .iter()
            .find(|(name, _)| name.to_lowercase() == lowered)
        {
            return Ok(SubAccount {
                name: name.clone(),
                id: *id,
            });
        }

        if let Ok(id) = selector.parse::<u64>() {
            let name = self
                .0
                .iter()
                .find(|(_, known)| **known == id)
                .map_or_else(|| id.to_string(), |(name, _)| name.clone());
            return Ok(SubAccount { name, id });
        }

        Err(ConfigError::UnknownSubAccount(selector.to_string()))
    }
}
