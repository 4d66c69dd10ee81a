//! Branch (retail location) record.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;
use crate::types::DbId;

/// A retail branch whose employees are sized and shipped as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: DbId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub manager: String,
    #[serde(default, alias = "direccion")]
    pub address: Option<String>,
    #[serde(default, alias = "telefono")]
    pub phone: Option<String>,
    #[serde(default, alias = "is_empaquetado", deserialize_with = "null_as_default")]
    pub is_packaged: bool,
    #[serde(default, alias = "numero_seguimiento")]
    pub tracking_number: Option<String>,
    #[serde(default, alias = "zona")]
    pub zone: Option<String>,
}

impl Branch {
    /// Build a branch with only the required fields set.
    pub fn new(id: DbId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            manager: String::new(),
            address: None,
            phone: None,
            is_packaged: false,
            tracking_number: None,
            zone: None,
        }
    }

    /// Tracking number, ignoring blank strings left by the edit form.
    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_legacy_field_names() {
        let json = serde_json::json!({
            "id": 4,
            "nombre": "Centro",
            "manager": "Luis",
            "direccion": "Av. Juarez 10",
            "is_empaquetado": true,
            "numero_seguimiento": "TRK-1",
            "zona": "Norte"
        });
        let branch: Branch = serde_json::from_value(json).unwrap();
        assert_eq!(branch.name, "Centro");
        assert!(branch.is_packaged);
        assert_eq!(branch.tracking_number(), Some("TRK-1"));
        assert_eq!(branch.zone.as_deref(), Some("Norte"));
        assert_eq!(branch.phone, None);
    }

    #[test]
    fn null_manager_and_packaged_flag_take_defaults() {
        let json = serde_json::json!({
            "id": 2,
            "nombre": "Norte",
            "manager": null,
            "is_empaquetado": null
        });
        let branch: Branch = serde_json::from_value(json).unwrap();
        assert_eq!(branch.manager, "");
        assert!(!branch.is_packaged);
    }

    #[test]
    fn blank_tracking_number_is_absent() {
        let mut branch = Branch::new(1, "Sur");
        branch.tracking_number = Some("   ".into());
        assert_eq!(branch.tracking_number(), None);
    }
}
