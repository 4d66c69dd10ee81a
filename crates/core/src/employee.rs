//! Employee record as supplied by the HR entry screens.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;
use crate::size::Size;
use crate::types::DbId;

/// A single employee and their uniform size selections.
///
/// `branch_id` is optional at the boundary: records without it are counted
/// and skipped by [`crate::roster::Roster`] rather than rejected wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: DbId,
    #[serde(default, alias = "sucursal_id", alias = "sucursalId")]
    pub branch_id: Option<DbId>,
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
    #[serde(default, alias = "talla")]
    pub safety_size: Size,
    #[serde(
        default,
        alias = "requiere_playera_administrativa",
        deserialize_with = "null_as_default"
    )]
    pub requires_admin_garment: bool,
    /// Only meaningful when `requires_admin_garment` is set.
    #[serde(default, alias = "talla_administrativa")]
    pub admin_size: Size,
}

impl Employee {
    /// Build an employee assigned to `branch_id` with only a safety size.
    pub fn new(id: DbId, branch_id: DbId, safety_size: Size) -> Self {
        Self {
            id,
            branch_id: Some(branch_id),
            name: None,
            safety_size,
            requires_admin_garment: false,
            admin_size: Size::Undefined,
        }
    }

    /// Mark the employee as administrative with the given admin garment size.
    pub fn with_admin_size(mut self, admin_size: Size) -> Self {
        self.requires_admin_garment = true;
        self.admin_size = admin_size;
        self
    }
}
