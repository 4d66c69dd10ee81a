//! Printable text of a shipping label.
//!
//! ```text
//! SHIPPING LABEL
//! RECIPIENT    branch name, manager, address, phone
//! SENDER       configured distribution centre
//! CONTENTS     employee count, garment totals, size breakdown
//! Box n/m      units in this box
//! Tracking     when the branch has one
//! ```

use serde::{Deserialize, Serialize};

use crate::box_planner::ShipmentBox;
use crate::branch::Branch;
use crate::size_ledger::GarmentSummary;

pub const LABEL_TITLE: &str = "SHIPPING LABEL";
pub const FALLBACK_BRANCH_NAME: &str = "Branch";
pub const FALLBACK_ADDRESS: &str = "Address not specified";
pub const FALLBACK_PHONE: &str = "Phone not specified";

/// Return address printed on every label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderInfo {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

impl Default for SenderInfo {
    fn default() -> Self {
        Self {
            name: "Uniform Distribution Center".to_string(),
            address: "Constitucion 444 pte Col Centro, Monterrey, NL, CP 64000".to_string(),
            phone: "8126220306".to_string(),
        }
    }
}

/// Recipient block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub name: String,
    pub manager: Option<String>,
    pub address: String,
    pub phone: String,
}

/// Contents block; only present when the branch has employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentsSummary {
    pub employee_count: u32,
    pub safety_garments: u32,
    pub polos: u32,
    pub shirts: u32,
    pub safety_sizes: String,
    pub admin_sizes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelContent {
    pub recipient: Recipient,
    pub sender: SenderInfo,
    pub contents: Option<ContentsSummary>,
    pub box_label: String,
    pub units_in_box: u32,
    pub tracking_number: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl LabelContent {
    pub fn build(
        branch: &Branch,
        summary: &GarmentSummary,
        shipment_box: &ShipmentBox,
        sender: &SenderInfo,
    ) -> Self {
        let recipient = Recipient {
            name: non_blank(Some(branch.name.as_str()))
                .unwrap_or_else(|| FALLBACK_BRANCH_NAME.to_string()),
            manager: non_blank(Some(branch.manager.as_str())),
            address: non_blank(branch.address.as_deref())
                .unwrap_or_else(|| FALLBACK_ADDRESS.to_string()),
            phone: non_blank(branch.phone.as_deref())
                .unwrap_or_else(|| FALLBACK_PHONE.to_string()),
        };

        let contents = (summary.employee_count > 0).then(|| ContentsSummary {
            employee_count: summary.employee_count,
            safety_garments: summary.safety_garment_total,
            polos: summary.polo_count,
            shirts: summary.shirt_count,
            safety_sizes: summary.safety_sizes_line(),
            admin_sizes: summary.admin_sizes_line(),
        });

        Self {
            recipient,
            sender: sender.clone(),
            contents,
            box_label: shipment_box.box_label(),
            units_in_box: shipment_box.units_in_this_box,
            tracking_number: branch.tracking_number().map(str::to_string),
        }
    }

    /// Flatten to printable lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![LABEL_TITLE.to_string(), "RECIPIENT".to_string()];
        lines.push(self.recipient.name.clone());
        if let Some(manager) = &self.recipient.manager {
            lines.push(manager.clone());
        }
        lines.push(self.recipient.address.clone());
        lines.push(self.recipient.phone.clone());

        lines.push("SENDER".to_string());
        lines.push(self.sender.name.clone());
        lines.push(self.sender.address.clone());
        if !self.sender.phone.is_empty() {
            lines.push(self.sender.phone.clone());
        }

        if let Some(contents) = &self.contents {
            lines.push("CONTENTS".to_string());
            lines.push(format!("Employees: {}", contents.employee_count));
            if contents.safety_garments > 0 {
                lines.push(format!("Safety: {}", contents.safety_garments));
            }
            if contents.polos > 0 {
                lines.push(format!("Polos: {}", contents.polos));
            }
            if contents.shirts > 0 {
                lines.push(format!("Shirts: {}", contents.shirts));
            }
            if !contents.safety_sizes.is_empty() {
                lines.push(format!("Safety sizes: {}", contents.safety_sizes));
            }
            if !contents.admin_sizes.is_empty() {
                lines.push(format!("Admin sizes: {}", contents.admin_sizes));
            }
        }

        lines.push(format!("{} ({} units)", self.box_label, self.units_in_box));
        if let Some(tracking) = &self.tracking_number {
            lines.push(format!("Tracking: {tracking}"));
        }
        lines
    }
}
