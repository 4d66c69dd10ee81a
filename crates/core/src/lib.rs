//! Uniform packing and shipping-label engine.
//!
//! Pure domain logic: garment tallies per branch, shipment box planning,
//! branch selection and label page layout. No I/O; callers pass in a
//! snapshot of branches and employees.

pub mod box_planner;
pub mod branch;
pub mod branch_selector;
pub mod compliance;
pub mod employee;
pub mod error;
pub mod label_content;
pub mod label_layout;
pub mod roster;
pub mod serde_helpers;
pub mod shipping;
pub mod size;
pub mod size_ledger;
pub mod types;
