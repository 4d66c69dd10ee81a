pub mod reports;
pub mod shipping;
