//! Shipment box planning.
//!
//! Splits a branch's safety-garment total into boxes of a fixed capacity.
//! Only safety garments drive the box count: administrative sets ride along
//! in the boxes and appear on the label for information only. That rule
//! predates the administrative garments and may under-count volume for
//! branches with many administrative employees.

use serde::Serialize;

use crate::error::CoreError;
use crate::size_ledger::GarmentSummary;
use crate::types::DbId;

/// Garments per shipment box.
pub const DEFAULT_BOX_CAPACITY: u32 = 12;

/// One physical shipment box for a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipmentBox {
    pub branch_id: DbId,
    /// 1-based position within the branch's boxes.
    pub sequence_number: u32,
    pub total_boxes_for_branch: u32,
    pub units_in_this_box: u32,
}

impl ShipmentBox {
    /// `"Box 2/3"` as printed on the label.
    pub fn box_label(&self) -> String {
        format!("Box {}/{}", self.sequence_number, self.total_boxes_for_branch)
    }

    pub fn is_last(&self) -> bool {
        self.sequence_number == self.total_boxes_for_branch
    }
}

/// Reject a capacity that would make box planning meaningless.
pub fn validate_capacity(capacity_per_box: u32) -> Result<(), CoreError> {
    if capacity_per_box == 0 {
        return Err(CoreError::InvalidConfiguration(
            "capacity_per_box must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Number of boxes needed for `total` units, never fewer than one.
pub fn box_count(total: u32, capacity_per_box: u32) -> Result<u32, CoreError> {
    validate_capacity(capacity_per_box)?;
    Ok(total.div_ceil(capacity_per_box).max(1))
}

/// Plan the boxes for one branch.
///
/// Every box but the last is filled to capacity; the last absorbs the
/// remainder. A branch with no sized safety garments still gets a single
/// empty box so its shipment receives a label.
pub fn plan_boxes(
    branch_id: DbId,
    summary: &GarmentSummary,
    capacity_per_box: u32,
) -> Result<Vec<ShipmentBox>, CoreError> {
    let total = summary.safety_garment_total;
    let total_boxes = box_count(total, capacity_per_box)?;

    let boxes = (1..=total_boxes)
        .map(|sequence_number| {
            let units_in_this_box = if sequence_number == total_boxes {
                total - (total_boxes - 1) * capacity_per_box
            } else {
                capacity_per_box
            };
            ShipmentBox {
                branch_id,
                sequence_number,
                total_boxes_for_branch: total_boxes,
                units_in_this_box,
            }
        })
        .collect();

    Ok(boxes)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn summary_with_total(total: u32) -> GarmentSummary {
        GarmentSummary {
            safety_garment_total: total,
            ..GarmentSummary::default()
        }
    }

    fn units(boxes: &[ShipmentBox]) -> Vec<u32> {
        boxes.iter().map(|b| b.units_in_this_box).collect()
    }

    #[test]
    fn zero_total_yields_one_empty_box() {
        let boxes = plan_boxes(1, &summary_with_total(0), 12).unwrap();
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].units_in_this_box, 0);
        assert_eq!(boxes[0].total_boxes_for_branch, 1);
    }

    #[test]
    fn remainder_goes_to_last_box() {
        let boxes = plan_boxes(1, &summary_with_total(25), 12).unwrap();
        assert_eq!(units(&boxes), vec![12, 12, 1]);
        assert!(boxes[2].is_last());
        assert!(!boxes[0].is_last());
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_box() {
        let boxes = plan_boxes(1, &summary_with_total(24), 12).unwrap();
        assert_eq!(units(&boxes), vec![12, 12]);
    }

    #[test]
    fn single_partial_box_holds_full_total() {
        let boxes = plan_boxes(1, &summary_with_total(7), 12).unwrap();
        assert_eq!(units(&boxes), vec![7]);
    }

    #[test]
    fn sequence_numbers_are_one_based_and_tagged() {
        let boxes = plan_boxes(42, &summary_with_total(30), 12).unwrap();
        let seqs: Vec<_> = boxes.iter().map(|b| b.sequence_number).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert!(boxes.iter().all(|b| b.total_boxes_for_branch == 3 && b.branch_id == 42));
        assert_eq!(boxes[1].box_label(), "Box 2/3");
    }

    #[test]
    fn units_sum_to_total() {
        for total in [0, 1, 11, 12, 13, 47, 120] {
            let boxes = plan_boxes(1, &summary_with_total(total), 12).unwrap();
            assert_eq!(boxes.iter().map(|b| b.units_in_this_box).sum::<u32>(), total);
            assert_eq!(boxes.iter().filter(|b| b.is_last()).count(), 1);
        }
    }

    #[test]
    fn admin_garments_do_not_add_boxes() {
        let summary = GarmentSummary {
            safety_garment_total: 6,
            admin_garment_total: 60,
            ..GarmentSummary::default()
        };
        assert_eq!(plan_boxes(1, &summary, 12).unwrap().len(), 1);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_matches!(
            plan_boxes(1, &summary_with_total(5), 0),
            Err(CoreError::InvalidConfiguration(_))
        );
    }
}
