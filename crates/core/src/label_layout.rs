//! Label grid layout.
//!
//! Assigns items to page slots in input order, row-major, starting a new
//! page exactly when the current one is full. Only grid coordinates are
//! computed here; fonts, text placement and print units belong to the
//! renderer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Label slots per page, as columns across and rows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelGrid {
    pub slots_per_row: u32,
    pub slots_per_column: u32,
}

impl Default for LabelGrid {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl LabelGrid {
    /// Four large labels per page.
    pub const STANDARD: LabelGrid = LabelGrid {
        slots_per_row: 2,
        slots_per_column: 2,
    };

    /// Eight compact labels per page.
    pub const DENSE: LabelGrid = LabelGrid {
        slots_per_row: 2,
        slots_per_column: 4,
    };

    pub fn new(slots_per_row: u32, slots_per_column: u32) -> Result<Self, CoreError> {
        let grid = Self {
            slots_per_row,
            slots_per_column,
        };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.slots_per_row == 0 || self.slots_per_column == 0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "label grid must have at least one slot per row and column, got {}x{}",
                self.slots_per_row, self.slots_per_column
            )));
        }
        Ok(())
    }

    pub fn slots_per_page(&self) -> u32 {
        self.slots_per_row * self.slots_per_column
    }

    /// Origin and size of a slot on a page of the given dimensions.
    pub fn slot_rect(&self, row_index: u32, column_index: u32, page: PageGeometry) -> SlotRect {
        let width = page.width / f64::from(self.slots_per_row);
        let height = page.height / f64::from(self.slots_per_column);
        SlotRect {
            x: f64::from(column_index) * width,
            y: f64::from(row_index) * height,
            width,
            height,
        }
    }
}

/// Printable page size in abstract units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
}

impl PageGeometry {
    /// A4 portrait in millimetres.
    pub const A4: PageGeometry = PageGeometry {
        width: 210.0,
        height: 297.0,
    };
}

/// A slot's rectangle, measured from the page's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// One occupied label position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelSlot<T> {
    pub page_index: u32,
    pub row_index: u32,
    pub column_index: u32,
    pub payload: T,
}

/// Pages needed for `item_count` labels. Zero items need zero pages.
pub fn page_count(item_count: usize, grid: &LabelGrid) -> Result<u32, CoreError> {
    grid.validate()?;
    let per_page = grid.slots_per_page() as usize;
    Ok(item_count.div_ceil(per_page) as u32)
}

/// Place `items` on the grid in input order.
pub fn layout<T>(
    items: impl IntoIterator<Item = T>,
    grid: &LabelGrid,
) -> Result<Vec<LabelSlot<T>>, CoreError> {
    grid.validate()?;
    let per_page = grid.slots_per_page();

    let slots = items
        .into_iter()
        .zip(0u32..)
        .map(|(payload, k)| {
            let position_in_page = k % per_page;
            LabelSlot {
                page_index: k / per_page,
                row_index: position_in_page / grid.slots_per_row,
                column_index: position_in_page % grid.slots_per_row,
                payload,
            }
        })
        .collect();

    Ok(slots)
}
