//! # Array Operations Module
//!
//! Tiles copies of a building in a rectangular grid. Offsets are computed
//! from the source bounding box plus the requested gap, so copies never
//! overlap for non-negative spacing.

use crate::error::{EditorError, EditorResult};
use crate::geometry::Bounds;
use sunplan_core::constants::MAX_ARRAY_COPIES;

/// Parameters for grid array operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridArrayParams {
    /// Number of rows, including the source row
    pub rows: u32,
    /// Number of columns, including the source column
    pub columns: u32,
    /// Horizontal gap between neighbouring copies (world units)
    pub spacing_x: f64,
    /// Vertical gap between neighbouring copies (world units)
    pub spacing_y: f64,
}

impl GridArrayParams {
    pub fn new(rows: u32, columns: u32, spacing_x: f64, spacing_y: f64) -> Self {
        Self {
            rows,
            columns,
            spacing_x,
            spacing_y,
        }
    }

    /// Rejects empty or oversized grids and negative or non-finite spacing.
    pub fn validate(&self) -> EditorResult<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(EditorError::InvalidArray(format!(
                "rows and columns must be at least 1, got {}x{}",
                self.rows, self.columns
            )));
        }
        match self.total_copies() {
            Some(copies) if copies <= MAX_ARRAY_COPIES => {}
            _ => {
                return Err(EditorError::InvalidArray(format!(
                    "a {}x{} grid exceeds the limit of {} copies",
                    self.rows, self.columns, MAX_ARRAY_COPIES
                )));
            }
        }
        for (axis, value) in [("x", self.spacing_x), ("y", self.spacing_y)] {
            if !value.is_finite() || value < 0.0 {
                return Err(EditorError::InvalidArray(format!(
                    "spacing_{axis} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Copies created, excluding the source; `None` when the cell count overflows.
    pub fn total_copies(&self) -> Option<u32> {
        self.rows
            .checked_mul(self.columns)
            .map(|cells| cells.saturating_sub(1))
    }

    /// Offset of a cell relative to the source, or `None` outside the grid.
    pub fn get_offset(&self, column: u32, row: u32, source: &Bounds) -> Option<(f64, f64)> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some((
            column as f64 * (source.width() + self.spacing_x),
            row as f64 * (source.height() + self.spacing_y),
        ))
    }

    /// Bounding box covering the source and every copy.
    pub fn calculate_bounds(&self, source: &Bounds) -> Bounds {
        let (dx, dy) = self
            .get_offset(
                self.columns.saturating_sub(1),
                self.rows.saturating_sub(1),
                source,
            )
            .unwrap_or((0.0, 0.0));
        Bounds::new(source.min_x, source.min_y, source.max_x + dx, source.max_y + dy)
    }
}

/// Generator for array copies
pub struct ArrayGenerator;

impl ArrayGenerator {
    /// Copy offsets in row-major order, skipping the source cell.
    pub fn generate_grid(
        params: &GridArrayParams,
        source: &Bounds,
    ) -> EditorResult<Vec<(f64, f64)>> {
        params.validate()?;

        let mut offsets = Vec::with_capacity(params.total_copies().unwrap_or(0) as usize);
        for row in 0..params.rows {
            for col in 0..params.columns {
                if row == 0 && col == 0 {
                    continue;
                }
                if let Some(offset) = params.get_offset(col, row, source) {
                    offsets.push(offset);
                }
            }
        }
        Ok(offsets)
    }
}
