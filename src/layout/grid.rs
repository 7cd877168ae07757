//! Grid layout table, computed once when the catalog loads.

use glam::Vec3;

use super::LayoutTable;
use crate::image::Image;

/// Position of the image at `index` in a centered row-major grid.
///
/// `count` images are laid out in `columns` columns and
/// `ceil(count / columns)` rows; square cells are `extent / columns` wide.
/// Rows run left-to-right, top-to-bottom, and the whole grid is centered
/// on the origin at `z = 0`.
#[must_use]
pub fn grid_position(
    index: usize,
    count: usize,
    columns: usize,
    extent: f32,
) -> Vec3 {
    let columns = columns.max(1);
    let rows = count.div_ceil(columns);
    let cell = extent / columns as f32;
    let grid_width = columns as f32 * cell;
    let grid_height = rows as f32 * cell;

    let col = index % columns;
    let row = index / columns;
    let x = col as f32 * cell - grid_width / 2.0 + cell / 2.0;
    let y = grid_height / 2.0 - row as f32 * cell - cell / 2.0;
    Vec3::new(x, y, 0.0)
}

/// Build the grid table for `images` in catalog order.
#[must_use]
pub fn grid_table(images: &[Image], columns: usize, extent: f32) -> LayoutTable {
    let mut table = LayoutTable::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        table.insert(
            image.id.clone(),
            grid_position(index, images.len(), columns, extent),
        );
    }
    table
}
