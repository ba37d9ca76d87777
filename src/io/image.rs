//! PNG export of board snapshots

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::io::configuration::{EMPTY_COLOR, HIGH_COLOR, LOW_COLOR};
use crate::io::error::{Result, SimulationError, ensure_parent_dir, invalid_parameter};
use crate::spatial::grid::{Cell, PartitionSnapshot};

/// Colour used for a cell label
pub const fn cell_color(cell: Cell) -> Rgb<u8> {
    match cell {
        Cell::High => Rgb(HIGH_COLOR),
        Cell::Low => Rgb(LOW_COLOR),
        Cell::Empty => Rgb(EMPTY_COLOR),
    }
}

/// Render a snapshot with each cell drawn as a `cell_pixels` square
///
/// Rows run down the image and columns across it.
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_pixels` is zero or the image would be too large
pub fn render_snapshot(snapshot: &PartitionSnapshot, cell_pixels: u32) -> Result<RgbImage> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"cells must be at least one pixel wide",
        ));
    }
    let edge = u32::try_from(snapshot.size())
        .ok()
        .and_then(|size| size.checked_mul(cell_pixels))
        .ok_or_else(|| {
            invalid_parameter(
                "cell_pixels",
                &cell_pixels,
                &"rendered image exceeds the maximum image size",
            )
        })?;

    let mut img = RgbImage::from_pixel(edge, edge, cell_color(Cell::Empty));

    for (cell, members) in [(Cell::High, snapshot.high()), (Cell::Low, snapshot.low())] {
        let color = cell_color(cell);
        for &[row, col] in members {
            let top = row as u32 * cell_pixels;
            let left = col as u32 * cell_pixels;
            for y in top..top + cell_pixels {
                for x in left..left + cell_pixels {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }

    Ok(img)
}

/// Save a snapshot as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_snapshot_as_png(
    snapshot: &PartitionSnapshot,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_snapshot(snapshot, cell_pixels)?;

    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| SimulationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
