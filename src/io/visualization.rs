//! Frame capture and GIF generation for run animations

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame};

use crate::io::error::{Result, SimulationError, ensure_parent_dir, invalid_parameter};
use crate::io::image::render_snapshot;
use crate::spatial::grid::PartitionSnapshot;

/// Records rendered snapshots for later GIF export
///
/// Frames are rendered at capture time so the snapshots themselves need not be kept.
pub struct FrameCapture {
    frames: Vec<Frame>,
    cell_pixels: u32,
    frame_delay_ms: u32,
}

impl FrameCapture {
    /// Create a capture drawing each cell as a `cell_pixels` square
    pub const fn new(cell_pixels: u32, frame_delay_ms: u32) -> Self {
        Self {
            frames: Vec::new(),
            cell_pixels,
            frame_delay_ms,
        }
    }

    /// Render and store one snapshot as the next frame
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be rendered
    pub fn record(&mut self, snapshot: &PartitionSnapshot) -> Result<()> {
        let rgb = render_snapshot(snapshot, self.cell_pixels)?;
        let rgba = DynamicImage::ImageRgb8(rgb).into_rgba8();
        self.frames.push(Frame::from_parts(
            rgba,
            0,
            0,
            Delay::from_numer_denom_ms(self.frame_delay_ms, 1),
        ));
        Ok(())
    }

    /// Number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Encode all frames as an endlessly looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no frames captured for animation",
            ));
        }

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| SimulationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(std::io::BufWriter::new(file));
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| SimulationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        encoder
            .encode_frames(self.frames.iter().cloned())
            .map_err(|e| SimulationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
