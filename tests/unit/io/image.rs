//! Tests for snapshot rendering and PNG export

#[cfg(test)]
mod tests {
    use image::Rgb;
    use schelling::SimulationError;
    use schelling::io::configuration::{EMPTY_COLOR, HIGH_COLOR, LOW_COLOR};
    use schelling::io::image::{cell_color, export_snapshot_as_png, render_snapshot};
    use schelling::spatial::grid::{Cell, Partition};
    use tempfile::TempDir;

    // Tests every label maps to its configured colour
    // Verified by swapping the group colours
    #[test]
    fn test_cell_colors() {
        assert_eq!(cell_color(Cell::High), Rgb(HIGH_COLOR));
        assert_eq!(cell_color(Cell::Low), Rgb(LOW_COLOR));
        assert_eq!(cell_color(Cell::Empty), Rgb(EMPTY_COLOR));
    }

    // Tests cells become square blocks with rows down and columns across
    // Verified by transposing row and column when drawing
    #[test]
    fn test_render_places_blocks() {
        let snapshot = Partition::from_members(3, &[[0, 2]], &[[2, 0]]).snapshot();
        let img = render_snapshot(&snapshot, 2).expect("renderable");

        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(*img.get_pixel(4, 0), Rgb(HIGH_COLOR));
        assert_eq!(*img.get_pixel(5, 1), Rgb(HIGH_COLOR));
        assert_eq!(*img.get_pixel(0, 4), Rgb(LOW_COLOR));
        assert_eq!(*img.get_pixel(1, 5), Rgb(LOW_COLOR));
        assert_eq!(*img.get_pixel(2, 2), Rgb(EMPTY_COLOR));
    }

    // Tests zero-pixel cells are rejected
    // Verified by producing an empty image
    #[test]
    fn test_render_rejects_zero_pixels() {
        let snapshot = Partition::empty(4).snapshot();

        assert!(matches!(
            render_snapshot(&snapshot, 0),
            Err(SimulationError::InvalidParameter { .. })
        ));
    }

    // Tests a PNG is written into a directory that did not exist
    // Verified by skipping parent directory creation
    #[test]
    fn test_export_png() {
        let dir = TempDir::new().expect("temporary directory");
        let path = dir.path().join("boards").join("final.png");
        let snapshot = Partition::from_members(4, &[[0, 0]], &[[3, 3]]).snapshot();

        export_snapshot_as_png(&snapshot, 1, &path).expect("export succeeds");

        let saved = image::open(&path).expect("readable png").to_rgb8();
        assert_eq!(saved.dimensions(), (4, 4));
        assert_eq!(*saved.get_pixel(0, 0), Rgb(HIGH_COLOR));
        assert_eq!(*saved.get_pixel(3, 3), Rgb(LOW_COLOR));
    }
}
