//! Tests for error formatting, sources and helpers

#[cfg(test)]
mod tests {
    use schelling::io::error::{SimulationError, ensure_parent_dir, invalid_parameter};
    use std::error::Error;
    use tempfile::TempDir;

    // Tests the capacity error names both numbers
    // Verified by dropping the capacity from the message
    #[test]
    fn test_invalid_configuration_display() {
        let err = SimulationError::InvalidConfiguration {
            population_size: 1700,
            capacity: 1600,
        };
        let message = err.to_string();

        assert!(message.contains("1700"));
        assert!(message.contains("1600"));
        assert!(err.source().is_none());
    }

    // Tests the helper stringifies value and reason
    // Verified by swapping value and reason
    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("tolerance_high", &1.5, &"out of range");

        match &err {
            SimulationError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(*parameter, "tolerance_high");
                assert_eq!(value, "1.5");
                assert_eq!(reason, "out of range");
            }
            _ => unreachable!("Expected InvalidParameter"),
        }
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'tolerance_high' = '1.5': out of range"
        );
    }

    // Tests I/O errors convert and keep their source
    // Verified by returning None from source for file system errors
    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SimulationError::from(io_err);

        assert!(matches!(err, SimulationError::FileSystem { .. }));
        assert!(err.source().is_some());
    }

    // Tests missing parent directories are created
    // Verified by creating only the final path component
    #[test]
    fn test_ensure_parent_dir_creates_nested_dirs() {
        let dir = TempDir::new().expect("temporary directory");
        let path = dir.path().join("a").join("b").join("out.png");

        ensure_parent_dir(&path).expect("directories created");

        assert!(dir.path().join("a").join("b").is_dir());
        assert!(!path.exists());
    }

    // Tests a bare file name needs no directory
    // Verified by calling create_dir_all on an empty path
    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        assert!(ensure_parent_dir(std::path::Path::new("out.png")).is_ok());
    }
}
