//! Tests for configuration defaults and the grid sweep

#[cfg(test)]
mod tests {
    use rhombitile::geometry::{Point, SquarePosition};
    use rhombitile::pattern::{PatternConfig, generate};

    fn config(rows: i64, cols: i64, size: f64, spacing: f64) -> PatternConfig {
        PatternConfig {
            rows: Some(rows),
            cols: Some(cols),
            size,
            spacing,
            include_colors: false,
        }
    }

    // Tests default configuration values
    // Verified by changing the default column count
    #[test]
    fn test_default_config() {
        let config = PatternConfig::default();

        assert_eq!(config.rows, Some(12));
        assert_eq!(config.cols, Some(20));
        assert!((config.size - 170.0).abs() < f64::EPSILON);
        assert!((config.spacing - 1.0).abs() < f64::EPSILON);
        assert!(!config.include_colors);
        assert!(config.palette().is_none());
    }

    // Tests spacing scales the tile size and the block layout
    // Verified by adding spacing instead of multiplying
    #[test]
    fn test_scaled_size() {
        let config = config(1, 1, 100.0, 1.5);

        assert!((config.scaled_size() - 150.0).abs() < f64::EPSILON);
        assert!((config.layout().block_width - 300.0).abs() < f64::EPSILON);
    }

    // Tests missing and negative extents sweep nothing
    // Verified by treating None as the default extent
    #[test]
    fn test_grid_dimensions() {
        assert_eq!(config(3, 4, 1.0, 1.0).grid_dimensions(), (3, 4));
        assert_eq!(config(-3, 4, 1.0, 1.0).grid_dimensions(), (0, 4));
        assert_eq!(config(0, 0, 1.0, 1.0).grid_dimensions(), (0, 0));

        let missing = PatternConfig {
            rows: None,
            ..config(3, 4, 1.0, 1.0)
        };
        assert_eq!(missing.grid_dimensions(), (0, 4));
    }

    // Tests default generation yields 240 blocks
    // Verified by sweeping rows exclusive of the last column
    #[test]
    fn test_default_generation() {
        let document = generate(&PatternConfig::default());

        assert_eq!(document.block_count(), 240);
        assert_eq!(document.dimensions(), (12, 20));
        assert!((document.scaled_size - 170.0).abs() < f64::EPSILON);
    }

    // Tests blocks are produced in row-major order
    // Verified by swapping row and column when building blocks
    #[test]
    fn test_row_major_order() {
        let document = generate(&config(3, 5, 10.0, 1.0));

        assert_eq!(document.block_count(), 15);
        for (index, block) in document.iter_blocks().enumerate() {
            assert_eq!(block.row, index / 5);
            assert_eq!(block.col, index % 5);
        }
    }

    // Tests the single-block reference geometry
    // Verified by offsetting square centers by the full scaled size
    #[test]
    fn test_single_block_geometry() {
        let document = generate(&config(1, 1, 100.0, 1.0));
        let block = document.block(0, 0).unwrap();
        let top = block.square(SquarePosition::Top).unwrap();

        assert_eq!(top.center, Point::new(100.0, 50.0));
        assert_eq!(
            top.outer,
            [
                Point::new(100.0, 0.0),
                Point::new(150.0, 50.0),
                Point::new(100.0, 100.0),
                Point::new(50.0, 50.0),
            ]
        );
        assert_eq!(
            top.triangles[0],
            [
                Point::new(50.0, 50.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0)
            ]
        );
        assert_eq!(
            top.triangles[1],
            [
                Point::new(150.0, 50.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0)
            ]
        );
    }

    // Tests colors are applied per position when enabled
    // Verified by applying the primary pair to every square
    #[test]
    fn test_colored_generation() {
        let document = generate(&PatternConfig {
            include_colors: true,
            ..PatternConfig::default()
        });

        assert!(document.palette.is_some());
        let block = document.block(0, 0).unwrap();
        assert_eq!(
            block.square(SquarePosition::Top).unwrap().colors,
            Some(["#3b82f6", "#ef4444"])
        );
        assert_eq!(
            block.square(SquarePosition::Right).unwrap().colors,
            Some(["#ef4444", "#3b82f6"])
        );
    }

    // Tests NaN size propagates into every coordinate
    // Verified by substituting the default size for NaN
    #[test]
    fn test_nan_size_propagates() {
        let document = generate(&config(2, 2, f64::NAN, 1.0));

        assert_eq!(document.block_count(), 4);
        assert!(document.scaled_size.is_nan());
        for block in document.iter_blocks() {
            for square in &block.squares {
                assert!(square.outer.iter().all(|point| point.x.is_nan() && point.y.is_nan()));
            }
        }
    }

    // Tests generation is deterministic
    // Verified by introducing a per-call jitter
    #[test]
    fn test_deterministic() {
        let config = config(4, 3, 33.3, 0.7);
        assert_eq!(generate(&config).blocks, generate(&config).blocks);
    }
}
