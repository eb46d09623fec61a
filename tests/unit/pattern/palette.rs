//! Tests for palette defaults and per-position color pairs

#[cfg(test)]
mod tests {
    use rhombitile::geometry::SquarePosition;
    use rhombitile::pattern::Palette;

    // Tests default palette colors
    // Verified by swapping primary and secondary defaults
    #[test]
    fn test_default_palette() {
        let palette = Palette::default();

        assert_eq!(palette.primary, "#3b82f6");
        assert_eq!(palette.secondary, "#ef4444");
        assert_eq!(palette.background, "#1f2937");
    }

    // Tests the color pair flips between upper-left and lower-right squares
    // Verified by returning the same pair for every position
    #[test]
    fn test_square_colors() {
        let palette = Palette::default();

        assert_eq!(
            palette.square_colors(SquarePosition::Top),
            ["#3b82f6", "#ef4444"]
        );
        assert_eq!(
            palette.square_colors(SquarePosition::Left),
            ["#3b82f6", "#ef4444"]
        );
        assert_eq!(
            palette.square_colors(SquarePosition::Right),
            ["#ef4444", "#3b82f6"]
        );
        assert_eq!(
            palette.square_colors(SquarePosition::Bottom),
            ["#ef4444", "#3b82f6"]
        );
    }

    // Tests palette field names in serialized form
    // Verified by removing the color1 rename
    #[test]
    fn test_palette_serialization() {
        let value = serde_json::to_value(Palette::default()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "color1": "#3b82f6",
                "color2": "#ef4444",
                "color3": "#1f2937",
            })
        );
    }
}
