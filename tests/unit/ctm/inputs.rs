//! Tests for joint validation of the source tile and 2x2 texture

#[cfg(test)]
mod tests {
    use crate::fixtures::{coordinate_source, coordinate_texture, solid};
    use ctmforge::CtmError;
    use ctmforge::ctm::inputs::TileInputs;

    // Tests matching inputs are accepted and expose their geometry
    // Verified by checking the texture against 2T instead of 2T+1
    #[test]
    fn test_accepts_matching_inputs() {
        let source = coordinate_source(32, 4);
        let texture = coordinate_texture(32, 4);

        let inputs = TileInputs::new(source.view(), texture.view()).unwrap();
        assert_eq!(inputs.geometry().size(), 32);
        assert_eq!(inputs.geometry().channels(), 4);
        assert_eq!(inputs.source(), source.view());
        assert_eq!(inputs.texture(), texture.view());
    }

    // Tests a texture without the one-pixel overlap is rejected
    // Verified by skipping the texture check
    #[test]
    fn test_rejects_texture_without_overlap() {
        let source = coordinate_source(32, 3);
        let texture = solid(64, 64, &[0, 0, 0]);

        let result = TileInputs::new(source.view(), texture.view());
        assert!(matches!(result, Err(CtmError::InvalidGeometry { .. })));
    }

    // Tests a non-square texture is rejected
    // Verified by only checking the row count
    #[test]
    fn test_rejects_non_square_texture() {
        let source = coordinate_source(8, 3);
        let texture = solid(17, 16, &[0, 0, 0]);

        assert!(TileInputs::new(source.view(), texture.view()).is_err());
    }

    // Tests source problems are reported before the texture is inspected
    // Verified by accepting rectangular sources
    #[test]
    fn test_rejects_rectangular_source() {
        let source = solid(8, 10, &[0, 0, 0]);
        let texture = coordinate_texture(8, 3);

        let error = TileInputs::new(source.view(), texture.view()).unwrap_err();
        assert!(error.to_string().contains("square"), "{error}");
    }

    // Tests mixed RGB and RGBA inputs are rejected
    // Verified by ignoring the channel comparison
    #[test]
    fn test_rejects_channel_mismatch() {
        let source = coordinate_source(8, 3);
        let texture = coordinate_texture(8, 4);

        let error = TileInputs::new(source.view(), texture.view()).unwrap_err();
        assert!(error.to_string().contains("channels"), "{error}");
    }
}
