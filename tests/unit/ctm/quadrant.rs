//! Tests for overlapping quadrant extraction from the 2x2 texture

#[cfg(test)]
mod tests {
    use crate::fixtures::{coordinate_source, coordinate_texture};
    use ctmforge::ctm::inputs::TileInputs;
    use ctmforge::ctm::quadrant::{Quadrant, extract};
    use ctmforge::spatial::geometry::TileGeometry;
    use ctmforge::spatial::region::Region;

    const SIZE: usize = 8;

    // Tests index conversion covers exactly four quadrants
    // Verified by mapping index 3 to NorthWest
    #[test]
    fn test_quadrant_indices() {
        for (index, quadrant) in Quadrant::ALL.into_iter().enumerate() {
            assert_eq!(quadrant.index(), index);
            assert_eq!(Quadrant::from_index(index), Some(quadrant));
        }
        assert_eq!(Quadrant::from_index(4), None);
    }

    // Tests quadrant origins sit on the texture midline
    // Verified by swapping the NorthEast and SouthWest origins
    #[test]
    fn test_quadrant_origins() {
        assert_eq!(Quadrant::NorthWest.origin(SIZE), (0, 0));
        assert_eq!(Quadrant::NorthEast.origin(SIZE), (0, SIZE));
        assert_eq!(Quadrant::SouthWest.origin(SIZE), (SIZE, 0));
        assert_eq!(Quadrant::SouthEast.origin(SIZE), (SIZE, SIZE));
    }

    // Tests quadrant regions span T+1 pixels and end on the texture edge
    // Verified by sizing regions with the tile size instead of T+1
    #[test]
    fn test_quadrant_regions() {
        let source = coordinate_source(SIZE, 3);
        let geometry = TileGeometry::from_source(&source.view()).unwrap();

        assert_eq!(
            Quadrant::NorthWest.region(&geometry),
            Region::new(0..SIZE + 1, 0..SIZE + 1)
        );
        assert_eq!(
            Quadrant::SouthEast.region(&geometry),
            Region::new(SIZE..2 * SIZE + 1, SIZE..2 * SIZE + 1)
        );
        for quadrant in Quadrant::ALL {
            let edge = geometry.texture_size();
            assert!(quadrant.region(&geometry).fits_within(edge, edge));
        }
    }

    // Tests every quadrant spans T+1 pixels and reads from its own origin
    // Verified by extracting T pixels per axis
    #[test]
    fn test_extract_spans_inclusive_ranges() {
        let source = coordinate_source(SIZE, 3);
        let texture = coordinate_texture(SIZE, 3);
        let inputs = TileInputs::new(source.view(), texture.view()).unwrap();

        for quadrant in Quadrant::ALL {
            let view = extract(&inputs, quadrant);
            assert_eq!(view.dim(), (SIZE + 1, SIZE + 1, 3));
            assert_eq!(
                Some(view),
                quadrant.region(inputs.geometry()).view(texture.view())
            );

            let (row, col) = quadrant.origin(SIZE);
            assert_eq!(view[[0, 0, 0]] as usize, row);
            assert_eq!(view[[0, 0, 1]] as usize, col);
            assert_eq!(view[[SIZE, SIZE, 0]] as usize, row + SIZE);
            assert_eq!(view[[SIZE, SIZE, 1]] as usize, col + SIZE);
        }
    }

    // Tests adjacent quadrants share their boundary row and column
    // Verified by starting the eastern quadrants one column later
    #[test]
    fn test_adjacent_quadrants_share_boundary() {
        let source = coordinate_source(SIZE, 3);
        let texture = coordinate_texture(SIZE, 3);
        let inputs = TileInputs::new(source.view(), texture.view()).unwrap();

        let north_west = extract(&inputs, Quadrant::NorthWest);
        let north_east = extract(&inputs, Quadrant::NorthEast);
        let south_west = extract(&inputs, Quadrant::SouthWest);

        for i in 0..=SIZE {
            for channel in 0..3 {
                assert_eq!(north_west[[i, SIZE, channel]], north_east[[i, 0, channel]]);
                assert_eq!(north_west[[SIZE, i, channel]], south_west[[0, i, channel]]);
            }
        }
    }
}
