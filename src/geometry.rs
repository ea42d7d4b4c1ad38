use crate::bitvec::BitVector;

/// Precomputed masks for a square board. Built once per game session and
/// shared by every position of that session; the masks are only valid for
/// vectors of width `size * size`.
#[derive(Clone, Debug)]
pub struct Geometry {
    size: usize,
    /// Column 0 of every row.
    left: BitVector,
    /// Column `size - 1` of every row.
    right: BitVector,
}

impl Geometry {
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        let area = size * size;
        let mut left = BitVector::new(area);
        let mut right = BitVector::new(area);
        for row in 0..size {
            left.set(row * size);
            right.set((row + 1) * size - 1);
        }
        Geometry { size, left, right }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of points on the board.
    pub fn area(&self) -> usize {
        self.size * self.size
    }

    /// One-step graph dilation: `mask` together with every orthogonal
    /// neighbor of its bits. Horizontal shifts are masked against the edge
    /// columns so a bit never wraps from one row's boundary into the next;
    /// vertical shifts fall off the ends of the vector on their own.
    pub fn dilate(&self, mask: &BitVector) -> BitVector {
        let mut out = mask.clone();

        let mut west = mask.clone();
        west.shift_left(1);
        west.and_not(&self.right);
        out |= &west;

        let mut east = mask.clone();
        east.shift_right(1);
        east.and_not(&self.left);
        out |= &east;

        let mut north = mask.clone();
        north.shift_left(self.size);
        out |= &north;

        let mut south = mask.clone();
        south.shift_right(self.size);
        out |= &south;

        out
    }

    /// Iterated dilation to a fixed point: the connected component of
    /// `seed` within `within`.
    pub fn flood_fill(&self, seed: &BitVector, within: &BitVector) -> BitVector {
        let mut filled = seed & within;
        loop {
            let mut next = self.dilate(&filled);
            next &= within;
            if next == filled {
                return filled;
            }
            filled = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_masks() {
        let geo = Geometry::new(9);
        for row in 0..9 {
            assert!(geo.left.get(row * 9));
            assert!(!geo.left.get(row * 9 + 1));
            assert!(geo.right.get(row * 9 + 8));
            assert!(!geo.right.get(row * 9 + 7));
        }
        assert_eq!(geo.left.count(), 9);
        assert_eq!(geo.right.count(), 9);
    }

    #[test]
    fn test_dilate_center() {
        let geo = Geometry::new(9);
        // Center of 9x9: (4,4) -> index 40.
        let out = geo.dilate(&BitVector::with_bit(81, 40));
        for idx in [40usize, 39, 41, 31, 49] {
            assert!(out.get(idx));
        }
        assert_eq!(out.count(), 5);
    }

    #[test]
    fn test_dilate_corner() {
        let geo = Geometry::new(9);
        let out = geo.dilate(&BitVector::with_bit(81, 0));
        assert!(out.get(0));
        assert!(out.get(1));
        assert!(out.get(9));
        assert_eq!(out.count(), 3);
    }

    #[test]
    fn test_dilate_no_row_wraparound() {
        let geo = Geometry::new(9);
        // Right edge (8,1) -> index 17: must not reach (0,2) = index 18.
        let out = geo.dilate(&BitVector::with_bit(81, 17));
        assert!(out.get(16));
        assert!(out.get(8));
        assert!(out.get(26));
        assert!(!out.get(18));
        assert_eq!(out.count(), 4);

        // Left edge (0,2) -> index 18: must not reach (8,1) = index 17.
        let out = geo.dilate(&BitVector::with_bit(81, 18));
        assert!(out.get(19));
        assert!(out.get(9));
        assert!(out.get(27));
        assert!(!out.get(17));
        assert_eq!(out.count(), 4);
    }

    #[test]
    fn test_flood_fill_group() {
        let geo = Geometry::new(5);
        let mut within = BitVector::new(25);
        // A bent group 0-1-2-7 and a separate stone at 18.
        for idx in [0usize, 1, 2, 7, 18] {
            within.set(idx);
        }
        let group = geo.flood_fill(&BitVector::with_bit(25, 0), &within);
        for idx in [0usize, 1, 2, 7] {
            assert!(group.get(idx));
        }
        assert!(!group.get(18));
        assert_eq!(group.count(), 4);
    }

    #[test]
    fn test_flood_fill_fixed_point() {
        let geo = Geometry::new(5);
        let mut within = BitVector::new(25);
        for idx in [6usize, 7, 11] {
            within.set(idx);
        }
        // Filling the whole component again changes nothing.
        let filled = geo.flood_fill(&BitVector::with_bit(25, 6), &within);
        assert_eq!(geo.flood_fill(&filled, &within), filled);
    }

    #[test]
    fn test_flood_fill_seed_outside() {
        let geo = Geometry::new(5);
        let within = BitVector::with_bit(25, 3);
        // Seed not inside the bound: empty fill.
        let filled = geo.flood_fill(&BitVector::with_bit(25, 12), &within);
        assert!(filled.is_zero());
    }
}
