/// Axis-aligned rectangle on the pallet footprint. `pos` is the top-left
/// corner, and the covered area is half-open: `[pos, pos + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub pos: (u32, u32),
    pub size: (u32, u32),
}

impl Rect {
    pub fn new(pos: (u32, u32), size: (u32, u32)) -> Self {
        Self { pos, size }
    }

    pub fn max(&self) -> (u32, u32) {
        (self.pos.0 + self.size.0, self.pos.1 + self.size.1)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());

        let x_overlap = self.pos.0 < b_max.0 && other.pos.0 < a_max.0;
        let y_overlap = self.pos.1 < b_max.1 && other.pos.1 < a_max.1;

        x_overlap && y_overlap
    }

    pub fn fits_within(&self, bounds: (u32, u32)) -> bool {
        let max = self.max();
        max.0 <= bounds.0 && max.1 <= bounds.1
    }
}

/// Whether a span starting at `pos` with length `len` runs past `limit`.
/// Computed in 64 bits so large pallets can't overflow.
pub(crate) fn exceeds(pos: u32, len: u32, limit: u32) -> bool {
    u64::from(pos) + u64::from(len) > u64::from(limit)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new((0, 0), (40, 40));
        let right = Rect::new((40, 0), (40, 40));
        let below = Rect::new((0, 40), (40, 40));

        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!right.intersects(&a));
    }

    #[test]
    fn overlapping_intersect() {
        let a = Rect::new((0, 0), (40, 40));
        let b = Rect::new((39, 39), (10, 10));
        let inside = Rect::new((10, 10), (5, 5));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&inside));
    }

    #[test]
    fn fits_within_bounds() {
        assert!(Rect::new((60, 60), (40, 40)).fits_within((100, 100)));
        assert!(!Rect::new((61, 60), (40, 40)).fits_within((100, 100)));
    }

    #[test]
    fn exceeds_does_not_overflow() {
        assert!(exceeds(u32::MAX, 1, u32::MAX));
        assert!(!exceeds(80, 20, 100));
        assert!(exceeds(80, 21, 100));
    }
}
