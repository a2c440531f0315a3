use wavefront_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> usize {
    a.row.abs_diff(b.row) as usize + a.col.abs_diff(b.col) as usize
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> usize {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_distances() {
        let a = Point::new(1, 2);
        let b = Point::new(4, -2);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(chebyshev(a, a), 0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let lo = Point::new(i32::MIN, i32::MIN);
        let hi = Point::new(i32::MAX, 0);
        assert_eq!(manhattan(lo, hi), u32::MAX as usize + (1usize << 31));
        assert_eq!(chebyshev(lo, hi), u32::MAX as usize);
    }
}
