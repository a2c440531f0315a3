use wavefront_core::Point;

// Up, down, left, right. Breadth-first ties on grids resolve in this order.
const CARDINAL: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

const OCTILE: [Point; 8] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(1, 1),
];

/// The set of single-step moves allowed on a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Moves {
    /// Up, down, left, right.
    #[default]
    Cardinal,
    /// The cardinal moves followed by the four diagonals. Diagonal steps
    /// only require the destination cell to be passable.
    Octile,
}

impl Moves {
    /// Step offsets in enumeration order.
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Self::Cardinal => &CARDINAL,
            Self::Octile => &OCTILE,
        }
    }

    /// Append the neighbours of `p` for which `keep` returns `true`.
    #[inline]
    pub fn push_neighbors(self, p: Point, keep: impl Fn(Point) -> bool, buf: &mut Vec<Point>) {
        for &d in self.offsets() {
            let n = p + d;
            if keep(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_is_up_down_left_right() {
        let p = Point::new(3, 3);
        let mut buf = Vec::new();
        Moves::Cardinal.push_neighbors(p, |_| true, &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(2, 3),
                Point::new(4, 3),
                Point::new(3, 2),
                Point::new(3, 4),
            ]
        );
    }

    #[test]
    fn octile_extends_cardinal() {
        assert_eq!(&Moves::Octile.offsets()[..4], Moves::Cardinal.offsets());
        assert_eq!(Moves::default(), Moves::Cardinal);
    }

    #[test]
    fn octile_filters_with_keep() {
        let p = Point::new(0, 0);
        let mut buf = Vec::new();
        Moves::Octile.push_neighbors(p, |n| n.row >= 0 && n.col >= 0, &mut buf);
        assert_eq!(
            buf,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }
}
