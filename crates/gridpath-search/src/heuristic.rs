use gridpath_core::Coord;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}

/// Estimate of the remaining cost between two cells.
///
/// Implementations must never overestimate the true cost (admissible),
/// otherwise the search may return a longer path than necessary.
pub trait Heuristic {
    fn estimate(&self, from: Coord, to: Coord) -> u32;
}

/// The Manhattan heuristic. Exact on an obstacle-free 4-connected grid with
/// unit steps, and consistent, so A* with it is optimal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> u32 {
        manhattan(from, to)
    }
}

impl<F: Fn(Coord, Coord) -> u32> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> u32 {
        self(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric_l1() {
        let a = Coord::new(1, 5);
        let b = Coord::new(4, 2);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn consistent_across_single_steps() {
        let goal = Coord::new(3, 3);
        let c = Coord::new(0, 1);
        for n in c.neighbors_4() {
            let (hc, hn) = (Manhattan.estimate(c, goal), Manhattan.estimate(n, goal));
            assert!(hc <= hn + 1);
        }
    }
}
