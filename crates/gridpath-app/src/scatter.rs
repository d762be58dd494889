use gridpath_core::{CellState, Grid};
use rand::Rng;

/// Turn each `Empty` cell into an obstacle with probability `density`
/// (clamped to `[0, 1]`). Start, end and existing marks are left alone.
/// Returns the number of obstacles placed.
pub fn scatter_obstacles<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, density: f64) -> usize {
    let density = density.clamp(0.0, 1.0);
    let targets: Vec<_> = grid
        .iter()
        .filter(|c| c.state() == CellState::Empty)
        .map(|c| c.coord())
        .collect();

    let mut placed = 0;
    for c in targets {
        if rng.random_bool(density) && grid.toggle_obstacle(c).is_ok() {
            placed += 1;
        }
    }
    log::debug!("scattered {placed} obstacles at density {density:.2}");
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Coord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn full_density_spares_endpoints() {
        let mut g = Grid::new(4, 5).unwrap();
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(3, 4)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scatter_obstacles(&mut g, &mut rng, 1.0), 18);
        assert_eq!(g.start(), Some(Coord::new(0, 0)));
        assert_eq!(g.end(), Some(Coord::new(3, 4)));
    }

    #[test]
    fn zero_density_places_nothing() {
        let mut g = Grid::new(4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(scatter_obstacles(&mut g, &mut rng, 0.0), 0);
        assert_eq!(scatter_obstacles(&mut g, &mut rng, -3.0), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let layout = |seed| {
            let mut g = Grid::new(10, 10).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            scatter_obstacles(&mut g, &mut rng, 0.3);
            g.iter().map(|c| c.state()).collect::<Vec<_>>()
        };
        assert_eq!(layout(7), layout(7));
    }
}
