//! Random minefield layouts.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::minefield::Minefield;
use crate::Point;

/// Seedable random minefield generator.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Creates a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed for reproducible layouts.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a closed `width` x `height` minefield with exactly
    /// `num_mines` mines placed uniformly at random.
    pub fn generate(&mut self, width: i32, height: i32, num_mines: usize) -> Minefield {
        let mut minefield = Minefield::new(width, height);
        for point in self.mine_points(width, height, num_mines) {
            minefield.set_mine(point.x, point.y, true);
        }
        minefield.close();
        minefield
    }

    /// Chooses `num_mines` distinct coordinates on a `width` x `height`
    /// field, uniformly at random.
    pub fn mine_points(&mut self, width: i32, height: i32, num_mines: usize) -> Vec<Point> {
        assert!(
            num_mines <= width as usize * height as usize,
            "cannot place {num_mines} mines on a {width}x{height} field"
        );
        (0..width)
            .flat_map(|x| (0..height).map(move |y| Point::new(x, y)))
            .choose_multiple(&mut self.rng, num_mines)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
