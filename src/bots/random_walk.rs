//! random-walk: uniformly random safe move each tick.
//!
//! Baseline opponent, and the one pilot that consumes the session seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bots::{fallback_direction, is_safe_step, CyclePilot};
use crate::grid::{Direction, GameState, Player};

pub struct RandomWalkBot {
    rng: StdRng,
}

impl RandomWalkBot {
    pub fn new() -> RandomWalkBot {
        RandomWalkBot {
            rng: StdRng::seed_from_u64(0),
        }
    }
}

impl Default for RandomWalkBot {
    fn default() -> RandomWalkBot {
        RandomWalkBot::new()
    }
}

impl CyclePilot for RandomWalkBot {
    fn id(&self) -> &'static str {
        "random-walk"
    }

    fn description(&self) -> &'static str {
        "Picks a uniformly random safe direction each tick; baseline opponent."
    }

    fn reset(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn next_direction(
        &mut self,
        state: &GameState,
        rider: &Player,
        previous: Option<Direction>,
    ) -> Direction {
        let safe: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|direction| is_safe_step(&state.grid, rider.position, *direction))
            .collect();
        if safe.is_empty() {
            return fallback_direction(previous);
        }
        safe[self.rng.random_range(0..safe.len())]
    }
}
