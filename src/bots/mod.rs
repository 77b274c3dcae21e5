//! Bot roster and the trait every pilot implements.

pub mod open_space;
pub mod random_walk;

use crate::grid::{Direction, GameState, Grid, Player, Vec2};

/// A movement policy driven one tick at a time.
pub trait CyclePilot {
    fn id(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Reseed internal randomness. Called once when a session starts.
    fn reset(&mut self, seed: u64);
    /// Choose the next direction for `rider`. `previous` is the direction
    /// chosen on the last tick, if any; pilots ride it out when no safe
    /// move exists.
    fn next_direction(
        &mut self,
        state: &GameState,
        rider: &Player,
        previous: Option<Direction>,
    ) -> Direction;
}

/// A step is safe iff the candidate cell is inside the grid and empty.
pub fn is_safe_step(grid: &Grid, from: Vec2, direction: Direction) -> bool {
    let next = from + direction.offset();
    grid.is_inside(next) && grid.is_cell_empty(next)
}

/// Accepted-loss fallback: the previous tick's direction, unvalidated.
/// North on the degenerate first tick, before any direction was chosen.
pub fn fallback_direction(previous: Option<Direction>) -> Direction {
    previous.unwrap_or(Direction::North)
}

pub fn bot_ids() -> Vec<&'static str> {
    vec!["open-space", "random-walk"]
}

pub fn describe_bots() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "open-space",
            "Scores each safe direction by straight-line open space and keeps the widest lane.",
        ),
        (
            "random-walk",
            "Picks a uniformly random safe direction each tick; baseline opponent.",
        ),
    ]
}

pub fn create_bot(id: &str) -> Option<Box<dyn CyclePilot>> {
    match id {
        "open-space" => Some(Box::new(open_space::OpenSpaceBot::new())),
        "random-walk" => Some(Box::new(random_walk::RandomWalkBot::new())),
        _ => None,
    }
}
