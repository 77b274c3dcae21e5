//! open-space: straight-ray reachability heuristic.
//!
//! Each tick:
//! - Gate the four candidate directions on a safe first step
//! - Score survivors by consecutive empty cells ahead, capped at a short
//!   scan range
//! - Keep the widest lane; ties go to the earliest direction
//! - Boxed in, ride out the previous direction

use crate::bots::{fallback_direction, is_safe_step, CyclePilot};
use crate::grid::{Direction, GameState, Grid, Player, Vec2};

/// Cells scanned per direction; at most 40 lookups per tick.
pub const MAX_SCAN_RANGE: u32 = 10;

/// Count of consecutive empty, in-grid cells along `direction`, starting
/// one step beyond `from` and capped at [`MAX_SCAN_RANGE`]. Stops at the
/// first off-grid or occupied cell.
pub fn open_run(grid: &Grid, from: Vec2, direction: Direction) -> u32 {
    let step = direction.offset();
    let mut position = from;
    let mut open = 0;
    for _ in 0..MAX_SCAN_RANGE {
        position = position + step;
        if !grid.is_inside(position) || !grid.is_cell_empty(position) {
            break;
        }
        open += 1;
    }
    open
}

pub struct OpenSpaceBot;

impl OpenSpaceBot {
    pub fn new() -> OpenSpaceBot {
        OpenSpaceBot
    }
}

impl Default for OpenSpaceBot {
    fn default() -> OpenSpaceBot {
        OpenSpaceBot::new()
    }
}

impl CyclePilot for OpenSpaceBot {
    fn id(&self) -> &'static str {
        "open-space"
    }

    fn description(&self) -> &'static str {
        "Scores each safe direction by straight-line open space and keeps the widest lane."
    }

    // Randomness is reserved for a future tie-breaking variant.
    fn reset(&mut self, _seed: u64) {}

    fn next_direction(
        &mut self,
        state: &GameState,
        rider: &Player,
        previous: Option<Direction>,
    ) -> Direction {
        let grid = &state.grid;
        let mut best: Option<(Direction, u32)> = None;

        for direction in Direction::ALL {
            // Unsafe first steps never reach scoring, whatever lies beyond.
            if !is_safe_step(grid, rider.position, direction) {
                continue;
            }
            let open = open_run(grid, rider.position, direction);
            match best {
                // Strictly greater only: ties keep the earliest direction.
                Some((_, top)) if open <= top => {}
                _ => best = Some((direction, open)),
            }
        }

        match best {
            Some((direction, _)) => direction,
            // Boxed in: ride out the previous direction and accept the result.
            None => fallback_direction(previous),
        }
    }
}
