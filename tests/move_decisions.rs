use anyhow::Result;
use cycles_autopilot::bots::open_space::{open_run, OpenSpaceBot, MAX_SCAN_RANGE};
use cycles_autopilot::bots::{bot_ids, create_bot, describe_bots, is_safe_step, CyclePilot};
use cycles_autopilot::grid::{Direction, GameState, Grid, Player, Vec2};

fn arena(width: u32, height: u32, occupied: &[(i32, i32)]) -> Result<Grid> {
    let mut cells = vec![0u8; (width * height) as usize];
    for (x, y) in occupied {
        cells[(*y as u32 * width + *x as u32) as usize] = 1;
    }
    Grid::new(width, height, cells)
}

fn state_with(grid: Grid, rider: &Player) -> GameState {
    GameState {
        grid,
        players: vec![rider.clone()],
    }
}

fn decide(
    grid: Grid,
    rider: &Player,
    previous: Option<Direction>,
) -> Direction {
    let state = state_with(grid, rider);
    OpenSpaceBot::new().next_direction(&state, rider, previous)
}

#[test]
fn empty_arena_tie_breaks_north() -> Result<()> {
    let grid = arena(5, 5, &[])?;
    let rider = Player::new("ada", Vec2::new(2, 2));

    for direction in Direction::ALL {
        assert_eq!(open_run(&grid, rider.position, direction), 2);
    }
    assert_eq!(decide(grid, &rider, Some(Direction::North)), Direction::North);
    Ok(())
}

#[test]
fn tie_break_keeps_the_earliest_direction() -> Result<()> {
    // Corner rider: north and west are off-grid, east and south tie at 4.
    let grid = arena(5, 5, &[])?;
    let rider = Player::new("ada", Vec2::new(0, 0));
    assert_eq!(decide(grid, &rider, None), Direction::East);
    Ok(())
}

#[test]
fn edge_rider_excludes_off_grid_direction() -> Result<()> {
    let grid = arena(5, 5, &[])?;
    let rider = Player::new("ada", Vec2::new(0, 2));

    assert!(!is_safe_step(&grid, rider.position, Direction::West));
    // East has the longest run (4); west must never be a candidate.
    assert_eq!(decide(grid, &rider, None), Direction::East);
    Ok(())
}

#[test]
fn blocked_first_step_is_never_selected() -> Result<()> {
    // East is walled off right next to the rider even though the lane
    // beyond the wall is wide open; a shorter but safe lane must win.
    let grid = arena(9, 5, &[(3, 2), (2, 1)])?;
    let rider = Player::new("ada", Vec2::new(2, 2));

    assert!(!is_safe_step(&grid, rider.position, Direction::East));
    let chosen = decide(grid, &rider, None);
    assert_ne!(chosen, Direction::East);
    assert_eq!(chosen, Direction::South);
    Ok(())
}

#[test]
fn longer_run_wins() -> Result<()> {
    // Choke every direction but east down to a single cell.
    let grid = arena(7, 7, &[(3, 1), (3, 5), (1, 3)])?;
    let rider = Player::new("ada", Vec2::new(3, 3));
    assert_eq!(decide(grid, &rider, None), Direction::East);

    // Move the east wall in and open the south lane instead.
    let grid = arena(7, 7, &[(3, 1), (5, 3), (1, 3)])?;
    assert_eq!(decide(grid, &rider, None), Direction::South);
    Ok(())
}

#[test]
fn open_run_caps_at_the_scan_range() -> Result<()> {
    let grid = arena(30, 3, &[])?;
    let rider = Player::new("ada", Vec2::new(0, 1));
    assert_eq!(open_run(&grid, rider.position, Direction::East), MAX_SCAN_RANGE);
    Ok(())
}

#[test]
fn open_run_stops_at_the_first_obstacle() -> Result<()> {
    let grid = arena(30, 3, &[(3, 1)])?;
    let rider = Player::new("ada", Vec2::new(0, 1));
    assert_eq!(open_run(&grid, rider.position, Direction::East), 2);
    Ok(())
}

#[test]
fn enclosed_rider_falls_back_to_previous() -> Result<()> {
    let walls = [(2, 1), (3, 2), (2, 3), (1, 2)];
    let rider = Player::new("ada", Vec2::new(2, 2));

    let grid = arena(5, 5, &walls)?;
    assert_eq!(decide(grid, &rider, Some(Direction::East)), Direction::East);

    let grid = arena(5, 5, &walls)?;
    assert_eq!(decide(grid, &rider, Some(Direction::West)), Direction::West);

    // Degenerate first tick: no previous direction recorded yet.
    let grid = arena(5, 5, &walls)?;
    assert_eq!(decide(grid, &rider, None), Direction::North);
    Ok(())
}

#[test]
fn fallback_skips_validation() -> Result<()> {
    // The fallback step rides straight into a wall; the evaluator must
    // not second-guess it.
    let walls = [(2, 1), (3, 2), (2, 3), (1, 2)];
    let grid = arena(5, 5, &walls)?;
    let rider = Player::new("ada", Vec2::new(2, 2));

    assert!(!is_safe_step(&grid, rider.position, Direction::East));
    assert_eq!(decide(grid, &rider, Some(Direction::East)), Direction::East);
    Ok(())
}

#[test]
fn open_space_never_steps_into_a_wall_when_any_lane_is_safe() -> Result<()> {
    let rider = Player::new("ada", Vec2::new(0, 0));
    // Corner rider under different wall layouts: whenever at least one
    // lane is safe, the chosen first step must be safe too.
    for walls in [vec![(1, 0)], vec![(0, 1)], vec![]] {
        let grid = arena(4, 4, &walls)?;
        let chosen = decide(grid.clone(), &rider, None);
        assert!(is_safe_step(&grid, rider.position, chosen));
    }
    Ok(())
}

#[test]
fn roster_ids_all_resolve() {
    for id in bot_ids() {
        let bot = create_bot(id).expect("roster id must resolve");
        assert_eq!(bot.id(), id);
    }
    for (id, description) in describe_bots() {
        let bot = create_bot(id).expect("described id must resolve");
        assert_eq!(bot.description(), description);
    }
}

#[test]
fn factory_builds_the_default_bot() -> Result<()> {
    let mut bot = create_bot("open-space").expect("roster bot");
    assert_eq!(bot.id(), "open-space");

    let grid = arena(5, 5, &[])?;
    let rider = Player::new("ada", Vec2::new(2, 2));
    let state = state_with(grid, &rider);
    assert_eq!(
        bot.next_direction(&state, &rider, None),
        Direction::North
    );

    assert!(create_bot("no-such-bot").is_none());
    Ok(())
}

#[test]
fn random_walk_only_picks_safe_directions() -> Result<()> {
    let mut bot = create_bot("random-walk").expect("roster bot");
    bot.reset(7);

    // One open lane: every draw must take it.
    let walls = [(2, 1), (3, 2), (1, 2)];
    let rider = Player::new("ada", Vec2::new(2, 2));
    for _ in 0..32 {
        let grid = arena(5, 5, &walls)?;
        let state = state_with(grid, &rider);
        assert_eq!(
            bot.next_direction(&state, &rider, None),
            Direction::South
        );
    }

    // Boxed in: same fallback policy as the heuristic bot.
    let walls = [(2, 1), (3, 2), (2, 3), (1, 2)];
    let grid = arena(5, 5, &walls)?;
    let state = state_with(grid, &rider);
    assert_eq!(
        bot.next_direction(&state, &rider, Some(Direction::West)),
        Direction::West
    );
    Ok(())
}
