//! Generate a random weighted map and run every search mode on it.
//!
//! Usage: `gridpath [seed]`

use cellpath::{GridMap, GridSolver, Solution, StateId, Status};
use cellpath_core::Point;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const WIDTH: usize = 48;
const HEIGHT: usize = 20;
const WALK: u32 = 0b01;
const SWAMP_COST: f32 = 3.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut costs = vec![1.0f32; WIDTH * HEIGHT];
    let mut mask = vec![WALK; WIDTH * HEIGHT];
    for i in 0..WIDTH * HEIGHT {
        match rng.random_range(0..10) {
            0 | 1 => mask[i] = 0,
            2 => costs[i] = SWAMP_COST,
            _ => {}
        }
    }

    let (start, end) = {
        let map = GridMap::new(&costs, &mask, WIDTH, HEIGHT, WALK)?;
        (
            map.clamp_state(Point::new(0, 0)),
            map.clamp_state(Point::new(WIDTH as i32, HEIGHT as i32)),
        )
    };
    // Keep the endpoints open so the demo usually has something to show.
    mask[start.0] = WALK;
    mask[end.0] = WALK;

    let mut gs = GridSolver::new(WIDTH * HEIGHT);
    gs.configure_grid(&costs, &mask, WIDTH, HEIGHT, WALK)?;

    let sol = gs.solve(start, end)?;
    report("point to point", &sol, gs.checksum());
    draw(&costs, &mask, &sol);

    let goals: Vec<StateId> = (0..4)
        .map(|_| StateId(rng.random_range(0..WIDTH * HEIGHT)))
        .collect();
    let sol = gs.solve_to_priority_set(start, &goals)?;
    report("priority set", &sol, gs.checksum());
    draw(&costs, &mask, &sol);

    let sol = gs.solve_with_cutoff(start, &goals, 15.0)?;
    report("any goal within 15", &sol, gs.checksum());

    Ok(())
}

fn report(name: &str, sol: &Solution, checksum: u32) {
    match sol.status {
        Status::Solved => println!(
            "{name}: {} cells, cost {:.2}, goal {:?}, checksum {checksum:#010x}",
            sol.path.len(),
            sol.cost,
            sol.goal_index
        ),
        Status::NoSolution => println!("{name}: no solution"),
        Status::StartEndSame => println!("{name}: already there"),
    }
}

fn draw(costs: &[f32], mask: &[u32], sol: &Solution) {
    let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let i = y * WIDTH + x;
            let ch = if sol.path.first() == Some(&StateId(i)) {
                'S'
            } else if sol.path.last() == Some(&StateId(i)) {
                'G'
            } else if sol.path.contains(&StateId(i)) {
                '*'
            } else if mask[i] & WALK != WALK {
                '#'
            } else if costs[i] > 1.0 {
                '~'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    print!("{out}");
}
