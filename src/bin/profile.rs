use std::time::Instant;

use mazeseed::{Generator, generate_maze_with, walls_of};

fn main() -> Result<(), mazeseed::MazeError> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(20);
    let size = args.next().and_then(|s| s.parse::<u32>().ok()).unwrap_or(255);

    for generator in [Generator::BranchPoint, Generator::RoomGrowth] {
        let started = Instant::now();
        for seed in 0..num_iters as i64 {
            let graph = generate_maze_with(generator, size, Some(seed))?;
            walls_of(size, &graph);
        }
        let elapsed = started.elapsed();
        println!(
            "{generator}: {num_iters} mazes of {size}x{size} in {elapsed:?} ({:?} each)",
            elapsed / num_iters.max(1) as u32
        );
    }
    Ok(())
}
