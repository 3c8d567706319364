use clap::Parser;
use grid_2048::engine::{spawn_tile, Board, Move};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Debug, Parser)]
#[command(name = "grid-2048", about = "Headless N x N 2048 runner with a random policy")]
struct Args {
    /// Board dimension (N for an N x N grid)
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// RNG seed for a reproducible run (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many moves
    #[arg(long)]
    steps: Option<u64>,

    /// Suppress per-move board printout
    #[arg(long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut board = match Board::new(args.size) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    debug!("seed: {seed}");

    // Two random tiles created to start.
    spawn_tile(&mut board, &mut rng);
    spawn_tile(&mut board, &mut rng);
    if !args.quiet {
        println!("{}", board);
    }

    let mut move_count: u64 = 0;
    while !board.is_game_over() {
        if let Some(limit) = args.steps {
            if move_count >= limit {
                break;
            }
        }
        // Random policy: try directions in a shuffled order and take the
        // first one that changes the board.
        let mut dirs = Move::ALL;
        dirs.shuffle(&mut rng);
        let mut moved = false;
        for dir in dirs {
            if board.shift(dir) {
                let spawned = spawn_tile(&mut board, &mut rng);
                debug!("move {:?}, spawned {:?}", dir, spawned);
                moved = true;
                break;
            }
        }
        if !moved {
            // No direction changes the board; nothing to spawn.
            break;
        }
        move_count += 1;
        if !args.quiet {
            println!("{}", board);
        }
    }

    println!(
        "Moves made: {}, Highest tile: {}, Game over: {}",
        move_count,
        board.highest_tile(),
        board.is_game_over()
    );
}
