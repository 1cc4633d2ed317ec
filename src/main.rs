use log::{error, info};
use parity_maze::{Maze, MazeError};
use std::io::{self, BufWriter};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let maze = Maze::default();
    info!(
        "generating {0}x{0} pbm from a {1}x{1} cell maze",
        maze.side(),
        maze.size()
    );

    if let Err(e) = run(&maze) {
        error!("failed to write maze: {}", e);
        process::exit(1);
    }
    info!("done");
}

fn run(maze: &Maze) -> Result<(), MazeError> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    maze.write(out)
}
