#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|maze: parity_maze::Maze| {
    maze.check();
});
