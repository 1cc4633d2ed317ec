#![no_main]
use libfuzzer_sys::fuzz_target;
use parity_maze::fuzz::MazeAndFill;

fuzz_target!(|data: MazeAndFill| {
    data.apply();
});
