#![no_main]
use libfuzzer_sys::fuzz_target;
use parity_maze::{Bitmap, Maze};
use std::io::Cursor;

fuzz_target!(|maze: Maze| {
    let mut cursor = Cursor::new(vec![]);
    maze.write(&mut cursor).unwrap();
    cursor.set_position(0);
    let bitmap = Bitmap::read(&mut cursor).unwrap();
    for row in 0..maze.side() {
        for col in 0..maze.side() {
            assert_eq!(bitmap.get(row, col), maze.pixel(col, row));
        }
    }
});
