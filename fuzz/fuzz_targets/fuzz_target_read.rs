#![no_main]
use libfuzzer_sys::fuzz_target;
use parity_maze::Bitmap;

fuzz_target!(|data: &[u8]| {
    if let Ok(bitmap) = Bitmap::read(data) {
        assert!(bitmap.rows().iter().all(|row| row.len() == bitmap.width()));
    }
});
