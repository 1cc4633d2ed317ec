//! fuzzing!

use crate::{Bitmap, Cell, FloodFill, Maze, Plane};
use arbitrary::Arbitrary;
use image::{GenericImageView, ImageFormat, Rgba};
use std::io::Cursor;

impl arbitrary::Arbitrary for Maze {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let size = (u8::arbitrary(u)? as usize % 32 + 1) * 2;
        let top = Plane {
            x: i32::arbitrary(u)?,
            y: i32::arbitrary(u)?,
        };
        let left = Plane {
            x: i32::arbitrary(u)?,
            y: i32::arbitrary(u)?,
        };
        Maze::new(size, top, left).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}

/// Used for fuzz testing a flood fill on a random Maze
#[derive(Debug, Arbitrary)]
pub struct MazeAndFill {
    /// the Maze
    pub maze: Maze,
    /// where the fill starts
    pub start: Cell,
    /// size of every step
    pub batches: Vec<u8>,
}

impl Maze {
    /// check that the written image is read back the same, by this crate and by the image crate
    pub fn check(&self) {
        let mut cursor = Cursor::new(vec![]);
        self.write(&mut cursor).unwrap();
        let data = cursor.into_inner();

        let bitmap = Bitmap::read(&data[..]).unwrap();
        assert_eq!(bitmap.width(), self.side());
        assert_eq!(bitmap.height(), self.side());

        let image = image::load_from_memory_with_format(&data, ImageFormat::Pnm).unwrap();
        let (width, height) = image.dimensions();
        assert_eq!(width as usize, self.side());
        assert_eq!(height as usize, self.side());

        // ink and paper must each map to a single color
        let mut ink = None;
        let mut paper = None;
        for row in 0..height {
            for col in 0..width {
                let expected = self.pixel(col as usize, row as usize);
                assert_eq!(bitmap.get(row as usize, col as usize), expected);
                let Rgba([value, _, _, _]) = image.get_pixel(col, row);
                let slot = if expected { &mut ink } else { &mut paper };
                assert_eq!(*slot.get_or_insert(value), value);
            }
        }
        if let (Some(ink), Some(paper)) = (ink, paper) {
            assert_ne!(ink, paper);
        }
    }
}

impl MazeAndFill {
    /// run the fill one batch at a time, checking it only grows
    pub fn apply(self) {
        let MazeAndFill {
            maze,
            start,
            batches,
        } = self;
        let mut fill = FloodFill::new(&maze, start);
        let mut len = fill.len();
        for batch in batches {
            let processed = fill.step(batch as usize);
            assert!(processed <= batch as usize);
            assert!(fill.len() >= len);
            assert!(fill.contains(start));
            if processed < batch as usize {
                assert!(fill.is_done());
            }
            len = fill.len();
        }
    }
}
