//! # Parity Maze
//!
//! Generate a maze where every wall is the bit parity of a weighted sum of the cell coordinates,
//! and write it as a plain text [PBM](http://netpbm.sourceforge.net/doc/pbm.html) (`P1`) image.
//!
//! Every cell is rendered as 2x2 pixels: the post at its corner and its south wall on the first
//! line, its west wall and whether it is walled on all four sides on the second.
//!
//! ```
//! use parity_maze::{Bitmap, Maze, Plane};
//! use std::io::Cursor;
//!
//! let maze = Maze::new(4, Plane::TOP, Plane::LEFT).unwrap();
//! let mut cursor = Cursor::new(vec![]);
//! maze.write(&mut cursor).unwrap();
//! cursor.set_position(0);
//! let bitmap = Bitmap::read(cursor).unwrap();
//! assert_eq!(bitmap.width(), 8);
//! assert_eq!(bitmap.get(0, 0), maze.pixel(0, 0));
//! ```

#![deny(missing_docs)]

mod bit;
mod decode;
mod encode;
mod flood;

#[cfg(feature = "fuzz")]
pub mod fuzz;

pub use flood::{Cell, FloodFill, DEFAULT_BATCH};

use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::ops::Range;
use std::str::Utf8Error;

const MAGIC: [u8; 2] = [b'P', b'1'];

/// Default number of cells per side of the generated maze
pub const SIZE: usize = 1000;

/// Biggest accepted number of cells per side, keeps every neighbour coordinate far from `i32` bounds
pub const MAX_SIZE: usize = 32_768;

/// Weight of the x coordinate in the top (south wall) plane
pub const X_TOP: i32 = 563;
/// Weight of the y coordinate in the top (south wall) plane
pub const Y_TOP: i32 = 761;
/// Weight of the x coordinate in the left (west wall) plane
pub const X_LEFT: i32 = 1409;
/// Weight of the y coordinate in the left (west wall) plane
pub const Y_LEFT: i32 = 397;

/// The parity of `n`: 1 if its two's complement representation has an odd number of set bits
pub fn parity(n: i32) -> u8 {
    (n.count_ones() & 1) as u8
}

/// Parity of the top plane at `(x, y)`, the wall south of the cell
pub fn top(x: i32, y: i32) -> u8 {
    u8::from(Plane::TOP.at(x, y))
}

/// Parity of the left plane at `(x, y)`, the wall west of the cell
pub fn left(x: i32, y: i32) -> u8 {
    u8::from(Plane::LEFT.at(x, y))
}

/// Coordinate weights of a parity plane
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Plane {
    /// weight of the x coordinate
    pub x: i32,
    /// weight of the y coordinate
    pub y: i32,
}

impl Plane {
    /// The plane of south walls
    pub const TOP: Plane = Plane {
        x: X_TOP,
        y: Y_TOP,
    };

    /// The plane of west walls
    pub const LEFT: Plane = Plane {
        x: X_LEFT,
        y: Y_LEFT,
    };

    /// Parity of `x * self.x + y * self.y`, with 32 bits wrapping arithmetic
    pub fn at(&self, x: i32, y: i32) -> bool {
        let sum = x.wrapping_mul(self.x).wrapping_add(y.wrapping_mul(self.y));
        parity(sum) == 1
    }
}

/// A parity maze of `size` x `size` cells centered on the origin
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Maze {
    size: usize,
    top: Plane,
    left: Plane,
}

/// The header of a plain PBM image
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PbmHeader {
    /// width in pixels
    pub width: usize,
    /// height in pixels
    pub height: usize,
}

/// A monochrome image, `true` is ink (`1` in PBM)
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Bitmap {
    rows: Vec<Vec<bool>>,
}

/// Possible errors while generating or reading a PBM
#[derive(Debug)]
pub enum MazeError {
    /// The underlying writer or reader failed
    Io(std::io::Error),
    /// Magic number or dimensions are not a valid plain PBM header
    Header,
    /// Pixel data is not made of `0` and `1` or is truncated
    Data,
    /// Width and height are zero, odd for a maze, or too big
    Size(usize, usize),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Io(e) => write!(f, "io error: {}", e),
            MazeError::Header => write!(f, "invalid plain pbm header"),
            MazeError::Data => write!(f, "invalid or truncated pixel data"),
            MazeError::Size(width, height) => write!(f, "invalid size {}x{}", width, height),
        }
    }
}

impl Error for MazeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MazeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(e: std::io::Error) -> Self {
        MazeError::Io(e)
    }
}

impl From<ParseIntError> for MazeError {
    fn from(_: ParseIntError) -> Self {
        MazeError::Header
    }
}

impl From<Utf8Error> for MazeError {
    fn from(_: Utf8Error) -> Self {
        MazeError::Header
    }
}

impl Default for Maze {
    fn default() -> Self {
        Maze {
            size: SIZE,
            top: Plane::TOP,
            left: Plane::LEFT,
        }
    }
}

impl Maze {
    /// Creates a maze of `size` x `size` cells, `size` must be even and not bigger than [MAX_SIZE]
    pub fn new(size: usize, top: Plane, left: Plane) -> Result<Maze, MazeError> {
        if size == 0 || size % 2 != 0 || size > MAX_SIZE {
            let side = size.saturating_mul(2);
            return Err(MazeError::Size(side, side));
        }
        Ok(Maze { size, top, left })
    }

    /// Number of cells per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of pixels per side of the rendered image
    pub fn side(&self) -> usize {
        self.size * 2
    }

    /// The coordinates covered on both axis, `[-size/2, size/2)`
    pub fn range(&self) -> Range<i32> {
        let half = (self.size / 2) as i32;
        -half..half
    }

    /// Wall between `(x, y)` and `(x, y - 1)`
    pub fn wall_south(&self, x: i32, y: i32) -> bool {
        self.top.at(x, y)
    }

    /// Wall between `(x, y)` and `(x - 1, y)`
    pub fn wall_west(&self, x: i32, y: i32) -> bool {
        self.left.at(x, y)
    }

    /// Wall between `(x, y)` and `(x, y + 1)`
    pub fn wall_north(&self, x: i32, y: i32) -> bool {
        self.top.at(x, y.wrapping_add(1))
    }

    /// Wall between `(x, y)` and `(x + 1, y)`
    pub fn wall_east(&self, x: i32, y: i32) -> bool {
        self.left.at(x.wrapping_add(1), y)
    }

    /// true if any wall touches the south west corner of the cell
    pub fn post(&self, x: i32, y: i32) -> bool {
        self.top.at(x, y)
            || self.left.at(x, y)
            || self.top.at(x.wrapping_sub(1), y)
            || self.left.at(x, y.wrapping_sub(1))
    }

    /// true if the cell has walls on all four sides
    pub fn enclosed(&self, x: i32, y: i32) -> bool {
        self.wall_west(x, y)
            && self.wall_south(x, y)
            && self.wall_east(x, y)
            && self.wall_north(x, y)
    }

    /// The two pixels of the cell on the top half-row: post and south wall
    pub fn top_pair(&self, x: i32, y: i32) -> [bool; 2] {
        [self.post(x, y), self.wall_south(x, y)]
    }

    /// The two pixels of the cell on the left half-row: west wall and enclosure
    pub fn left_pair(&self, x: i32, y: i32) -> [bool; 2] {
        [self.wall_west(x, y), self.enclosed(x, y)]
    }

    /// The pixel at `col`, `row` of the rendered image, both must be less than [Maze::side]
    pub fn pixel(&self, col: usize, row: usize) -> bool {
        let origin = self.range().start;
        let x = origin + (col / 2) as i32;
        let y = origin + (row / 2) as i32;
        let pair = if row % 2 == 0 {
            self.top_pair(x, y)
        } else {
            self.left_pair(x, y)
        };
        pair[col % 2]
    }
}

impl Bitmap {
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The pixel at row `i` and column `j`, panics if out of bounds
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.rows[i][j]
    }

    /// All the rows, top to bottom
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}

/// check dimensions of a decoded image
fn check_size(width: usize, height: usize) -> Result<(), MazeError> {
    let max = MAX_SIZE * 2;
    if width == 0 || height == 0 || width > max || height > max {
        return Err(MazeError::Size(width, height));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::*;
    use rand::Rng;

    fn naive_parity(n: i32) -> u8 {
        ((0..32).filter(|i| (n >> i) & 1 == 1).count() % 2) as u8
    }

    #[test]
    fn test_parity() {
        assert_eq!(parity(0), 0);
        assert_eq!(parity(1), 1);
        assert_eq!(parity(3), 0);
        assert_eq!(parity(563), 1);
        assert_eq!(parity(1409), 0);
        assert_eq!(parity(-1), 0);
        assert_eq!(parity(i32::MIN), 1);
        assert_eq!(parity(i32::MAX), 1);
    }

    #[test]
    fn test_parity_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let x: i32 = rng.gen();
            let y: i32 = rng.gen();
            let t = top(x, y);
            let l = left(x, y);
            assert!(t <= 1 && l <= 1);
            assert_eq!(t, top(x, y));
            assert_eq!(l, left(x, y));
            assert_eq!(
                t,
                naive_parity(x.wrapping_mul(563).wrapping_add(y.wrapping_mul(761)))
            );
            assert_eq!(
                l,
                naive_parity(x.wrapping_mul(1409).wrapping_add(y.wrapping_mul(397)))
            );
        }
    }

    #[test]
    fn test_planes() {
        assert_eq!(top(0, 0), 0);
        assert_eq!(left(0, 0), 0);
        assert_eq!(top(1, 0), 1);
        assert_eq!(top(0, 1), 1);
        assert_eq!(left(1, 0), 0);
        assert_eq!(left(0, 1), 1);
        assert_eq!(top(-1, 0), 0);
        assert_eq!(left(0, -1), 0);
    }

    #[test]
    fn test_new() {
        assert!(Maze::new(2, Plane::TOP, Plane::LEFT).is_ok());
        assert!(Maze::new(MAX_SIZE, Plane::TOP, Plane::LEFT).is_ok());
        assert!(matches!(
            Maze::new(0, Plane::TOP, Plane::LEFT),
            Err(MazeError::Size(0, 0))
        ));
        assert!(matches!(
            Maze::new(3, Plane::TOP, Plane::LEFT),
            Err(MazeError::Size(6, 6))
        ));
        assert!(Maze::new(MAX_SIZE + 2, Plane::TOP, Plane::LEFT).is_err());
        assert!(Maze::new(usize::MAX, Plane::TOP, Plane::LEFT).is_err());

        let maze = Maze::default();
        assert_eq!(maze.size(), 1000);
        assert_eq!(maze.side(), 2000);
        assert_eq!(maze.range(), -500..500);
    }

    #[test]
    fn test_walls() {
        let maze = Maze::default();
        assert_eq!(maze.top_pair(0, 0), [false, false]);
        assert_eq!(maze.left_pair(0, 0), [false, false]);
        assert!(maze.enclosed(2, 1));
        assert!(maze.enclosed(5, -3));
        assert!(!maze.enclosed(0, 0));
        for y in -20..20 {
            for x in -20..20 {
                assert_eq!(maze.wall_north(x, y), maze.wall_south(x, y + 1));
                assert_eq!(maze.wall_east(x, y), maze.wall_west(x + 1, y));
                if maze.wall_south(x, y) || maze.wall_west(x, y) {
                    assert!(maze.post(x, y));
                }
                if maze.enclosed(x, y) {
                    assert!(maze.post(x, y));
                }
            }
        }
    }

    #[test]
    fn test_pixel() {
        // P1 4 4 / 1 0 1 0 / 0 0 0 0 / 1 0 0 0 / 1 0 0 0
        let maze = Maze::new(2, Plane::TOP, Plane::LEFT).unwrap();
        let expected = [
            [true, false, true, false],
            [false, false, false, false],
            [true, false, false, false],
            [true, false, false, false],
        ];
        for (row, line) in expected.iter().enumerate() {
            for (col, value) in line.iter().enumerate() {
                assert_eq!(maze.pixel(col, row), *value, "col {} row {}", col, row);
            }
        }
    }

    #[test]
    fn test_check_size() {
        assert!(check_size(1, 1).is_ok());
        assert!(check_size(0, 1).is_err());
        assert!(check_size(1, 0).is_err());
        assert!(check_size(MAX_SIZE * 2, 1).is_ok());
        assert!(check_size(MAX_SIZE * 2 + 1, 1).is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(MazeError::Size(3, 4).to_string(), "invalid size 3x4");
        assert_eq!(MazeError::Header.to_string(), "invalid plain pbm header");
        let e: MazeError = "x".parse::<usize>().unwrap_err().into();
        assert!(matches!(e, MazeError::Header));
    }
}
