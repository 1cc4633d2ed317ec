use crate::bit::BitWriter;
use crate::{Maze, MazeError, PbmHeader, MAGIC};
use log::debug;
use std::io::Write;

impl Maze {
    /// Write the maze as a plain PBM to a Write type, such a File
    /// every pixel is written on its own, wrap unbuffered writers in a [BufWriter](std::io::BufWriter)
    pub fn write<T: Write>(&self, mut to: T) -> Result<(), MazeError> {
        let header = PbmHeader {
            width: self.side(),
            height: self.side(),
        };
        debug!("writing {}x{} maze", header.width, header.height);

        header.write(&mut to)?;

        let mut writer = BitWriter::new(&mut to);

        for y in self.range() {
            writer.new_line();
            for x in self.range() {
                writer.write(self.top_pair(x, y))?;
            }
            writer.new_line();
            for x in self.range() {
                writer.write(self.left_pair(x, y))?;
            }
        }
        writer.flush()?;

        debug!("maze written");
        Ok(())
    }
}

impl PbmHeader {
    /// Write magic number, width and height, without the trailing newline
    pub fn write<T: Write>(&self, to: &mut T) -> Result<(), MazeError> {
        to.write_all(&MAGIC)?;
        write!(to, "\n{} {}", self.width, self.height)?;
        Ok(())
    }
}
