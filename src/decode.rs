use crate::bit::BitReader;
use crate::{check_size, Bitmap, MazeError, PbmHeader, MAGIC};
use std::io::{self, Read};

impl Bitmap {
    /// Read a plain PBM from a Read type, such a File
    /// note that File read are not buffered and may be slow, see [Read](std::io::Read) Trait
    pub fn read<T: Read>(mut from: T) -> Result<Self, MazeError> {
        let mut reader = BitReader::new(&mut from);
        let header = PbmHeader::read_from(&mut reader)?;

        let mut rows = Vec::with_capacity(header.height.min(1024));
        for _ in 0..header.height {
            let mut row = Vec::with_capacity(header.width.min(1024));
            for _ in 0..header.width {
                row.push(reader.read().map_err(data_error)?);
            }
            rows.push(row);
        }

        if !reader.is_exhausted()? {
            return Err(MazeError::Data);
        }

        Ok(Bitmap { rows })
    }
}

impl PbmHeader {
    /// read the PbmHeader from read Trait `T`
    /// returns `MazeError::Size` for zero or too big dimensions, see `check_size`
    /// and `MazeError::Header` for any other error
    pub fn read<T: Read>(mut from: T) -> Result<Self, MazeError> {
        let mut reader = BitReader::new(&mut from);
        PbmHeader::read_from(&mut reader)
    }

    fn read_from(reader: &mut BitReader) -> Result<Self, MazeError> {
        match reader.token()? {
            Some(magic) if magic[..] == MAGIC[..] => {}
            _ => return Err(MazeError::Header),
        }
        let width = read_dimension(reader)?;
        let height = read_dimension(reader)?;
        check_size(width, height)?;

        Ok(PbmHeader { width, height })
    }
}

fn read_dimension(reader: &mut BitReader) -> Result<usize, MazeError> {
    let token = reader.token()?.ok_or(MazeError::Header)?;
    Ok(std::str::from_utf8(&token)?.parse()?)
}

/// io failures stay as they are, malformed or missing digits are data errors
fn data_error(e: io::Error) -> MazeError {
    match e.kind() {
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => MazeError::Data,
        _ => MazeError::Io(e),
    }
}
