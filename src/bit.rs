use std::io::{self, Read};

/// Bitwise reader of plain PBM content, skipping whitespace and `#` comments
pub struct BitReader<'a> {
    bytes: io::Bytes<&'a mut dyn io::Read>,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader that reads from a given reader
    pub fn new(reader: &'a mut dyn io::Read) -> BitReader<'a> {
        BitReader {
            bytes: reader.bytes(),
        }
    }

    /// Next byte, a comment is returned as a single newline
    fn next_byte(&mut self) -> Result<Option<u8>, io::Error> {
        match self.bytes.next().transpose()? {
            Some(b'#') => {
                while let Some(byte) = self.bytes.next().transpose()? {
                    if byte == b'\n' {
                        break;
                    }
                }
                Ok(Some(b'\n'))
            }
            other => Ok(other),
        }
    }

    /// Next byte that is not whitespace
    fn next_significant(&mut self) -> Result<Option<u8>, io::Error> {
        while let Some(byte) = self.next_byte()? {
            if !byte.is_ascii_whitespace() {
                return Ok(Some(byte));
            }
        }
        Ok(None)
    }

    /// Read a whitespace delimited token, `None` at the end of the stream
    pub fn token(&mut self) -> Result<Option<Vec<u8>>, io::Error> {
        let mut token = match self.next_significant()? {
            Some(byte) => vec![byte],
            None => return Ok(None),
        };
        while let Some(byte) = self.next_byte()? {
            if byte.is_ascii_whitespace() {
                break;
            }
            token.push(byte);
        }
        Ok(Some(token))
    }

    /// Read a single `0` or `1` digit, digits don't need separators
    pub fn read(&mut self) -> Result<bool, io::Error> {
        match self.next_significant()? {
            Some(b'0') => Ok(false),
            Some(b'1') => Ok(true),
            Some(_) => Err(io::Error::new(io::ErrorKind::InvalidData, "expected 0 or 1")),
            None => Err(io::ErrorKind::UnexpectedEof.into()),
        }
    }

    /// true if only whitespace and comments are left, consumes the next significant byte
    pub fn is_exhausted(&mut self) -> Result<bool, io::Error> {
        Ok(self.next_significant()?.is_none())
    }
}

/// Writer of bit pairs as ASCII digits
pub struct BitWriter<'a> {
    separator: u8,
    writer: &'a mut dyn io::Write,
}

impl<'a> BitWriter<'a> {
    /// Create a new BitWriter that writes to a given writer, the first pair starts a new line
    pub fn new(writer: &'a mut dyn io::Write) -> BitWriter<'a> {
        BitWriter {
            separator: b'\n',
            writer,
        }
    }

    /// The next pair is preceded by a newline instead of a space
    pub fn new_line(&mut self) {
        self.separator = b'\n';
    }

    /// Write a pair of bits as `a b`, returns the number of bytes written
    pub fn write(&mut self, pair: [bool; 2]) -> Result<usize, io::Error> {
        let buffer = [self.separator, digit(pair[0]), b' ', digit(pair[1])];
        self.writer.write_all(&buffer)?;
        self.separator = b' ';
        Ok(buffer.len())
    }

    /// terminate the content with a newline and flush the underlying writer
    pub fn flush(&mut self) -> Result<usize, io::Error> {
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(1)
    }
}

fn digit(bit: bool) -> u8 {
    if bit {
        b'1'
    } else {
        b'0'
    }
}
