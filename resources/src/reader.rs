use std::io::{self, Cursor, Read, Seek, SeekFrom};

pub struct BinaryDataReader {
    cursor: Cursor<Vec<u8>>,
}

impl BinaryDataReader {
    pub fn new(data: Vec<u8>) -> Self {
        BinaryDataReader {
            cursor: Cursor::new(data),
        }
    }

    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    // Skip `count` bytes, failing if that runs past the end
    pub fn skip(&mut self, count: u64) -> io::Result<()> {
        let target = self.cursor.position() + count;
        if target > self.len() as u64 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("cannot skip {count} bytes at offset {}", self.position()),
            ));
        }
        self.cursor.seek(SeekFrom::Start(target))?;
        Ok(())
    }

    // Read a single u8
    pub fn read_u8(&mut self) -> io::Result<u8> {
        let mut buffer = [0u8; 1];
        self.cursor.read_exact(&mut buffer)?;
        Ok(buffer[0])
    }

    // Read a single u16 assuming little-endian byte order
    pub fn read_u16_le(&mut self) -> io::Result<u16> {
        let mut buffer = [0u8; 2];
        self.cursor.read_exact(&mut buffer)?;
        Ok(u16::from_le_bytes(buffer))
    }

    // Read a single u32 assuming little-endian byte order
    pub fn read_u32_le(&mut self) -> io::Result<u32> {
        let mut buffer = [0u8; 4];
        self.cursor.read_exact(&mut buffer)?;
        Ok(u32::from_le_bytes(buffer))
    }

    // Read a single i32 assuming little-endian byte order
    pub fn read_i32_le(&mut self) -> io::Result<i32> {
        let mut buffer = [0u8; 4];
        self.cursor.read_exact(&mut buffer)?;
        Ok(i32::from_le_bytes(buffer))
    }
}
