use std::io::{self, Read};

use bytes::Bytes;

use crate::BytesCursorExt;

/// A forward-only reader for big-endian bit fields.
///
/// Bits are consumed most significant bit first. Byte-aligned reads take a
/// fast path straight through the inner reader; unaligned reads are
/// assembled bit by bit from a one byte buffer.
#[derive(Debug)]
pub struct BitReader<T> {
    data: T,
    current_byte: u8,
    // Bits of `current_byte` already consumed, 0 means a fresh byte is needed.
    bit_pos: u8,
    bits_read: u64,
}

impl<T: io::Read> BitReader<T> {
    /// Creates a new `BitReader` positioned at the first bit of `data`.
    pub fn new(data: T) -> Self {
        Self {
            data,
            current_byte: 0,
            bit_pos: 0,
            bits_read: 0,
        }
    }

    /// Reads a single bit.
    pub fn read_bit(&mut self) -> io::Result<bool> {
        if self.bit_pos == 0 {
            self.current_byte = self.next_byte()?;
        }

        let bit = (self.current_byte >> (7 - self.bit_pos)) & 0x01;
        self.bit_pos = (self.bit_pos + 1) % 8;
        self.bits_read += 1;

        Ok(bit == 1)
    }

    /// Reads `count` bits and returns them right-aligned in a `u64`.
    ///
    /// `count` must be at most 64. Reading zero bits returns `0`.
    pub fn read_bits(&mut self, count: u8) -> io::Result<u64> {
        if count > 64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot read more than 64 bits at once",
            ));
        }

        let mut value = 0u64;
        let mut remaining = count;
        while remaining > 0 {
            if self.bit_pos == 0 && remaining >= 8 {
                value = (value << 8) | self.next_byte()? as u64;
                self.bits_read += 8;
                remaining -= 8;
            } else {
                value = (value << 1) | self.read_bit()? as u64;
                remaining -= 1;
            }
        }

        Ok(value)
    }

    /// Skips `count` bits.
    pub fn seek_bits(&mut self, count: u64) -> io::Result<()> {
        let mut remaining = count;
        while remaining > 0 && !self.is_aligned() {
            self.read_bit()?;
            remaining -= 1;
        }

        let whole_bytes = remaining / 8;
        if whole_bytes > 0 {
            let skipped = io::copy(&mut (&mut self.data).take(whole_bytes), &mut io::sink())?;
            self.bits_read += skipped * 8;
            if skipped < whole_bytes {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "reached end of data while skipping bits",
                ));
            }
        }

        for _ in 0..remaining % 8 {
            self.read_bit()?;
        }

        Ok(())
    }

    fn next_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.data.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

impl<T> BitReader<T> {
    /// Returns `true` when the next read starts on a byte boundary.
    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.bit_pos == 0
    }

    /// Number of bits consumed since the reader was created.
    #[inline]
    pub fn bit_offset(&self) -> u64 {
        self.bits_read
    }

    /// Number of whole bytes consumed since the reader was created.
    #[inline]
    pub fn byte_offset(&self) -> u64 {
        self.bits_read / 8
    }
}

impl<C: BytesCursorExt> BitReader<C> {
    /// Extracts the next `size` bytes without copying.
    ///
    /// The reader must be byte aligned.
    pub fn extract_bytes(&mut self, size: usize) -> io::Result<Bytes> {
        if !self.is_aligned() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot extract bytes from an unaligned bit reader",
            ));
        }

        let bytes = self.data.extract_bytes(size)?;
        self.bits_read += size as u64 * 8;
        Ok(bytes)
    }
}

impl<T: io::Read> io::Read for BitReader<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.is_aligned() {
            let read = self.data.read(buf)?;
            self.bits_read += read as u64 * 8;
            return Ok(read);
        }

        for (idx, byte) in buf.iter_mut().enumerate() {
            match self.read_bits(8) {
                Ok(value) => *byte = value as u8,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(idx),
                Err(err) => return Err(err),
            }
        }

        Ok(buf.len())
    }
}
