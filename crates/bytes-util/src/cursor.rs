use std::io;

use bytes::Bytes;

/// Zero-copy extraction helpers for `io::Cursor<Bytes>`.
pub trait BytesCursorExt {
    /// Extracts the next `size` bytes and advances the cursor.
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] when fewer than `size`
    /// bytes remain; the cursor is left untouched in that case.
    fn extract_bytes(&mut self, size: usize) -> io::Result<Bytes>;

    /// Number of bytes left after the current position.
    fn remaining(&self) -> usize;
}

impl BytesCursorExt for io::Cursor<Bytes> {
    fn extract_bytes(&mut self, size: usize) -> io::Result<Bytes> {
        if size == 0 {
            return Ok(Bytes::new());
        }

        let position = self.position() as usize;
        if size > self.remaining() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "not enough bytes: requested {size}, {} remaining",
                    self.remaining()
                ),
            ));
        }

        let slice = self.get_ref().slice(position..position + size);
        self.set_position((position + size) as u64);
        Ok(slice)
    }

    fn remaining(&self) -> usize {
        self.get_ref()
            .len()
            .saturating_sub(self.position() as usize)
    }
}

impl<C: BytesCursorExt + ?Sized> BytesCursorExt for &mut C {
    fn extract_bytes(&mut self, size: usize) -> io::Result<Bytes> {
        (**self).extract_bytes(size)
    }

    fn remaining(&self) -> usize {
        (**self).remaining()
    }
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bytes() {
        let mut cursor = io::Cursor::new(Bytes::from_static(b"provider"));
        let head = cursor.extract_bytes(3).unwrap();
        assert_eq!(&head[..], b"pro");
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), 5);

        let err = cursor.extract_bytes(6).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(cursor.position(), 3);

        assert_eq!(&cursor.extract_bytes(5).unwrap()[..], b"vider");
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.extract_bytes(0).unwrap().is_empty());
    }

    #[test]
    fn test_position_past_end() {
        let mut cursor = io::Cursor::new(Bytes::from_static(b"ab"));
        cursor.set_position(10);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.extract_bytes(1).is_err());
        assert!(cursor.extract_bytes(0).unwrap().is_empty());
    }

    #[test]
    fn test_through_mut_ref() {
        fn take_two<C: BytesCursorExt>(mut cursor: C) -> io::Result<Bytes> {
            cursor.extract_bytes(2)
        }

        let mut cursor = io::Cursor::new(Bytes::from_static(b"abcd"));
        assert_eq!(&take_two(&mut cursor).unwrap()[..], b"ab");
        assert_eq!(cursor.position(), 2);
    }
}
