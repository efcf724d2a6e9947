use std::io;

use thiserror::Error;

/// Errors that can occur while parsing a descriptor loop.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// The buffer ended before a descriptor's declared payload could be read.
    ///
    /// This aborts the whole loop: the position of everything after the
    /// descriptor is unknown.
    #[error(
        "truncated payload for descriptor 0x{tag:02X} at offset {offset}: declared {declared} bytes, {available} available"
    )]
    TruncatedPayload {
        /// Tag of the descriptor being read.
        tag: u8,
        /// Offset of the payload from the start of the loop region.
        offset: usize,
        /// Payload length declared in the descriptor header.
        declared: u8,
        /// Bytes available in the loop region from `offset` onward.
        available: usize,
    },

    /// The loop's 12-bit length field points past the end of the buffer.
    ///
    /// The same truncation as [`DescriptorError::TruncatedPayload`], one level
    /// up: only [`read_descriptor_loop`](crate::read_descriptor_loop) sees the
    /// length field, so only it reports this.
    #[error("truncated descriptor loop: declared {declared} bytes, {available} available")]
    TruncatedLoop {
        /// Declared `descriptors_loop_length`.
        declared: u16,
        /// Bytes available after the length field.
        available: usize,
    },

    /// A repeating-group descriptor whose length is not a multiple of its
    /// item size. Only returned with [`RemainderMode::Reject`](crate::RemainderMode::Reject).
    #[error("descriptor 0x{tag:02X} length {length} is not a multiple of item size {item_size}")]
    InvalidGroupLength {
        /// Tag of the descriptor.
        tag: u8,
        /// Declared payload length.
        length: u8,
        /// Size of one repeating item.
        item_size: u8,
    },

    /// A teletext page number with a nibble outside `0..=9`. Only returned
    /// with [`TeletextPageMode::Reject`](crate::TeletextPageMode::Reject).
    #[error("invalid BCD teletext page number 0x{0:02X}")]
    InvalidBcdPage(u8),

    /// An I/O error from the underlying reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DescriptorError {
    /// Returns `true` for the truncation errors that make the rest of the
    /// enclosing table unreadable.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DescriptorError::TruncatedPayload { .. } | DescriptorError::TruncatedLoop { .. }
        )
    }
}
