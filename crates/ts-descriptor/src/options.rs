/// Handling of subtitling and teletext payloads whose length is not a whole
/// number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderMode {
    /// Decode `length / item_size` items and drop the leftover bytes.
    #[default]
    Ignore,
    /// Fail with [`DescriptorError::InvalidGroupLength`](crate::DescriptorError::InvalidGroupLength).
    Reject,
}

/// Handling of teletext page numbers whose BCD nibbles are not decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeletextPageMode {
    /// Combine the nibbles as `tens * 10 + ones` without checking them, so
    /// `0x1A` decodes to `20`.
    #[default]
    Arithmetic,
    /// Fail with [`DescriptorError::InvalidBcdPage`](crate::DescriptorError::InvalidBcdPage)
    /// when either nibble is above 9.
    Reject,
}

/// Options controlling how lenient the descriptor decoders are.
///
/// The defaults never reject a payload that has a well-formed length; they
/// only change how odd field values are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// See [`RemainderMode`].
    pub remainder_mode: RemainderMode,
    /// See [`TeletextPageMode`].
    pub teletext_page_mode: TeletextPageMode,
}

impl ParseOptions {
    /// Creates the default, lenient options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject both partial repeating groups and non-decimal
    /// teletext pages.
    pub fn strict() -> Self {
        Self {
            remainder_mode: RemainderMode::Reject,
            teletext_page_mode: TeletextPageMode::Reject,
        }
    }

    /// Sets the repeating-group remainder handling.
    pub fn with_remainder_mode(mut self, mode: RemainderMode) -> Self {
        self.remainder_mode = mode;
        self
    }

    /// Sets the teletext page number handling.
    pub fn with_teletext_page_mode(mut self, mode: TeletextPageMode) -> Self {
        self.teletext_page_mode = mode;
        self
    }
}
