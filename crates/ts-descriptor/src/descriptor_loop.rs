use std::io;
use std::ops::Deref;

use byteorder::{BigEndian, ReadBytesExt};
use bytes::Bytes;
use bytes_util::BytesCursorExt;
use tracing::{debug, trace};

use crate::descriptor::{Descriptor, demux_payload};
use crate::options::ParseOptions;
use crate::{DescriptorError, DescriptorTag, Result};

/// Mask for the 12-bit loop length; the top 4 bits of the field are reserved.
const LOOP_LENGTH_MASK: u16 = 0x0FFF;

/// Descriptors of one loop, in stream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorList(Vec<Descriptor>);

impl DescriptorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// First descriptor with the given tag.
    pub fn find(&self, tag: impl Into<DescriptorTag>) -> Option<&Descriptor> {
        let tag = tag.into();
        self.0.iter().find(|descriptor| descriptor.kind() == tag)
    }

    /// All descriptors with the given tag, in stream order.
    pub fn filter(&self, tag: impl Into<DescriptorTag>) -> impl Iterator<Item = &Descriptor> {
        let tag = tag.into();
        self.0.iter().filter(move |descriptor| descriptor.kind() == tag)
    }

    /// Unwraps the list into its descriptors.
    pub fn into_vec(self) -> Vec<Descriptor> {
        self.0
    }
}

impl Deref for DescriptorList {
    type Target = [Descriptor];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Descriptor>> for DescriptorList {
    fn from(value: Vec<Descriptor>) -> Self {
        DescriptorList(value)
    }
}

impl IntoIterator for DescriptorList {
    type Item = Descriptor;
    type IntoIter = std::vec::IntoIter<Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DescriptorList {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parse a descriptor loop region with the default options.
///
/// See [`parse_descriptors_with_options`].
pub fn parse_descriptors(data: Bytes) -> Result<(DescriptorList, usize)> {
    parse_descriptors_with_options(data, &ParseOptions::default())
}

/// Parse every descriptor in `data`, which must hold exactly the bytes
/// covered by the loop's length field.
///
/// Returns the descriptors and the number of bytes consumed, which is always
/// `data.len()` on success. Each decoder only sees its own declared payload
/// and the cursor then moves to the end of it, so one malformed payload
/// cannot shift or leak into the descriptors after it. A single dangling
/// byte at the end, too short for a header, is ignored.
///
/// Fails with [`DescriptorError::TruncatedPayload`] if a declared payload
/// runs past the end of `data`. No partial list is returned in that case.
pub fn parse_descriptors_with_options(
    data: Bytes,
    options: &ParseOptions,
) -> Result<(DescriptorList, usize)> {
    let total = data.len();
    let mut reader = io::Cursor::new(data);
    let mut descriptors = Vec::new();

    while reader.remaining() >= 2 {
        let tag = reader.read_u8()?;
        let length = reader.read_u8()?;
        let offset = reader.position() as usize;
        let available = reader.remaining();

        if length as usize > available {
            return Err(DescriptorError::TruncatedPayload {
                tag,
                offset,
                declared: length,
                available,
            });
        }

        let payload = demux_payload(tag, reader.extract_bytes(length as usize)?, options)?;
        trace!(tag = format_args!("{tag:#04x}"), offset, length, "Parsed descriptor");

        descriptors.push(Descriptor {
            tag,
            length,
            payload,
        });
    }

    if reader.remaining() > 0 {
        debug!(
            offset = reader.position(),
            "Ignoring dangling byte at end of descriptor loop"
        );
    }

    Ok((DescriptorList::from(descriptors), total))
}

/// Read a length-prefixed descriptor loop with the default options.
///
/// See [`read_descriptor_loop_with_options`].
pub fn read_descriptor_loop(reader: &mut io::Cursor<Bytes>) -> Result<DescriptorList> {
    read_descriptor_loop_with_options(reader, &ParseOptions::default())
}

/// Read a descriptor loop preceded by its 16-bit `reserved(4) + length(12)`
/// field from `reader`.
///
/// On success the cursor sits right after the loop, so the caller can carry
/// on with whatever follows it in the table. On error the cursor is left
/// where it was.
pub fn read_descriptor_loop_with_options(
    reader: &mut io::Cursor<Bytes>,
    options: &ParseOptions,
) -> Result<DescriptorList> {
    let start = reader.position();
    let result = read_prefixed_loop(reader, options);
    if result.is_err() {
        reader.set_position(start);
    }
    result
}

fn read_prefixed_loop(
    reader: &mut io::Cursor<Bytes>,
    options: &ParseOptions,
) -> Result<DescriptorList> {
    let declared = reader.read_u16::<BigEndian>()? & LOOP_LENGTH_MASK;
    let available = reader.remaining();
    if declared as usize > available {
        return Err(DescriptorError::TruncatedLoop {
            declared,
            available,
        });
    }

    let region = reader.extract_bytes(declared as usize)?;
    let (descriptors, _) = parse_descriptors_with_options(region, options)?;
    Ok(descriptors)
}
