use std::borrow::Cow;

use bytes::Bytes;

use super::{DescriptorDemux, PayloadReader, remaining_payload};
use crate::options::ParseOptions;
use crate::tag::TAG_NETWORK_NAME;
use crate::{Result, text};

/// Network name descriptor (tag 0x40).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkNameDescriptor {
    /// Raw name bytes, character table selector included.
    pub name: Bytes,
}

impl NetworkNameDescriptor {
    pub fn name_lossy(&self) -> Cow<'_, str> {
        text::decode_lossy(&self.name)
    }
}

impl DescriptorDemux for NetworkNameDescriptor {
    const TAG: u8 = TAG_NETWORK_NAME;

    fn demux(reader: &mut PayloadReader, length: u8, _options: &ParseOptions) -> Result<Self> {
        let name = reader.extract_bytes(remaining_payload(reader, length))?;
        Ok(NetworkNameDescriptor { name })
    }
}
