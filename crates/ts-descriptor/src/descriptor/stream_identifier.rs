use super::{DescriptorDemux, PayloadReader, read_u8};
use crate::options::ParseOptions;
use crate::tag::TAG_STREAM_IDENTIFIER;
use crate::Result;

/// Stream identifier descriptor (tag 0x52).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamIdentifierDescriptor {
    pub component_tag: u8,
}

impl DescriptorDemux for StreamIdentifierDescriptor {
    const TAG: u8 = TAG_STREAM_IDENTIFIER;

    fn demux(reader: &mut PayloadReader, _length: u8, _options: &ParseOptions) -> Result<Self> {
        Ok(StreamIdentifierDescriptor {
            component_tag: read_u8(reader)?,
        })
    }
}
