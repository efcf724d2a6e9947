use std::borrow::Cow;

use bytes::Bytes;

use super::{DescriptorDemux, PayloadReader, read_language, read_prefixed_bytes};
use crate::language::LanguageCode;
use crate::options::ParseOptions;
use crate::tag::TAG_SHORT_EVENT;
use crate::{Result, text};

/// Short event descriptor (tag 0x4D).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortEventDescriptor {
    pub language: LanguageCode,
    pub event_name: Bytes,
    pub text: Bytes,
}

impl ShortEventDescriptor {
    pub fn event_name_lossy(&self) -> Cow<'_, str> {
        text::decode_lossy(&self.event_name)
    }

    pub fn text_lossy(&self) -> Cow<'_, str> {
        text::decode_lossy(&self.text)
    }
}

impl DescriptorDemux for ShortEventDescriptor {
    const TAG: u8 = TAG_SHORT_EVENT;

    fn demux(reader: &mut PayloadReader, length: u8, _options: &ParseOptions) -> Result<Self> {
        let language = read_language(reader)?;
        let event_name = read_prefixed_bytes(reader, length)?;
        let text = read_prefixed_bytes(reader, length)?;
        Ok(ShortEventDescriptor {
            language,
            event_name,
            text,
        })
    }
}
