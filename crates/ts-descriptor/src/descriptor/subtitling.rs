use byteorder::{BigEndian, ReadBytesExt};

use super::{DescriptorDemux, PayloadReader, group_count, read_language, read_u8};
use crate::language::LanguageCode;
use crate::options::ParseOptions;
use crate::tag::TAG_SUBTITLING;
use crate::Result;

const ITEM_SIZE: u8 = 8;

/// Subtitling type coding (EN 300 468 component type for stream content 0x03).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitlingType {
    EbuTeletext,
    AssociatedEbuTeletext,
    VbiData,
    /// DVB subtitles, 0x10-0x15 (aspect ratio in the low nibble).
    Normal(u8),
    /// DVB subtitles for the hard of hearing, 0x20-0x25.
    HardOfHearing(u8),
    OpenSignLanguage,
    ClosedSignLanguage,
    Other(u8),
}

impl From<u8> for SubtitlingType {
    fn from(value: u8) -> Self {
        match value {
            0x01 => SubtitlingType::EbuTeletext,
            0x02 => SubtitlingType::AssociatedEbuTeletext,
            0x03 => SubtitlingType::VbiData,
            0x10..=0x15 => SubtitlingType::Normal(value),
            0x20..=0x25 => SubtitlingType::HardOfHearing(value),
            0x30 => SubtitlingType::OpenSignLanguage,
            0x31 => SubtitlingType::ClosedSignLanguage,
            v => SubtitlingType::Other(v),
        }
    }
}

/// One language/page group of a subtitling descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtitlingItem {
    pub language: LanguageCode,
    pub subtitling_type: u8,
    pub composition_page_id: u16,
    pub ancillary_page_id: u16,
}

impl SubtitlingItem {
    pub fn kind(&self) -> SubtitlingType {
        SubtitlingType::from(self.subtitling_type)
    }
}

/// Subtitling descriptor (tag 0x59), `length / 8` items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitlingDescriptor {
    pub items: Vec<SubtitlingItem>,
}

impl DescriptorDemux for SubtitlingDescriptor {
    const TAG: u8 = TAG_SUBTITLING;

    fn demux(reader: &mut PayloadReader, length: u8, options: &ParseOptions) -> Result<Self> {
        let count = group_count(Self::TAG, length, ITEM_SIZE, options)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(SubtitlingItem {
                language: read_language(reader)?,
                subtitling_type: read_u8(reader)?,
                composition_page_id: reader.read_u16::<BigEndian>()?,
                ancillary_page_id: reader.read_u16::<BigEndian>()?,
            });
        }
        Ok(SubtitlingDescriptor { items })
    }
}
