use super::{DescriptorDemux, PayloadReader, group_count, read_language};
use crate::language::LanguageCode;
use crate::options::{ParseOptions, TeletextPageMode};
use crate::tag::TAG_TELETEXT;
use crate::{DescriptorError, Result};

const ITEM_SIZE: u8 = 5;

/// Teletext page type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeletextType {
    InitialPage,
    Subtitle,
    AdditionalInformation,
    ProgrammeSchedule,
    HearingImpairedSubtitle,
    Reserved(u8),
}

impl From<u8> for TeletextType {
    fn from(value: u8) -> Self {
        match value {
            0x01 => TeletextType::InitialPage,
            0x02 => TeletextType::Subtitle,
            0x03 => TeletextType::AdditionalInformation,
            0x04 => TeletextType::ProgrammeSchedule,
            0x05 => TeletextType::HearingImpairedSubtitle,
            v => TeletextType::Reserved(v),
        }
    }
}

/// One page entry of a teletext descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeletextItem {
    pub language: LanguageCode,
    /// 5 bits
    pub teletext_type: u8,
    /// 3 bits
    pub magazine: u8,
    /// Page number decoded from its two BCD digits.
    pub page: u8,
}

impl TeletextItem {
    pub fn kind(&self) -> TeletextType {
        TeletextType::from(self.teletext_type)
    }
}

/// Teletext descriptor (tag 0x56), `length / 5` items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeletextDescriptor {
    pub items: Vec<TeletextItem>,
}

/// Decodes a two digit BCD page number, `0x12` becomes `12`.
///
/// With [`TeletextPageMode::Arithmetic`] nibbles above 9 are combined as is,
/// so `0xAB` gives `111`.
pub fn decode_bcd_page(raw: u8, mode: TeletextPageMode) -> Result<u8> {
    let tens = raw >> 4;
    let ones = raw & 0x0F;
    if mode == TeletextPageMode::Reject && (tens > 9 || ones > 9) {
        return Err(DescriptorError::InvalidBcdPage(raw));
    }
    Ok(tens * 10 + ones)
}

impl DescriptorDemux for TeletextDescriptor {
    const TAG: u8 = TAG_TELETEXT;

    fn demux(reader: &mut PayloadReader, length: u8, options: &ParseOptions) -> Result<Self> {
        let count = group_count(Self::TAG, length, ITEM_SIZE, options)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            let language = read_language(reader)?;
            let teletext_type = reader.read_bits(5)? as u8;
            let magazine = reader.read_bits(3)? as u8;
            let page = decode_bcd_page(reader.read_bits(8)? as u8, options.teletext_page_mode)?;
            items.push(TeletextItem {
                language,
                teletext_type,
                magazine,
                page,
            });
        }
        Ok(TeletextDescriptor { items })
    }
}
