use super::{DescriptorDemux, PayloadReader, read_language, read_u8};
use crate::language::LanguageCode;
use crate::options::ParseOptions;
use crate::tag::TAG_ISO_639_LANGUAGE;
use crate::Result;

/// Audio type carried next to the ISO 639 language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioType {
    Undefined,
    CleanEffects,
    HearingImpaired,
    VisualImpairedCommentary,
    /// User private (0x04-0x7F) or reserved (0x80-0xFF) values.
    Other(u8),
}

impl From<u8> for AudioType {
    fn from(value: u8) -> Self {
        match value {
            0x00 => AudioType::Undefined,
            0x01 => AudioType::CleanEffects,
            0x02 => AudioType::HearingImpaired,
            0x03 => AudioType::VisualImpairedCommentary,
            v => AudioType::Other(v),
        }
    }
}

impl From<AudioType> for u8 {
    fn from(value: AudioType) -> Self {
        match value {
            AudioType::Undefined => 0x00,
            AudioType::CleanEffects => 0x01,
            AudioType::HearingImpaired => 0x02,
            AudioType::VisualImpairedCommentary => 0x03,
            AudioType::Other(v) => v,
        }
    }
}

/// ISO 639 language and audio type descriptor (tag 0x0A).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iso639LanguageDescriptor {
    pub language: LanguageCode,
    pub audio_type: AudioType,
}

impl DescriptorDemux for Iso639LanguageDescriptor {
    const TAG: u8 = TAG_ISO_639_LANGUAGE;

    fn demux(reader: &mut PayloadReader, _length: u8, _options: &ParseOptions) -> Result<Self> {
        let language = read_language(reader)?;
        let audio_type = AudioType::from(read_u8(reader)?);
        Ok(Iso639LanguageDescriptor {
            language,
            audio_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::payload_reader;

    #[test]
    fn test_demux() {
        let mut reader = payload_reader(&[b'e', b'n', b'g', 0x01]);
        let desc = Iso639LanguageDescriptor::demux(&mut reader, 4, &ParseOptions::default())
            .unwrap();
        assert_eq!(desc.language, b"eng");
        assert_eq!(desc.audio_type, AudioType::CleanEffects);
        assert_eq!(reader.byte_offset(), 4);
    }

    #[test]
    fn test_audio_type_values() {
        assert_eq!(AudioType::from(0x00), AudioType::Undefined);
        assert_eq!(AudioType::from(0x03), AudioType::VisualImpairedCommentary);
        assert_eq!(AudioType::from(0x80), AudioType::Other(0x80));
        assert_eq!(u8::from(AudioType::HearingImpaired), 0x02);
        assert_eq!(u8::from(AudioType::Other(0x42)), 0x42);
    }
}
