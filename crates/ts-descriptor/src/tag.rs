/// ISO 639 language and audio type descriptor (tag 0x0A)
pub const TAG_ISO_639_LANGUAGE: u8 = 0x0A;
/// Maximum bitrate descriptor (tag 0x0E)
pub const TAG_MAXIMUM_BITRATE: u8 = 0x0E;
/// Network name descriptor (tag 0x40)
pub const TAG_NETWORK_NAME: u8 = 0x40;
/// Service descriptor (tag 0x48)
pub const TAG_SERVICE: u8 = 0x48;
/// Short event descriptor (tag 0x4D)
pub const TAG_SHORT_EVENT: u8 = 0x4D;
/// Stream identifier descriptor (tag 0x52)
pub const TAG_STREAM_IDENTIFIER: u8 = 0x52;
/// Teletext descriptor (tag 0x56)
pub const TAG_TELETEXT: u8 = 0x56;
/// Subtitling descriptor (tag 0x59)
pub const TAG_SUBTITLING: u8 = 0x59;
/// AC-3 audio descriptor (tag 0x81)
pub const TAG_AC3: u8 = 0x81;

/// Descriptor kinds with a registered decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorTag {
    Iso639LanguageAndAudioType,
    MaximumBitrate,
    NetworkName,
    Service,
    ShortEvent,
    StreamIdentifier,
    Teletext,
    Subtitling,
    Ac3,
    Unknown(u8),
}

impl DescriptorTag {
    /// Returns `true` if the tag has a decoder.
    pub fn is_known(&self) -> bool {
        !matches!(self, DescriptorTag::Unknown(_))
    }
}

impl From<u8> for DescriptorTag {
    fn from(value: u8) -> Self {
        match value {
            TAG_ISO_639_LANGUAGE => DescriptorTag::Iso639LanguageAndAudioType,
            TAG_MAXIMUM_BITRATE => DescriptorTag::MaximumBitrate,
            TAG_NETWORK_NAME => DescriptorTag::NetworkName,
            TAG_SERVICE => DescriptorTag::Service,
            TAG_SHORT_EVENT => DescriptorTag::ShortEvent,
            TAG_STREAM_IDENTIFIER => DescriptorTag::StreamIdentifier,
            TAG_TELETEXT => DescriptorTag::Teletext,
            TAG_SUBTITLING => DescriptorTag::Subtitling,
            TAG_AC3 => DescriptorTag::Ac3,
            v => DescriptorTag::Unknown(v),
        }
    }
}

impl From<DescriptorTag> for u8 {
    fn from(value: DescriptorTag) -> Self {
        match value {
            DescriptorTag::Iso639LanguageAndAudioType => TAG_ISO_639_LANGUAGE,
            DescriptorTag::MaximumBitrate => TAG_MAXIMUM_BITRATE,
            DescriptorTag::NetworkName => TAG_NETWORK_NAME,
            DescriptorTag::Service => TAG_SERVICE,
            DescriptorTag::ShortEvent => TAG_SHORT_EVENT,
            DescriptorTag::StreamIdentifier => TAG_STREAM_IDENTIFIER,
            DescriptorTag::Teletext => TAG_TELETEXT,
            DescriptorTag::Subtitling => TAG_SUBTITLING,
            DescriptorTag::Ac3 => TAG_AC3,
            DescriptorTag::Unknown(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        for tag in [0x0A, 0x0E, 0x40, 0x48, 0x4D, 0x52, 0x56, 0x59, 0x81] {
            let kind = DescriptorTag::from(tag);
            assert!(kind.is_known(), "tag 0x{tag:02X} should be known");
            assert_eq!(u8::from(kind), tag);
        }
    }

    #[test]
    fn test_unknown_tag() {
        // DVB AC-3 (0x6A) is not registered here, only the ATSC tag is.
        let kind = DescriptorTag::from(0x6A);
        assert_eq!(kind, DescriptorTag::Unknown(0x6A));
        assert!(!kind.is_known());
        assert_eq!(u8::from(kind), 0x6A);
    }
}
