use std::borrow::Cow;

use bytes::Bytes;

use super::{DescriptorDemux, PayloadReader, read_prefixed_bytes, read_u8};
use crate::options::ParseOptions;
use crate::tag::TAG_SERVICE;
use crate::{Result, text};

/// Service type coding from the service descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    DigitalTelevision,
    DigitalRadioSound,
    Teletext,
    NvodReference,
    NvodTimeShifted,
    Mosaic,
    FmRadio,
    AdvancedCodecDigitalRadioSound,
    DataBroadcast,
    Mpeg2HdDigitalTelevision,
    AdvancedCodecSdDigitalTelevision,
    AdvancedCodecHdDigitalTelevision,
    HevcDigitalTelevision,
    Other(u8),
}

impl From<u8> for ServiceType {
    fn from(value: u8) -> Self {
        match value {
            0x01 => ServiceType::DigitalTelevision,
            0x02 => ServiceType::DigitalRadioSound,
            0x03 => ServiceType::Teletext,
            0x04 => ServiceType::NvodReference,
            0x05 => ServiceType::NvodTimeShifted,
            0x06 => ServiceType::Mosaic,
            0x07 => ServiceType::FmRadio,
            0x0A => ServiceType::AdvancedCodecDigitalRadioSound,
            0x0C => ServiceType::DataBroadcast,
            0x11 => ServiceType::Mpeg2HdDigitalTelevision,
            0x16 => ServiceType::AdvancedCodecSdDigitalTelevision,
            0x19 => ServiceType::AdvancedCodecHdDigitalTelevision,
            0x1F => ServiceType::HevcDigitalTelevision,
            v => ServiceType::Other(v),
        }
    }
}

impl From<ServiceType> for u8 {
    fn from(value: ServiceType) -> Self {
        match value {
            ServiceType::DigitalTelevision => 0x01,
            ServiceType::DigitalRadioSound => 0x02,
            ServiceType::Teletext => 0x03,
            ServiceType::NvodReference => 0x04,
            ServiceType::NvodTimeShifted => 0x05,
            ServiceType::Mosaic => 0x06,
            ServiceType::FmRadio => 0x07,
            ServiceType::AdvancedCodecDigitalRadioSound => 0x0A,
            ServiceType::DataBroadcast => 0x0C,
            ServiceType::Mpeg2HdDigitalTelevision => 0x11,
            ServiceType::AdvancedCodecSdDigitalTelevision => 0x16,
            ServiceType::AdvancedCodecHdDigitalTelevision => 0x19,
            ServiceType::HevcDigitalTelevision => 0x1F,
            ServiceType::Other(v) => v,
        }
    }
}

/// Service descriptor (tag 0x48).
///
/// The provider and service names are sized by their own inline length
/// bytes, clamped to the end of the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub service_type: ServiceType,
    pub provider: Bytes,
    pub name: Bytes,
}

impl ServiceDescriptor {
    pub fn provider_lossy(&self) -> Cow<'_, str> {
        text::decode_lossy(&self.provider)
    }

    pub fn name_lossy(&self) -> Cow<'_, str> {
        text::decode_lossy(&self.name)
    }
}

impl DescriptorDemux for ServiceDescriptor {
    const TAG: u8 = TAG_SERVICE;

    fn demux(reader: &mut PayloadReader, length: u8, _options: &ParseOptions) -> Result<Self> {
        let service_type = ServiceType::from(read_u8(reader)?);
        let provider = read_prefixed_bytes(reader, length)?;
        let name = read_prefixed_bytes(reader, length)?;
        Ok(ServiceDescriptor {
            service_type,
            provider,
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::payload_reader;

    #[test]
    fn test_demux() {
        let mut reader = payload_reader(b"\x01\x08provider\x07service");
        let desc = ServiceDescriptor::demux(&mut reader, 18, &ParseOptions::default()).unwrap();
        assert_eq!(desc.service_type, ServiceType::DigitalTelevision);
        assert_eq!(&desc.provider[..], b"provider");
        assert_eq!(&desc.name[..], b"service");
        assert_eq!(desc.provider_lossy(), "provider");
        assert_eq!(desc.name_lossy(), "service");
        assert_eq!(reader.byte_offset(), 18);
    }

    #[test]
    fn test_inline_lengths_are_trusted() {
        // Declared length would be 5, the names only account for 4 bytes.
        let mut reader = payload_reader(b"\x02\x01P\x00\xFF");
        let desc = ServiceDescriptor::demux(&mut reader, 5, &ParseOptions::default()).unwrap();
        assert_eq!(desc.service_type, ServiceType::DigitalRadioSound);
        assert_eq!(&desc.provider[..], b"P");
        assert!(desc.name.is_empty());
        assert_eq!(reader.byte_offset(), 4);
    }

    #[test]
    fn test_inline_length_past_payload_is_clamped() {
        // Provider length claims 9 bytes, the payload ends after one.
        let mut reader = payload_reader(b"\x01\x09P");
        let desc = ServiceDescriptor::demux(&mut reader, 3, &ParseOptions::default()).unwrap();
        assert_eq!(&desc.provider[..], b"P");
        assert!(desc.name.is_empty());
    }

    #[test]
    fn test_service_type_values() {
        assert_eq!(ServiceType::from(0x19), ServiceType::AdvancedCodecHdDigitalTelevision);
        assert_eq!(ServiceType::from(0x80), ServiceType::Other(0x80));
        assert_eq!(u8::from(ServiceType::DataBroadcast), 0x0C);
    }
}
