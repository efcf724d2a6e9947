use bytes::Bytes;

use super::{DescriptorDemux, PayloadReader, read_u8, remaining_payload};
use crate::options::ParseOptions;
use crate::tag::TAG_AC3;
use crate::Result;

/// Parsed AC-3 audio descriptor (tag 0x81).
///
/// Each optional field is present only when its flag bit was set. A value of
/// `Some(0)` is a real zero, not a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ac3Descriptor {
    pub component_type: Option<u8>,
    pub bsid: Option<u8>,
    pub mainid: Option<u8>,
    pub asvc: Option<u8>,
    /// Bytes after the optional fields, up to the declared length.
    pub additional_info: Bytes,
}

impl Ac3Descriptor {
    /// Returns `true` if the component type flag was set and its byte present.
    pub fn has_component_type(&self) -> bool {
        self.component_type.is_some()
    }

    /// Returns `true` if a bit stream identification byte was present.
    pub fn has_bsid(&self) -> bool {
        self.bsid.is_some()
    }

    /// Returns `true` if a main audio service id byte was present.
    pub fn has_mainid(&self) -> bool {
        self.mainid.is_some()
    }

    /// Returns `true` if an associated service byte was present.
    pub fn has_asvc(&self) -> bool {
        self.asvc.is_some()
    }
}

impl DescriptorDemux for Ac3Descriptor {
    const TAG: u8 = TAG_AC3;

    fn demux(reader: &mut PayloadReader, length: u8, _options: &ParseOptions) -> Result<Self> {
        let component_type_flag = reader.read_bit()?;
        let bsid_flag = reader.read_bit()?;
        let mainid_flag = reader.read_bit()?;
        let asvc_flag = reader.read_bit()?;
        reader.seek_bits(4)?; // reserved

        // A set flag whose byte lies past the payload reads as absent.
        let mut read_if = |flag: bool| -> Result<Option<u8>> {
            if flag && remaining_payload(reader, length) > 0 {
                Ok(Some(read_u8(reader)?))
            } else {
                Ok(None)
            }
        };
        let component_type = read_if(component_type_flag)?;
        let bsid = read_if(bsid_flag)?;
        let mainid = read_if(mainid_flag)?;
        let asvc = read_if(asvc_flag)?;

        let additional_info = reader.extract_bytes(remaining_payload(reader, length))?;

        Ok(Ac3Descriptor {
            component_type,
            bsid,
            mainid,
            asvc,
            additional_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::payload_reader;

    fn demux(data: &'static [u8], length: u8) -> Ac3Descriptor {
        let mut reader = payload_reader(data);
        Ac3Descriptor::demux(&mut reader, length, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_all_fields_present() {
        let desc = demux(b"\xF0\x01\x02\x03\x04info", 9);
        assert_eq!(
            desc,
            Ac3Descriptor {
                component_type: Some(1),
                bsid: Some(2),
                mainid: Some(3),
                asvc: Some(4),
                additional_info: Bytes::from_static(b"info"),
            }
        );
        assert!(desc.has_component_type() && desc.has_bsid());
        assert!(desc.has_mainid() && desc.has_asvc());
    }

    #[test]
    fn test_some_fields_present() {
        // component_type and mainid only, mainid is a legal zero
        let desc = demux(&[0xA0, 0x48, 0x00], 3);
        assert_eq!(desc.component_type, Some(0x48));
        assert_eq!(desc.bsid, None);
        assert_eq!(desc.mainid, Some(0));
        assert_eq!(desc.asvc, None);
        assert!(desc.additional_info.is_empty());
    }

    #[test]
    fn test_reserved_bits_ignored() {
        let desc = demux(&[0x4F, 0x08], 2);
        assert_eq!(desc.bsid, Some(0x08));
        assert!(!desc.has_component_type());
    }

    #[test]
    fn test_additional_info_stops_at_declared_length() {
        // Next descriptor's header follows the payload.
        let desc = demux(&[0x00, b'x', b'y', 0x52, 0x01], 3);
        assert_eq!(&desc.additional_info[..], b"xy");
    }

    #[test]
    fn test_flagged_fields_past_payload_are_absent() {
        // All four flags set, only the component type byte fits.
        let desc = demux(&[0xF0, 0x01], 2);
        assert_eq!(desc.component_type, Some(1));
        assert_eq!(desc.bsid, None);
        assert_eq!(desc.mainid, None);
        assert_eq!(desc.asvc, None);
        assert!(desc.additional_info.is_empty());
    }

    #[test]
    fn test_missing_flags_byte() {
        let mut reader = payload_reader(&[]);
        assert!(Ac3Descriptor::demux(&mut reader, 0, &ParseOptions::default()).is_err());
    }
}
