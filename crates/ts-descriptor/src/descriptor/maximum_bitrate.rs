use super::{DescriptorDemux, PayloadReader};
use crate::options::ParseOptions;
use crate::tag::TAG_MAXIMUM_BITRATE;
use crate::Result;

/// The bitrate field counts in units of 50 bytes per second.
const BITRATE_UNIT: u32 = 50;

/// Maximum bitrate descriptor (tag 0x0E).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaximumBitrateDescriptor {
    /// Maximum bitrate in bytes per second.
    pub bitrate: u32,
}

impl MaximumBitrateDescriptor {
    /// Maximum bitrate in bits per second.
    pub fn bits_per_second(&self) -> u64 {
        self.bitrate as u64 * 8
    }
}

impl DescriptorDemux for MaximumBitrateDescriptor {
    const TAG: u8 = TAG_MAXIMUM_BITRATE;

    fn demux(reader: &mut PayloadReader, _length: u8, _options: &ParseOptions) -> Result<Self> {
        reader.seek_bits(2)?; // reserved
        let raw = reader.read_bits(22)? as u32;
        Ok(MaximumBitrateDescriptor {
            bitrate: raw * BITRATE_UNIT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::payload_reader;

    fn demux(data: &'static [u8]) -> MaximumBitrateDescriptor {
        let mut reader = payload_reader(data);
        MaximumBitrateDescriptor::demux(&mut reader, 3, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_unit_value() {
        assert_eq!(demux(&[0x00, 0x00, 0x01]).bitrate, 50);
    }

    #[test]
    fn test_reserved_bits_masked() {
        let desc = demux(&[0xFF, 0xFF, 0xFF]);
        assert_eq!(desc.bitrate, 0x3F_FFFF * 50);
        assert_eq!(desc.bits_per_second(), 0x3F_FFFF * 50 * 8);
    }
}
