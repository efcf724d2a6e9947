//! Typed descriptor records and the per-tag decoders.
//!
//! Every decoder reads from a [`PayloadReader`] over its own payload and
//! nothing else, so it can never see the bytes of the next descriptor.
//! Inline length fields that point past the payload are clamped to what is
//! left of it. A payload too short for a decoder's fixed fields is kept as
//! [`DescriptorPayload::Unknown`] with its raw bytes.

use std::io;

use bytes::Bytes;
use bytes_util::BitReader;
use tracing::debug;

use crate::options::{ParseOptions, RemainderMode};
use crate::tag::*;
use crate::{DescriptorError, LanguageCode, Result};

mod ac3;
mod iso639;
mod maximum_bitrate;
mod network_name;
mod service;
mod short_event;
mod stream_identifier;
mod subtitling;
mod teletext;

pub use ac3::Ac3Descriptor;
pub use iso639::{AudioType, Iso639LanguageDescriptor};
pub use maximum_bitrate::MaximumBitrateDescriptor;
pub use network_name::NetworkNameDescriptor;
pub use service::{ServiceDescriptor, ServiceType};
pub use short_event::ShortEventDescriptor;
pub use stream_identifier::StreamIdentifierDescriptor;
pub use subtitling::{SubtitlingDescriptor, SubtitlingItem, SubtitlingType};
pub use teletext::{TeletextDescriptor, TeletextItem, TeletextType, decode_bcd_page};

/// Bit reader handed to the payload decoders.
pub type PayloadReader = BitReader<io::Cursor<Bytes>>;

/// A descriptor payload decoder.
pub trait DescriptorDemux: Sized {
    /// Tag this decoder is registered for.
    const TAG: u8;

    /// Decodes a payload of the declared `length` from `reader`.
    ///
    /// Implementations that read a variable trailing blob size it as
    /// `length - bytes_read_so_far`, using [`remaining_payload`].
    fn demux(reader: &mut PayloadReader, length: u8, options: &ParseOptions) -> Result<Self>;
}

/// One parsed descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Descriptor tag as read from the stream.
    pub tag: u8,
    /// Declared payload length. The loop driver always advances by this
    /// amount, whatever the decoder consumed.
    pub length: u8,
    /// Decoded payload, matching `tag`.
    pub payload: DescriptorPayload,
}

impl Descriptor {
    /// The descriptor kind for this record's tag.
    pub fn kind(&self) -> DescriptorTag {
        DescriptorTag::from(self.tag)
    }

    /// Returns `true` if no decoder is registered for the tag.
    pub fn is_unknown(&self) -> bool {
        matches!(self.payload, DescriptorPayload::Unknown(_))
    }
}

/// The decoded payload of a [`Descriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorPayload {
    Ac3(Ac3Descriptor),
    Iso639LanguageAndAudioType(Iso639LanguageDescriptor),
    MaximumBitrate(MaximumBitrateDescriptor),
    NetworkName(NetworkNameDescriptor),
    Service(ServiceDescriptor),
    ShortEvent(ShortEventDescriptor),
    StreamIdentifier(StreamIdentifierDescriptor),
    Subtitling(SubtitlingDescriptor),
    Teletext(TeletextDescriptor),
    /// A tag without a decoder. Holds the undecoded payload bytes.
    Unknown(Bytes),
}

/// Selects the decoder for `tag` and runs it over `data`, the descriptor's
/// complete payload.
///
/// Unknown tags are not decoded; their payload is handed back as raw bytes,
/// as is the payload of a known tag that ends before its fixed fields do.
pub(crate) fn demux_payload(
    tag: u8,
    data: Bytes,
    options: &ParseOptions,
) -> Result<DescriptorPayload> {
    // Payload lengths come from a one byte field.
    let length = data.len() as u8;
    let mut reader = BitReader::new(io::Cursor::new(data.clone()));
    let decoded = match tag {
        TAG_AC3 => Ac3Descriptor::demux(&mut reader, length, options).map(DescriptorPayload::Ac3),
        TAG_ISO_639_LANGUAGE => Iso639LanguageDescriptor::demux(&mut reader, length, options)
            .map(DescriptorPayload::Iso639LanguageAndAudioType),
        TAG_MAXIMUM_BITRATE => MaximumBitrateDescriptor::demux(&mut reader, length, options)
            .map(DescriptorPayload::MaximumBitrate),
        TAG_NETWORK_NAME => NetworkNameDescriptor::demux(&mut reader, length, options)
            .map(DescriptorPayload::NetworkName),
        TAG_SERVICE => {
            ServiceDescriptor::demux(&mut reader, length, options).map(DescriptorPayload::Service)
        }
        TAG_SHORT_EVENT => ShortEventDescriptor::demux(&mut reader, length, options)
            .map(DescriptorPayload::ShortEvent),
        TAG_STREAM_IDENTIFIER => StreamIdentifierDescriptor::demux(&mut reader, length, options)
            .map(DescriptorPayload::StreamIdentifier),
        TAG_SUBTITLING => SubtitlingDescriptor::demux(&mut reader, length, options)
            .map(DescriptorPayload::Subtitling),
        TAG_TELETEXT => TeletextDescriptor::demux(&mut reader, length, options)
            .map(DescriptorPayload::Teletext),
        _ => {
            debug!(
                tag = format_args!("{tag:#04x}"),
                length, "Unknown descriptor tag, keeping raw payload"
            );
            return Ok(DescriptorPayload::Unknown(data));
        }
    };

    match decoded {
        Ok(payload) => {
            let consumed = reader.byte_offset();
            if consumed < length as u64 {
                debug!(
                    tag = format_args!("{tag:#04x}"),
                    declared = length,
                    consumed,
                    "Descriptor payload not fully consumed"
                );
            }
            Ok(payload)
        }
        Err(DescriptorError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
            debug!(
                tag = format_args!("{tag:#04x}"),
                length, "Descriptor payload too short for its fields, keeping raw payload"
            );
            Ok(DescriptorPayload::Unknown(data))
        }
        Err(err) => Err(err),
    }
}

/// Bytes of the declared payload the decoder has not read yet.
pub(crate) fn remaining_payload(reader: &PayloadReader, length: u8) -> usize {
    (length as u64).saturating_sub(reader.byte_offset()) as usize
}

/// Number of whole `item_size` groups in a payload of `length` bytes.
pub(crate) fn group_count(
    tag: u8,
    length: u8,
    item_size: u8,
    options: &ParseOptions,
) -> Result<usize> {
    let remainder = length % item_size;
    if remainder != 0 {
        if options.remainder_mode == RemainderMode::Reject {
            return Err(DescriptorError::InvalidGroupLength {
                tag,
                length,
                item_size,
            });
        }
        debug!(
            tag = format_args!("{tag:#04x}"),
            length, item_size, remainder, "Ignoring partial item at end of descriptor"
        );
    }
    Ok((length / item_size) as usize)
}

pub(crate) fn read_u8(reader: &mut PayloadReader) -> io::Result<u8> {
    Ok(reader.read_bits(8)? as u8)
}

pub(crate) fn read_language(reader: &mut PayloadReader) -> io::Result<LanguageCode> {
    let code = reader.read_bits(24)? as u32;
    let [_, a, b, c] = code.to_be_bytes();
    Ok(LanguageCode([a, b, c]))
}

/// Reads a one byte length prefix followed by that many bytes, clamped to
/// the rest of the payload. A missing prefix reads as an empty string.
pub(crate) fn read_prefixed_bytes(reader: &mut PayloadReader, length: u8) -> io::Result<Bytes> {
    if remaining_payload(reader, length) == 0 {
        return Ok(Bytes::new());
    }

    let declared = read_u8(reader)? as usize;
    let available = remaining_payload(reader, length);
    if declared > available {
        debug!(declared, available, "Clamping inline length to descriptor payload");
    }
    reader.extract_bytes(declared.min(available))
}

#[cfg(test)]
pub(crate) fn payload_reader(data: &'static [u8]) -> PayloadReader {
    BitReader::new(io::Cursor::new(Bytes::from_static(data)))
}
