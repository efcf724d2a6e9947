//! Descriptor loop parser for MPEG-2 Transport Stream PSI/SI tables.
//!
//! PMT, SDT, EIT and NIT entries carry a loop of tag-length-value
//! descriptors. This crate turns such a loop into a [`DescriptorList`] of
//! typed records, decoding the AC-3, ISO 639 language, maximum bitrate,
//! network name, service, short event, stream identifier, subtitling and
//! teletext descriptors. Other tags are kept as [`DescriptorPayload::Unknown`].
//!
//! Each descriptor's declared length is authoritative: after decoding, the
//! cursor always moves to the end of the declared payload, so unknown tags
//! and malformed payloads never desynchronize the rest of the loop.
//!
//! ```
//! use bytes::Bytes;
//! use ts_descriptor::{DescriptorPayload, parse_descriptors};
//!
//! let data = Bytes::from_static(&[0x52, 0x01, 0x07]);
//! let (descriptors, consumed) = parse_descriptors(data).unwrap();
//! assert_eq!(consumed, 3);
//! assert!(matches!(
//!     &descriptors[0].payload,
//!     DescriptorPayload::StreamIdentifier(s) if s.component_tag == 7
//! ));
//! ```

pub mod descriptor;
pub mod descriptor_loop;
pub mod error;
pub mod language;
pub mod options;
pub mod tag;
pub mod text;

pub use descriptor::{
    Ac3Descriptor, AudioType, Descriptor, DescriptorDemux, DescriptorPayload,
    Iso639LanguageDescriptor, MaximumBitrateDescriptor, NetworkNameDescriptor, PayloadReader,
    ServiceDescriptor, ServiceType, ShortEventDescriptor, StreamIdentifierDescriptor,
    SubtitlingDescriptor, SubtitlingItem, SubtitlingType, TeletextDescriptor, TeletextItem,
    TeletextType,
};
pub use descriptor_loop::{
    DescriptorList, parse_descriptors, parse_descriptors_with_options, read_descriptor_loop,
    read_descriptor_loop_with_options,
};
pub use error::DescriptorError;
pub use language::LanguageCode;
pub use options::{ParseOptions, RemainderMode, TeletextPageMode};
pub use tag::DescriptorTag;

/// Result type for descriptor parsing operations
pub type Result<T> = std::result::Result<T, DescriptorError>;
