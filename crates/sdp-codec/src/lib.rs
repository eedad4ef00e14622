//! # sdp-codec: Zero-Copy SDP Serializer and Deserializer
//!
//! A bounded-memory codec for the Session Description Protocol text format
//! used in VoIP and WebRTC signaling. Two independent halves share one data
//! model:
//!
//! - **Deserializer**: [`SdpDeserializerContext`] tokenizes a flat message
//!   into `type=value` lines, and the `parse_*` functions in
//!   [`deserializer`] interpret a line value into a typed record. Nothing
//!   is copied: every string in a parsed record borrows from the input.
//! - **Serializer**: [`SdpSerializerContext`] renders typed records back
//!   into exact wire syntax inside a caller-supplied buffer, or counts the
//!   required size in sizing mode.
//!
//! The codec never allocates and never performs I/O. It also does not
//! interpret session semantics - codec numbers, attribute grammars past the
//! first `:` and cross-field consistency are the caller's business.
//!
//! ## Usage
//!
//! ```rust
//! use sdp_codec::{
//!     deserializer::parse_media, types::TYPE_MEDIA, Media, SdpDeserializerContext,
//!     SdpSerializerContext,
//! };
//!
//! // Deserialize: pull lines, dispatch on the type tag.
//! let mut ctx = SdpDeserializerContext::new("m=audio 49170 RTP/AVP 0\r\n")?;
//! let mut media = Media::default();
//! while let Some(line) = ctx.get_next()? {
//!     if line.kind == TYPE_MEDIA {
//!         parse_media(line.value, &mut media)?;
//!     }
//! }
//! assert_eq!(media.port, 49170);
//!
//! // Serialize back into a fixed buffer.
//! let mut buffer = [0u8; 64];
//! let mut out = SdpSerializerContext::new(&mut buffer);
//! out.add_media(TYPE_MEDIA, &media)?;
//! let (message, _length) = out.finalize();
//! assert_eq!(message.unwrap(), b"m=audio 49170 RTP/AVP 0\r\n");
//! # Ok::<(), sdp_codec::SdpError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: derive `serde::Serialize` on the wire record types

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod deserializer;
pub mod error;
pub mod serializer;
pub mod types;

pub use deserializer::SdpDeserializerContext;
pub use error::{Result, SdpError};
pub use serializer::SdpSerializerContext;
pub use types::{
    AddressType, Attribute, BandwidthInfo, ConnectionInfo, Media, NetworkType, Originator,
    SdpLine, TimeDescription,
};

/// Version of the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
