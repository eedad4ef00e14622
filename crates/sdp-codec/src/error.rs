//! Error handling for the SDP codec
//!
//! Every operation in this crate reports failure through a single closed
//! enumeration, [`SdpError`]. Each distinct wire-syntax violation keeps its
//! own variant so callers can discriminate recoverable format errors from
//! corruption without string matching.

use std::fmt;

use thiserror::Error;

/// Result type alias for SDP codec operations
pub type Result<T> = std::result::Result<T, SdpError>;

/// Error type for SDP serializer and deserializer operations
///
/// Clean end-of-message is not represented here; the deserializer signals it
/// as `Ok(None)` from [`get_next`](crate::SdpDeserializerContext::get_next).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdpError {
    /// Empty input, zero-length value, or a structurally invalid record
    /// passed to an API; always detected before any buffer mutation
    #[error("bad parameter")]
    BadParam,

    /// A line is shorter than the minimal `T=v\n` form, or a field value
    /// ran out of tokens before its mandatory parts were found
    #[error("malformed message: not enough info")]
    MalformedNotEnoughInfo,

    /// The second byte of a line is not `=`
    #[error("malformed message: '=' not found")]
    MalformedEqualNotFound,

    /// No `\n` terminator before the end of the buffer
    #[error("malformed message: newline not found")]
    MalformedNewlineNotFound,

    /// A line carries no value between `T=` and its terminator
    #[error("malformed message: no value")]
    MalformedNoValue,

    /// Originator session id token is not a decimal number
    #[error("malformed originator: no session id")]
    MalformedNoSessionId,

    /// Originator session version token is not a decimal number
    #[error("malformed originator: no session version")]
    MalformedNoSessionVersion,

    /// Connection info network type token is not `IN`
    #[error("malformed connection info: invalid network type")]
    MalformedInvalidNetworkType,

    /// Connection info address type token is neither `IP4` nor `IP6`
    #[error("malformed connection info: invalid address type")]
    MalformedInvalidAddressType,

    /// Connection info carries trailing tokens after the address
    #[error("malformed connection info: redundant info")]
    MalformedRedundantInfo,

    /// Bandwidth value after `:` is not a decimal number
    #[error("malformed bandwidth: invalid value")]
    MalformedInvalidBandwidth,

    /// Time description start time is not a decimal number
    #[error("malformed time description: invalid start time")]
    MalformedInvalidStartTime,

    /// Time description stop time is not a decimal number
    #[error("malformed time description: invalid stop time")]
    MalformedInvalidStopTime,

    /// Media port token is not a decimal number
    #[error("malformed media: invalid port")]
    MalformedInvalidPort,

    /// Media port count after `/` is not a decimal number
    #[error("malformed media: invalid port count")]
    MalformedInvalidPortNum,

    /// The serializer's destination buffer cannot hold the next line;
    /// the write cursor is left unmodified so the caller may retry
    #[error("output buffer too small")]
    OutOfMemory,

    /// A formatting failure surfaced through the writer; unexpected
    #[error("formatting error")]
    Format,
}

impl SdpError {
    /// Returns `true` for the wire-syntax violation family
    /// (`Malformed*`), as opposed to caller mistakes (`BadParam`),
    /// capacity exhaustion (`OutOfMemory`), or formatter failures.
    pub fn is_malformed(&self) -> bool {
        use SdpError::*;
        matches!(
            self,
            MalformedNotEnoughInfo
                | MalformedEqualNotFound
                | MalformedNewlineNotFound
                | MalformedNoValue
                | MalformedNoSessionId
                | MalformedNoSessionVersion
                | MalformedInvalidNetworkType
                | MalformedInvalidAddressType
                | MalformedRedundantInfo
                | MalformedInvalidBandwidth
                | MalformedInvalidStartTime
                | MalformedInvalidStopTime
                | MalformedInvalidPort
                | MalformedInvalidPortNum
        )
    }
}

impl From<fmt::Error> for SdpError {
    fn from(_: fmt::Error) -> Self {
        SdpError::Format
    }
}
