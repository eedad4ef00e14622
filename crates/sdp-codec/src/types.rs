//! Data model for SDP lines and field records
//!
//! Every record is a borrowed view: string fields are `&str` slices into the
//! message buffer they were parsed from (or into caller storage on the
//! serialize side). Nothing here owns heap memory, so the lifetime of a
//! record is bounded by the lifetime of the buffer behind it.
//!
//! Defaults are the "not yet populated" state: `Unknown` discriminants,
//! empty slices, `None` options. Parsers fill records in place, so after a
//! parse error the fields parsed before the failing point remain set -
//! useful for diagnostics.

use std::fmt;

/// `v=` protocol version line
pub const TYPE_VERSION: u8 = b'v';
/// `o=` originator and session identifier line
pub const TYPE_ORIGINATOR: u8 = b'o';
/// `s=` session name line
pub const TYPE_SESSION_NAME: u8 = b's';
/// `i=` session information line
pub const TYPE_SESSION_INFO: u8 = b'i';
/// `u=` URI of description line
pub const TYPE_URI: u8 = b'u';
/// `e=` email address line
pub const TYPE_EMAIL: u8 = b'e';
/// `p=` phone number line
pub const TYPE_PHONE: u8 = b'p';
/// `c=` connection information line
pub const TYPE_CONNECTION_INFO: u8 = b'c';
/// `b=` bandwidth information line
pub const TYPE_BANDWIDTH: u8 = b'b';
/// `t=` time active line
pub const TYPE_TIME_ACTIVE: u8 = b't';
/// `r=` repeat times line
pub const TYPE_REPEAT_TIMES: u8 = b'r';
/// `z=` time zone adjustment line
pub const TYPE_TIME_ZONE: u8 = b'z';
/// `k=` encryption key line
pub const TYPE_ENCRYPTION_KEY: u8 = b'k';
/// `a=` attribute line
pub const TYPE_ATTRIBUTE: u8 = b'a';
/// `m=` media description line
pub const TYPE_MEDIA: u8 = b'm';

/// Network type of a connection information field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NetworkType {
    /// `IN` - internet
    In,
    /// Anything else; recorded on parse failure, rejected by the serializer
    #[default]
    Unknown,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::In => f.write_str("IN"),
            NetworkType::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

/// Address type of a connection information field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AddressType {
    /// `IP4`
    IpV4,
    /// `IP6`
    IpV6,
    /// Anything else; recorded on parse failure, rejected by the serializer
    #[default]
    Unknown,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressType::IpV4 => f.write_str("IP4"),
            AddressType::IpV6 => f.write_str("IP6"),
            AddressType::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

/// One raw `type=value` line as yielded by the tokenizer
///
/// The tokenizer does not validate `kind` against the known tag set; dispatch
/// on the `TYPE_*` constants is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SdpLine<'a> {
    /// Single-character type tag, e.g. `b'v'`
    pub kind: u8,
    /// Line value with the `T=` prefix and the line terminator stripped
    pub value: &'a str,
}

/// `c=` connection information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConnectionInfo<'a> {
    /// Network type token; must be [`NetworkType::In`] to serialize
    pub network_type: NetworkType,
    /// Address type token; must be `IpV4` or `IpV6` to serialize
    pub address_type: AddressType,
    /// Connection address; `None` until parsed, and rejected by the
    /// serializer while `None`
    pub address: Option<&'a str>,
}

/// `o=` originator and session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Originator<'a> {
    /// User name token, `-` when the originating host has no user concept
    pub user_name: &'a str,
    /// Numeric session identifier
    pub session_id: u64,
    /// Version number of this session description
    pub session_version: u64,
    /// Originating host address; must satisfy the [`ConnectionInfo`]
    /// serialization invariant before the record can be serialized
    pub connection_info: ConnectionInfo<'a>,
}

/// `b=` bandwidth information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BandwidthInfo<'a> {
    /// Bandwidth type token, e.g. `CT` or `AS`
    pub bw_type: &'a str,
    /// Bandwidth value in kilobits per second
    pub value: u64,
}

/// `t=` session activity interval
///
/// Start and stop are NTP-style timestamps; their epoch semantics are not
/// validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeDescription {
    /// Session start time
    pub start_time: u64,
    /// Session stop time
    pub stop_time: u64,
}

/// `a=` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute<'a> {
    /// Attribute name
    pub name: &'a str,
    /// Attribute value; `None` for flag attributes such as `a=recvonly`,
    /// which carry no `:` separator - a valid state, not an error
    pub value: Option<&'a str>,
}

/// `m=` media description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Media<'a> {
    /// Media name, e.g. `audio` or `video`
    pub media: &'a str,
    /// Transport port
    pub port: u16,
    /// Number of ports from the `/<count>` suffix of the port token.
    /// `0` means the suffix was absent on the wire; a literal `/0` cannot
    /// be distinguished from no suffix at all. Serialization emits the
    /// suffix only when this is non-zero.
    pub port_num: u16,
    /// Transport protocol token, e.g. `RTP/AVP`
    pub protocol: &'a str,
    /// Media format list tail, left unparsed
    pub fmt: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unpopulated_state() {
        let conn = ConnectionInfo::default();
        assert_eq!(conn.network_type, NetworkType::Unknown);
        assert_eq!(conn.address_type, AddressType::Unknown);
        assert_eq!(conn.address, None);

        let originator = Originator::default();
        assert_eq!(originator.user_name, "");
        assert_eq!(originator.session_id, 0);
        assert_eq!(originator.connection_info, conn);

        let attribute = Attribute::default();
        assert_eq!(attribute.name, "");
        assert_eq!(attribute.value, None);

        let media = Media::default();
        assert_eq!(media.port, 0);
        assert_eq!(media.port_num, 0);
    }

    #[test]
    fn test_wire_spellings() {
        assert_eq!(NetworkType::In.to_string(), "IN");
        assert_eq!(AddressType::IpV4.to_string(), "IP4");
        assert_eq!(AddressType::IpV6.to_string(), "IP6");
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(TYPE_VERSION, b'v');
        assert_eq!(TYPE_ORIGINATOR, b'o');
        assert_eq!(TYPE_MEDIA, b'm');
        assert_eq!(TYPE_ATTRIBUTE, b'a');
    }
}
