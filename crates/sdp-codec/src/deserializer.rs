//! SDP deserializer: line tokenizer and field parsers
//!
//! The tokenizer pulls one `type=value` line per call out of a flat message
//! buffer, returning borrowed slices - no bytes are copied. The field
//! parsers then interpret a tokenized value into the typed records from
//! [`crate::types`].
//!
//! Parsers fill their output record in place. On error, every field parsed
//! before the failing point stays populated, so a caller can still inspect
//! the prefix of a half-broken line.

use crate::error::{Result, SdpError};
use crate::types::{
    AddressType, Attribute, BandwidthInfo, ConnectionInfo, Media, NetworkType, Originator,
    SdpLine, TimeDescription,
};

/// Cursor over a complete in-memory SDP message
///
/// The cursor only moves forward, and only on success; a malformed line
/// leaves it untouched, so calling [`get_next`](Self::get_next) again after
/// an error re-fails identically.
///
/// ```
/// use sdp_codec::{SdpDeserializerContext, types::TYPE_VERSION};
///
/// let mut ctx = SdpDeserializerContext::new("v=0\r\ns=talk\r\n")?;
/// let line = ctx.get_next()?.unwrap();
/// assert_eq!(line.kind, TYPE_VERSION);
/// assert_eq!(line.value, "0");
/// # Ok::<(), sdp_codec::SdpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SdpDeserializerContext<'a> {
    message: &'a str,
    current_index: usize,
}

impl<'a> SdpDeserializerContext<'a> {
    /// Creates a tokenizer over `message`.
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::BadParam`] for an empty message.
    pub fn new(message: &'a str) -> Result<Self> {
        if message.is_empty() {
            return Err(SdpError::BadParam);
        }
        Ok(Self {
            message,
            current_index: 0,
        })
    }

    /// Current byte offset into the message.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the next `type=value` line, or `Ok(None)` once the cursor has
    /// cleanly reached the end of the message.
    ///
    /// Lines may be terminated by `\n` or `\r\n`; the returned value excludes
    /// the `T=` prefix and the terminator. The type tag is not validated
    /// against the known SDP tag set.
    ///
    /// # Errors
    ///
    /// - [`SdpError::MalformedNotEnoughInfo`] - fewer than 3 bytes remain
    /// - [`SdpError::MalformedEqualNotFound`] - second byte of the line is not `=`
    /// - [`SdpError::MalformedNewlineNotFound`] - no `\n` before the buffer end
    /// - [`SdpError::MalformedNoValue`] - the line carries an empty value
    pub fn get_next(&mut self) -> Result<Option<SdpLine<'a>>> {
        let bytes = self.message.as_bytes();

        if self.current_index == bytes.len() {
            return Ok(None);
        }

        // Minimal valid line is "T=v\n".
        if bytes.len() - self.current_index < 3 {
            return Err(SdpError::MalformedNotEnoughInfo);
        }

        if bytes[self.current_index + 1] != b'=' {
            return Err(SdpError::MalformedEqualNotFound);
        }

        let mut i = self.current_index + 2;
        while i < bytes.len() && bytes[i] != b'\n' {
            i += 1;
        }
        if i == bytes.len() {
            return Err(SdpError::MalformedNewlineNotFound);
        }

        let value_end = if bytes[i - 1] == b'\r' { i - 1 } else { i };
        if value_end == self.current_index + 2 {
            return Err(SdpError::MalformedNoValue);
        }

        let line = SdpLine {
            kind: bytes[self.current_index],
            value: &self.message[self.current_index + 2..value_end],
        };
        self.current_index = i + 1;
        Ok(Some(line))
    }
}

/// Iterates lines until clean end-of-message.
///
/// A malformed line is yielded as `Err` and, because the cursor does not
/// move on error, would be yielded again on the next call; stop at the
/// first `Err` (as `?` and `collect::<Result<_, _>>()` do).
impl<'a> Iterator for SdpDeserializerContext<'a> {
    type Item = Result<SdpLine<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.get_next().transpose()
    }
}

fn is_scan_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// `sscanf("%llu")`-compatible decimal scan: skip leading whitespace,
/// require at least one digit, consume digits, ignore the rest of the
/// slice. Overflow saturates rather than failing.
fn scan_u64(input: &str) -> Option<u64> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_scan_space(bytes[i]) {
        i += 1;
    }
    if i == bytes.len() || !bytes[i].is_ascii_digit() {
        return None;
    }
    let mut value: u64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(bytes[i] - b'0'));
        i += 1;
    }
    Some(value)
}

fn scan_u16(input: &str) -> Option<u16> {
    scan_u64(input).map(|v| u16::try_from(v).unwrap_or(u16::MAX))
}

/// Parses an `o=` value into `originator`.
///
/// Splits on the first three spaces into user name, session id and session
/// version, then hands the remainder to [`parse_connection_info`].
///
/// # Errors
///
/// - [`SdpError::MalformedNoSessionId`] / [`SdpError::MalformedNoSessionVersion`]
///   when the respective token is not a decimal number
/// - [`SdpError::MalformedNotEnoughInfo`] when the value ends before the
///   connection info suffix
/// - any [`parse_connection_info`] error for the suffix
pub fn parse_originator<'a>(value: &'a str, originator: &mut Originator<'a>) -> Result<()> {
    let bytes = value.as_bytes();
    let mut start = 0;
    let mut num_spaces = 0u32;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b' ' {
            num_spaces += 1;

            if num_spaces == 1 {
                originator.user_name = &value[start..i];
            } else if num_spaces == 2 {
                originator.session_id =
                    scan_u64(&value[start..]).ok_or(SdpError::MalformedNoSessionId)?;
            } else {
                originator.session_version =
                    scan_u64(&value[start..]).ok_or(SdpError::MalformedNoSessionVersion)?;
                start = i + 1;
                break;
            }

            start = i + 1;
        }
        i += 1;
    }

    if i < bytes.len() {
        parse_connection_info(&value[start..], &mut originator.connection_info)
    } else {
        Err(SdpError::MalformedNotEnoughInfo)
    }
}

/// Parses a `c=` value into `conn_info`.
///
/// The first token must be exactly `IN`, the second exactly `IP4` or `IP6`;
/// everything after the second space becomes the address. On a failed token
/// match the corresponding field is recorded as `Unknown` before the error
/// returns.
///
/// # Errors
///
/// - [`SdpError::MalformedInvalidNetworkType`] / [`SdpError::MalformedInvalidAddressType`]
/// - [`SdpError::MalformedRedundantInfo`] - a third space (trailing tokens)
/// - [`SdpError::MalformedNotEnoughInfo`] - fewer than two spaces
pub fn parse_connection_info<'a>(
    value: &'a str,
    conn_info: &mut ConnectionInfo<'a>,
) -> Result<()> {
    let bytes = value.as_bytes();
    let mut start = 0;
    let mut num_spaces = 0u32;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b' ' {
            num_spaces += 1;

            if num_spaces == 1 {
                if &value[start..i] == "IN" {
                    conn_info.network_type = NetworkType::In;
                } else {
                    conn_info.network_type = NetworkType::Unknown;
                    return Err(SdpError::MalformedInvalidNetworkType);
                }
            } else if num_spaces == 2 {
                match &value[start..i] {
                    "IP4" => conn_info.address_type = AddressType::IpV4,
                    "IP6" => conn_info.address_type = AddressType::IpV6,
                    _ => {
                        conn_info.address_type = AddressType::Unknown;
                        return Err(SdpError::MalformedInvalidAddressType);
                    }
                }
            } else {
                return Err(SdpError::MalformedRedundantInfo);
            }

            start = i + 1;
        }
        i += 1;
    }

    if num_spaces == 2 {
        conn_info.address = Some(&value[start..]);
        Ok(())
    } else {
        Err(SdpError::MalformedNotEnoughInfo)
    }
}

/// Parses a `b=` value into `bandwidth_info`.
///
/// # Errors
///
/// - [`SdpError::MalformedNotEnoughInfo`] - no `:` separator
/// - [`SdpError::MalformedInvalidBandwidth`] - non-numeric value after the
///   `:`; `bw_type` is already populated at that point
pub fn parse_bandwidth_info<'a>(
    value: &'a str,
    bandwidth_info: &mut BandwidthInfo<'a>,
) -> Result<()> {
    match value.find(':') {
        Some(i) => {
            bandwidth_info.bw_type = &value[..i];
            bandwidth_info.value =
                scan_u64(&value[i + 1..]).ok_or(SdpError::MalformedInvalidBandwidth)?;
            Ok(())
        }
        None => Err(SdpError::MalformedNotEnoughInfo),
    }
}

/// Parses a `t=` value into `time_description`.
///
/// # Errors
///
/// - [`SdpError::MalformedNotEnoughInfo`] - no space separator
/// - [`SdpError::MalformedInvalidStartTime`] / [`SdpError::MalformedInvalidStopTime`]
pub fn parse_time_active(value: &str, time_description: &mut TimeDescription) -> Result<()> {
    match value.find(' ') {
        Some(i) => {
            time_description.start_time =
                scan_u64(value).ok_or(SdpError::MalformedInvalidStartTime)?;
            time_description.stop_time =
                scan_u64(&value[i + 1..]).ok_or(SdpError::MalformedInvalidStopTime)?;
            Ok(())
        }
        None => Err(SdpError::MalformedNotEnoughInfo),
    }
}

/// Parses an `a=` value into `attribute`.
///
/// Splits at the first `:` into name and value. Without a `:` the whole
/// span is the name and the value is `None` - a valid flag attribute such
/// as `a=recvonly`, not an error. This function cannot fail.
pub fn parse_attribute<'a>(value: &'a str, attribute: &mut Attribute<'a>) -> Result<()> {
    match value.find(':') {
        Some(i) => {
            attribute.name = &value[..i];
            attribute.value = Some(&value[i + 1..]);
        }
        None => {
            attribute.name = value;
            attribute.value = None;
        }
    }
    Ok(())
}

/// Parses an `m=` value into `media`.
///
/// Splits on the first three spaces into media name, port token and
/// protocol; the remainder is the format list, left unparsed. The port
/// token may carry a `/<count>` suffix; without one, `port_num` stays 0.
///
/// # Errors
///
/// - [`SdpError::MalformedInvalidPort`] - aborts the scan immediately
/// - [`SdpError::MalformedInvalidPortNum`] - the scan still runs to the
///   protocol token before the error is returned; `fmt` is left empty
/// - [`SdpError::MalformedNotEnoughInfo`] - fewer than three spaces
pub fn parse_media<'a>(value: &'a str, media: &mut Media<'a>) -> Result<()> {
    let bytes = value.as_bytes();
    let mut start = 0;
    let mut num_spaces = 0u32;
    let mut i = 0;
    let mut deferred = None;

    while i < bytes.len() {
        if bytes[i] == b' ' {
            num_spaces += 1;

            if num_spaces == 1 {
                media.media = &value[start..i];
            } else if num_spaces == 2 {
                media.port = scan_u16(&value[start..]).ok_or(SdpError::MalformedInvalidPort)?;
                media.port_num = 0;

                if let Some(j) = bytes[start..i].iter().position(|&b| b == b'/') {
                    match scan_u16(&value[start + j + 1..]) {
                        Some(port_num) => media.port_num = port_num,
                        None => deferred = Some(SdpError::MalformedInvalidPortNum),
                    }
                }
            } else {
                media.protocol = &value[start..i];
                start = i + 1;
                break;
            }

            start = i + 1;
        }
        i += 1;
    }

    if let Some(err) = deferred {
        return Err(err);
    }

    if i < bytes.len() {
        media.fmt = &value[start..];
        Ok(())
    } else {
        Err(SdpError::MalformedNotEnoughInfo)
    }
}
