//! SDP serializer: bounded writer and field serializers
//!
//! The writer appends one wire line per call into a caller-supplied buffer,
//! or just counts bytes in sizing mode. Every operation either commits its
//! whole line and advances the cursor, or leaves both the cursor and the
//! buffer untouched - there are no partial writes.
//!
//! Each `add_*` enforces the inverse of its parser's acceptance rules before
//! touching the buffer, so a record that serializes will parse back to
//! itself.

use std::fmt::{self, Write as _};

use crate::error::{Result, SdpError};
use crate::types::{
    AddressType, Attribute, BandwidthInfo, ConnectionInfo, Media, NetworkType, Originator,
    TimeDescription,
};

/// Destination of the writer: real storage, or byte counting only.
///
/// The sizing variant holds no buffer at all, so "never dereferenced in
/// dry-run mode" is a compile-time fact rather than a null check.
#[derive(Debug)]
enum WriteTarget<'buf> {
    Sizing,
    Buffer(&'buf mut [u8]),
}

/// Cursor over a caller-supplied output buffer
///
/// The documented idiom for sizing without an allocator: run the same
/// `add_*` sequence once in [`sizing`](Self::sizing) mode, allocate one byte
/// more than the reported length, then run it again into the real buffer.
///
/// ```
/// use sdp_codec::SdpSerializerContext;
///
/// let mut sizing = SdpSerializerContext::sizing();
/// sizing.add_u32(b'v', 0)?;
/// let needed = sizing.len() + 1;
///
/// let mut storage = vec![0u8; needed];
/// let mut ctx = SdpSerializerContext::new(&mut storage);
/// ctx.add_u32(b'v', 0)?;
/// let (message, length) = ctx.finalize();
/// assert_eq!(message.unwrap(), b"v=0\r\n");
/// assert_eq!(length, 5);
/// # Ok::<(), sdp_codec::SdpError>(())
/// ```
#[derive(Debug)]
pub struct SdpSerializerContext<'buf> {
    target: WriteTarget<'buf>,
    current_index: usize,
}

/// Counts rendered bytes without storing them.
#[derive(Default)]
struct ByteCounter(usize);

impl fmt::Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Writes rendered bytes into a pre-measured slice.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }
}

/// Rejects a connection info record the wire format cannot express,
/// returning its address on success. Shared by the originator and
/// connection info serializers.
fn checked_address<'a>(conn_info: &ConnectionInfo<'a>) -> Result<&'a str> {
    if conn_info.network_type != NetworkType::In {
        return Err(SdpError::BadParam);
    }
    if !matches!(
        conn_info.address_type,
        AddressType::IpV4 | AddressType::IpV6
    ) {
        return Err(SdpError::BadParam);
    }
    conn_info.address.ok_or(SdpError::BadParam)
}

impl<'buf> SdpSerializerContext<'buf> {
    /// Creates a writer over caller-owned storage.
    pub fn new(buffer: &'buf mut [u8]) -> Self {
        Self {
            target: WriteTarget::Buffer(buffer),
            current_index: 0,
        }
    }

    /// Creates a sizing-only writer: `add_*` calls accumulate the length
    /// the message would need, and nothing is stored.
    pub fn sizing() -> Self {
        Self {
            target: WriteTarget::Sizing,
            current_index: 0,
        }
    }

    /// Bytes rendered (or counted, in sizing mode) so far.
    pub fn len(&self) -> usize {
        self.current_index
    }

    /// Returns `true` if nothing has been rendered yet.
    pub fn is_empty(&self) -> bool {
        self.current_index == 0
    }

    /// Measures one line, bounds-checks it, then commits it.
    ///
    /// A real buffer must keep at least one spare byte beyond the rendered
    /// text, so `rendered >= remaining` fails. Sizing mode never fails on
    /// capacity.
    fn write_line<F>(&mut self, render: F) -> Result<()>
    where
        F: Fn(&mut dyn fmt::Write) -> fmt::Result,
    {
        let mut counter = ByteCounter::default();
        render(&mut counter)?;
        let rendered = counter.0;

        match &mut self.target {
            WriteTarget::Sizing => {
                self.current_index += rendered;
            }
            WriteTarget::Buffer(buffer) => {
                let remaining = buffer.len() - self.current_index;
                if rendered >= remaining {
                    return Err(SdpError::OutOfMemory);
                }
                let mut sink = SliceWriter {
                    buf: &mut buffer[self.current_index..self.current_index + rendered],
                    pos: 0,
                };
                render(&mut sink)?;
                self.current_index += rendered;
            }
        }
        Ok(())
    }

    /// Appends `T=<value>` for an opaque value, e.g. an `s=` or `u=` line.
    ///
    /// # Errors
    ///
    /// [`SdpError::BadParam`] for an empty value; [`SdpError::OutOfMemory`]
    /// when the line does not fit.
    pub fn add_buffer(&mut self, kind: u8, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(SdpError::BadParam);
        }
        self.write_line(|w| write!(w, "{}={}\r\n", kind as char, value))
    }

    /// Appends `T=<value>` for a 32-bit value, e.g. the `v=` line.
    pub fn add_u32(&mut self, kind: u8, value: u32) -> Result<()> {
        self.write_line(|w| write!(w, "{}={}\r\n", kind as char, value))
    }

    /// Appends `T=<value>` for a 64-bit value.
    pub fn add_u64(&mut self, kind: u8, value: u64) -> Result<()> {
        self.write_line(|w| write!(w, "{}={}\r\n", kind as char, value))
    }

    /// Appends `T=<user> <sessionId> <sessionVersion> IN IP{4|6} <address>`.
    ///
    /// # Errors
    ///
    /// [`SdpError::BadParam`] when the embedded connection info does not
    /// satisfy the serialization invariant (network type `IN`, address type
    /// `IP4`/`IP6`, address present), checked before anything is written.
    pub fn add_originator(&mut self, kind: u8, originator: &Originator<'_>) -> Result<()> {
        let conn_info = &originator.connection_info;
        let address = checked_address(conn_info)?;
        self.write_line(|w| {
            write!(
                w,
                "{}={} {} {} {} {} {}\r\n",
                kind as char,
                originator.user_name,
                originator.session_id,
                originator.session_version,
                conn_info.network_type,
                conn_info.address_type,
                address
            )
        })
    }

    /// Appends `T=IN IP{4|6} <address>`.
    ///
    /// # Errors
    ///
    /// [`SdpError::BadParam`] under the same invariant as
    /// [`add_originator`](Self::add_originator).
    pub fn add_connection_info(&mut self, kind: u8, conn_info: &ConnectionInfo<'_>) -> Result<()> {
        let address = checked_address(conn_info)?;
        self.write_line(|w| {
            write!(
                w,
                "{}={} {} {}\r\n",
                kind as char,
                conn_info.network_type,
                conn_info.address_type,
                address
            )
        })
    }

    /// Appends `T=<bwType>:<value>`.
    pub fn add_bandwidth_info(
        &mut self,
        kind: u8,
        bandwidth_info: &BandwidthInfo<'_>,
    ) -> Result<()> {
        self.write_line(|w| {
            write!(
                w,
                "{}={}:{}\r\n",
                kind as char,
                bandwidth_info.bw_type,
                bandwidth_info.value
            )
        })
    }

    /// Appends `T=<startTime> <stopTime>`.
    pub fn add_time_active(
        &mut self,
        kind: u8,
        time_description: &TimeDescription,
    ) -> Result<()> {
        self.write_line(|w| {
            write!(
                w,
                "{}={} {}\r\n",
                kind as char,
                time_description.start_time,
                time_description.stop_time
            )
        })
    }

    /// Appends `T=<name>` or `T=<name>:<value>`; the `:` is emitted iff the
    /// attribute carries a value.
    pub fn add_attribute(&mut self, kind: u8, attribute: &Attribute<'_>) -> Result<()> {
        self.write_line(|w| match attribute.value {
            Some(value) => write!(w, "{}={}:{}\r\n", kind as char, attribute.name, value),
            None => write!(w, "{}={}\r\n", kind as char, attribute.name),
        })
    }

    /// Appends `T=<media> <port>[/<portNum>] <protocol> <fmt>`.
    ///
    /// The `/<portNum>` suffix is emitted only when `port_num` is non-zero;
    /// a record parsed from a line with an explicit `/0` therefore does not
    /// round-trip the suffix (see [`Media::port_num`]).
    pub fn add_media(&mut self, kind: u8, media: &Media<'_>) -> Result<()> {
        self.write_line(|w| {
            if media.port_num != 0 {
                write!(
                    w,
                    "{}={} {}/{} {} {}\r\n",
                    kind as char, media.media, media.port, media.port_num, media.protocol,
                    media.fmt
                )
            } else {
                write!(
                    w,
                    "{}={} {} {} {}\r\n",
                    kind as char, media.media, media.port, media.protocol, media.fmt
                )
            }
        })
    }

    /// Consumes the writer and returns the rendered message with its length.
    ///
    /// In sizing mode the message slice is `None` and only the accumulated
    /// length is meaningful. The slice borrows the caller's buffer and is
    /// valid exactly as long as that buffer.
    pub fn finalize(self) -> (Option<&'buf [u8]>, usize) {
        match self.target {
            WriteTarget::Sizing => (None, self.current_index),
            WriteTarget::Buffer(buffer) => {
                let length = self.current_index;
                (Some(&buffer[..length]), length)
            }
        }
    }
}
