//! Builds an answer with the two-pass idiom: run the serializer once in
//! sizing mode, allocate one byte more than it reports, then run the same
//! sequence into the real buffer.
//!
//! Run with: `cargo run --example build_answer`

use anyhow::{Context, Result};
use tracing::info;

use sdp_codec::types::{
    TYPE_ATTRIBUTE, TYPE_CONNECTION_INFO, TYPE_MEDIA, TYPE_ORIGINATOR, TYPE_SESSION_NAME,
    TYPE_TIME_ACTIVE, TYPE_VERSION,
};
use sdp_codec::{
    AddressType, Attribute, ConnectionInfo, Media, NetworkType, Originator, SdpSerializerContext,
    TimeDescription,
};

fn render(out: &mut SdpSerializerContext<'_>) -> Result<()> {
    let conn_info = ConnectionInfo {
        network_type: NetworkType::In,
        address_type: AddressType::IpV4,
        address: Some("203.0.113.7"),
    };
    let originator = Originator {
        user_name: "bob",
        session_id: 3724394400,
        session_version: 3724394405,
        connection_info: conn_info,
    };

    out.add_u32(TYPE_VERSION, 0)?;
    out.add_originator(TYPE_ORIGINATOR, &originator)?;
    out.add_buffer(TYPE_SESSION_NAME, "-")?;
    out.add_connection_info(TYPE_CONNECTION_INFO, &conn_info)?;
    out.add_time_active(
        TYPE_TIME_ACTIVE,
        &TimeDescription {
            start_time: 0,
            stop_time: 0,
        },
    )?;
    out.add_media(
        TYPE_MEDIA,
        &Media {
            media: "audio",
            port: 49172,
            port_num: 0,
            protocol: "RTP/AVP",
            fmt: "0",
        },
    )?;
    out.add_attribute(
        TYPE_ATTRIBUTE,
        &Attribute {
            name: "rtpmap",
            value: Some("0 PCMU/8000"),
        },
    )?;
    out.add_attribute(
        TYPE_ATTRIBUTE,
        &Attribute {
            name: "sendrecv",
            value: None,
        },
    )?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Pass 1: measure.
    let mut sizing = SdpSerializerContext::sizing();
    render(&mut sizing).context("sizing pass")?;
    let needed = sizing.len() + 1;
    info!(needed, "sizing pass complete");

    // Pass 2: materialize.
    let mut storage = vec![0u8; needed];
    let mut out = SdpSerializerContext::new(&mut storage);
    render(&mut out).context("fill pass")?;
    let (message, length) = out.finalize();
    let message = message.context("materialized writer always has a buffer")?;

    info!(length, "answer rendered");
    print!("{}", std::str::from_utf8(message)?);
    Ok(())
}
