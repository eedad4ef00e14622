//! Tokenizes a WebRTC-style offer and parses each line into its typed
//! record, logging what it finds.
//!
//! Run with: `cargo run --example parse_offer`

use anyhow::{Context, Result};
use tracing::{info, warn};

use sdp_codec::deserializer::{
    parse_attribute, parse_bandwidth_info, parse_connection_info, parse_media, parse_originator,
    parse_time_active,
};
use sdp_codec::types::{
    TYPE_ATTRIBUTE, TYPE_BANDWIDTH, TYPE_CONNECTION_INFO, TYPE_MEDIA, TYPE_ORIGINATOR,
    TYPE_TIME_ACTIVE,
};
use sdp_codec::{
    Attribute, BandwidthInfo, ConnectionInfo, Media, Originator, SdpDeserializerContext,
    TimeDescription,
};

const OFFER: &str = "v=0\r\n\
                     o=alice 2890844526 2890844527 IN IP4 198.51.100.1\r\n\
                     s=talk\r\n\
                     c=IN IP4 198.51.100.1\r\n\
                     b=AS:128\r\n\
                     t=0 0\r\n\
                     m=audio 49170 RTP/AVP 0 8 97\r\n\
                     a=rtpmap:0 PCMU/8000\r\n\
                     a=recvonly\r\n\
                     m=video 9/2 UDP/TLS/RTP/SAVPF 96 97\r\n\
                     a=rtpmap:96 VP8/90000\r\n";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut ctx = SdpDeserializerContext::new(OFFER).context("empty offer")?;

    while let Some(line) = ctx.get_next().context("tokenizing offer")? {
        match line.kind {
            TYPE_ORIGINATOR => {
                let mut originator = Originator::default();
                parse_originator(line.value, &mut originator).context("o= line")?;
                info!(
                    user = originator.user_name,
                    session_id = originator.session_id,
                    session_version = originator.session_version,
                    address = originator.connection_info.address,
                    "originator"
                );
            }
            TYPE_CONNECTION_INFO => {
                let mut conn_info = ConnectionInfo::default();
                parse_connection_info(line.value, &mut conn_info).context("c= line")?;
                info!(
                    network = %conn_info.network_type,
                    addr_type = %conn_info.address_type,
                    address = conn_info.address,
                    "connection info"
                );
            }
            TYPE_BANDWIDTH => {
                let mut bandwidth_info = BandwidthInfo::default();
                parse_bandwidth_info(line.value, &mut bandwidth_info).context("b= line")?;
                info!(
                    bw_type = bandwidth_info.bw_type,
                    kbps = bandwidth_info.value,
                    "bandwidth"
                );
            }
            TYPE_TIME_ACTIVE => {
                let mut time_description = TimeDescription::default();
                parse_time_active(line.value, &mut time_description).context("t= line")?;
                info!(
                    start = time_description.start_time,
                    stop = time_description.stop_time,
                    "time active"
                );
            }
            TYPE_ATTRIBUTE => {
                let mut attribute = Attribute::default();
                parse_attribute(line.value, &mut attribute).context("a= line")?;
                match attribute.value {
                    Some(value) => info!(name = attribute.name, value, "attribute"),
                    None => info!(name = attribute.name, "flag attribute"),
                }
            }
            TYPE_MEDIA => {
                let mut media = Media::default();
                parse_media(line.value, &mut media).context("m= line")?;
                info!(
                    media = media.media,
                    port = media.port,
                    port_num = media.port_num,
                    protocol = media.protocol,
                    fmt = media.fmt,
                    "media"
                );
            }
            other => {
                warn!(kind = %(other as char), value = line.value, "unparsed line");
            }
        }
    }

    info!(bytes = OFFER.len(), "offer fully consumed");
    Ok(())
}
