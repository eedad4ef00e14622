//! End-to-end coverage: tokenize a complete message, parse every field,
//! serialize everything back, and check the wire bytes match exactly.

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
    SdpError, SdpSerializerContext, TimeDescription,
};

const OFFER: &str = "v=0\r\n\
                     o=alice 2890844526 2890844527 IN IP4 198.51.100.1\r\n\
                     s=talk\r\n\
                     c=IN IP4 198.51.100.1\r\n\
                     b=AS:128\r\n\
                     t=2873397496 2873404696\r\n\
                     a=recvonly\r\n\
                     a=rtpmap:0 PCMU/8000\r\n\
                     m=audio 49170 RTP/AVP 0\r\n\
                     m=video 9/2 UDP/TLS/RTP/SAVPF 96 97\r\n";

/// Re-renders a tokenized line through its typed record where one exists,
/// or as an opaque value line otherwise.
fn reserialize_line(out: &mut SdpSerializerContext<'_>, kind: u8, value: &str) {
    match kind {
        TYPE_ORIGINATOR => {
            let mut originator = Originator::default();
            parse_originator(value, &mut originator).unwrap();
            out.add_originator(kind, &originator).unwrap();
        }
        TYPE_CONNECTION_INFO => {
            let mut conn_info = ConnectionInfo::default();
            parse_connection_info(value, &mut conn_info).unwrap();
            out.add_connection_info(kind, &conn_info).unwrap();
        }
        TYPE_BANDWIDTH => {
            let mut bandwidth_info = BandwidthInfo::default();
            parse_bandwidth_info(value, &mut bandwidth_info).unwrap();
            out.add_bandwidth_info(kind, &bandwidth_info).unwrap();
        }
        TYPE_TIME_ACTIVE => {
            let mut time_description = TimeDescription::default();
            parse_time_active(value, &mut time_description).unwrap();
            out.add_time_active(kind, &time_description).unwrap();
        }
        TYPE_ATTRIBUTE => {
            let mut attribute = Attribute::default();
            parse_attribute(value, &mut attribute).unwrap();
            out.add_attribute(kind, &attribute).unwrap();
        }
        TYPE_MEDIA => {
            let mut media = Media::default();
            parse_media(value, &mut media).unwrap();
            out.add_media(kind, &media).unwrap();
        }
        _ => out.add_buffer(kind, value).unwrap(),
    }
}

#[test]
fn full_offer_round_trips_byte_for_byte() {
    // Pass 1: measure.
    let mut sizing = SdpSerializerContext::sizing();
    let mut ctx = SdpDeserializerContext::new(OFFER).unwrap();
    while let Some(line) = ctx.get_next().unwrap() {
        reserialize_line(&mut sizing, line.kind, line.value);
    }
    let (_, needed) = sizing.finalize();
    assert_eq!(needed, OFFER.len());

    // Pass 2: fill a buffer sized off the measurement.
    let mut storage = vec![0u8; needed + 1];
    let mut out = SdpSerializerContext::new(&mut storage);
    let mut ctx = SdpDeserializerContext::new(OFFER).unwrap();
    while let Some(line) = ctx.get_next().unwrap() {
        reserialize_line(&mut out, line.kind, line.value);
    }
    let (message, length) = out.finalize();
    assert_eq!(length, OFFER.len());
    assert_eq!(message.unwrap(), OFFER.as_bytes());
}

#[test]
fn tokenizer_consumes_every_byte() {
    // Each successful call advances the cursor over the full line including
    // its terminator; consumed extents tile the message with no gaps.
    let mut ctx = SdpDeserializerContext::new(OFFER).unwrap();
    let mut covered = 0;
    while let Some(_line) = ctx.get_next().unwrap() {
        assert!(ctx.current_index() > covered);
        covered = ctx.current_index();
    }
    assert_eq!(covered, OFFER.len());
}

#[test]
fn scenario_minimal_version_line() {
    let mut ctx = SdpDeserializerContext::new("v=2\r\n").unwrap();
    let line = ctx.get_next().unwrap().unwrap();
    assert_eq!(line.kind, b'v');
    assert_eq!(line.value, "2");
    assert_eq!(line.value.len(), 1);
    assert_eq!(ctx.current_index(), 5);
}

#[test]
fn scenario_originator_round_trip() {
    let wire = "o=Jode 4294967296 4294967297 IN IP4 192.168.123.456\r\n";
    let mut ctx = SdpDeserializerContext::new(wire).unwrap();
    let line = ctx.get_next().unwrap().unwrap();
    assert_eq!(line.kind, b'o');

    let mut originator = Originator::default();
    parse_originator(line.value, &mut originator).unwrap();
    assert_eq!(originator.user_name, "Jode");
    assert_eq!(originator.session_id, 4294967296);
    assert_eq!(originator.session_version, 4294967297);
    assert_eq!(originator.connection_info.address, Some("192.168.123.456"));

    let mut buffer = [0u8; 128];
    let mut out = SdpSerializerContext::new(&mut buffer);
    out.add_originator(b'o', &originator).unwrap();
    let (message, _) = out.finalize();
    assert_eq!(message.unwrap(), wire.as_bytes());
}

#[test]
fn scenario_media_with_port_count() {
    let mut media = Media::default();
    parse_media("video 9/2 UDP/TLS/RTP/SAVPF 96 97", &mut media).unwrap();
    assert_eq!(media.media, "video");
    assert_eq!(media.port, 9);
    assert_eq!(media.port_num, 2);
    assert_eq!(media.protocol, "UDP/TLS/RTP/SAVPF");
    assert_eq!(media.fmt, "96 97");
}

#[test]
fn scenario_flag_attribute_is_valid() {
    let mut attribute = Attribute::default();
    parse_attribute("recvonly", &mut attribute).unwrap();
    assert_eq!(attribute.name, "recvonly");
    assert_eq!(attribute.value, None);
}

#[test]
fn scenario_attribute_buffer_boundary() {
    let attribute = Attribute {
        name: "rtpmap",
        value: Some("126 telephone-event/8000"),
    };
    let wire = "a=rtpmap:126 telephone-event/8000\r\n";

    // Capacity one byte beyond the rendered text succeeds.
    let mut enough = vec![0u8; wire.len() + 1];
    let mut out = SdpSerializerContext::new(&mut enough);
    out.add_attribute(b'a', &attribute).unwrap();
    let (message, _) = out.finalize();
    assert_eq!(message.unwrap(), wire.as_bytes());

    // One byte less reports out-of-memory without touching the cursor.
    let mut short = vec![0u8; wire.len()];
    let mut out = SdpSerializerContext::new(&mut short);
    assert_eq!(
        out.add_attribute(b'a', &attribute).unwrap_err(),
        SdpError::OutOfMemory
    );
    assert_eq!(out.len(), 0);
}

#[test]
fn malformed_result_repeats_without_moving_cursor() {
    let mut ctx = SdpDeserializerContext::new("v=0\r\nbogus line").unwrap();
    assert!(ctx.get_next().unwrap().is_some());
    let after_first = ctx.current_index();
    for _ in 0..3 {
        assert_eq!(
            ctx.get_next().unwrap_err(),
            SdpError::MalformedEqualNotFound
        );
        assert_eq!(ctx.current_index(), after_first);
    }
}

#[test]
fn dry_run_matches_materialized_delta_per_field() {
    let media = Media {
        media: "audio",
        port: 49170,
        port_num: 0,
        protocol: "RTP/AVP",
        fmt: "0 8 97",
    };

    let mut sizing = SdpSerializerContext::sizing();
    sizing.add_media(b'm', &media).unwrap();
    let counted = sizing.len();

    let mut buffer = [0u8; 128];
    let mut out = SdpSerializerContext::new(&mut buffer);
    let before = out.len();
    out.add_media(b'm', &media).unwrap();
    assert_eq!(out.len() - before, counted);
}

#[test]
fn lenient_parse_rejected_by_serializer() {
    // A record that failed its parse carries Unknown discriminants, and the
    // serializer refuses it; diagnostics stay readable, the wire stays clean.
    let mut conn_info = ConnectionInfo::default();
    let err = parse_connection_info("ATM IP4 10.0.0.1", &mut conn_info).unwrap_err();
    assert!(err.is_malformed());

    let mut buffer = [0u8; 64];
    let mut out = SdpSerializerContext::new(&mut buffer);
    assert_eq!(
        out.add_connection_info(b'c', &conn_info).unwrap_err(),
        SdpError::BadParam
    );
}
