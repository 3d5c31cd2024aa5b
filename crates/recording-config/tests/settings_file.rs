//! Settings files driving a conversion

use std::io::Write;

use legacy_format::{CompressionType, StreamInfo, StreamType};
use playback_conversions::{MetadataAssembler, Stream};
use recording_config::{parse_configuration_file, PlaybackSettings};
use tempfile::NamedTempFile;

fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn recorded_streams() -> Vec<StreamInfo> {
    vec![
        StreamInfo { stype: StreamType::Color, nframes: 120, ctype: CompressionType::H264 },
        StreamInfo { stype: StreamType::AuxColor, nframes: 120, ctype: CompressionType::H264 },
        StreamInfo { stype: StreamType::Depth, nframes: 120, ctype: CompressionType::Lzo },
    ]
}

#[test]
fn reads_pairs_from_disk() {
    let file =
        settings_file("# playback\nlog_level = debug\n\nrecording = /data/r200 capture.rssdk\n");
    let pairs = parse_configuration_file(file.path());
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs["log_level"], "debug");
    assert_eq!(pairs["recording"], "/data/r200capture.rssdk");
}

#[test]
fn default_settings_skip_aux_color() {
    let file = settings_file("log_level=warn\n");
    let settings = PlaybackSettings::load(file.path()).unwrap();
    assert_eq!(settings.log_level, "warn");

    let assembler: MetadataAssembler = MetadataAssembler::default();
    let streams = assembler
        .stream_infos(&recorded_streams(), settings.skip_unsupported_streams)
        .unwrap();
    let kinds: Vec<Stream> = streams.iter().map(|s| s.stream).collect();
    assert_eq!(kinds, vec![Stream::Color, Stream::Depth]);
}

#[test]
fn strict_settings_reject_aux_color() {
    let file = settings_file("skip_unsupported_streams = false\n");
    let settings = PlaybackSettings::load(file.path()).unwrap();

    let assembler: MetadataAssembler = MetadataAssembler::default();
    let err = assembler
        .stream_infos(&recorded_streams(), settings.skip_unsupported_streams)
        .unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = PlaybackSettings::load(dir.path().join("absent.conf")).unwrap();
    assert_eq!(settings, PlaybackSettings::default());
}
