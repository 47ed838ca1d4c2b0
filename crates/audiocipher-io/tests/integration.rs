//! Asset export/import and WAV round trips through the codecs.

use audiocipher_codec::{Encoder, SpectralDecoder, morse_decode, morse_encode};
use audiocipher_core::{AudioBuffer, Scale, Scheme};
use audiocipher_io::{
    AudioSink, Error, MemorySink, asset_path, export_assets, load_tone_bank, read_wav, write_wav,
};
use tempfile::TempDir;

#[test]
fn test_export_writes_every_asset() {
    let dir = TempDir::new().unwrap();
    let written = export_assets(dir.path(), Scheme::Beeps).unwrap();
    assert_eq!(written.len(), 64 + 2);
    assert!(written.iter().all(|p| p.is_file()));
    assert!(asset_path(dir.path(), Scheme::Beeps, "gap").is_file());
    assert!(asset_path(dir.path(), Scheme::Beeps, "left_square_bracket").is_file());

    let gap = read_wav(asset_path(dir.path(), Scheme::Beeps, "gap")).unwrap();
    assert_eq!(gap.len(), 8820);
}

#[test]
fn test_loaded_bank_encodes_like_synthesized_bank() {
    let dir = TempDir::new().unwrap();
    export_assets(dir.path(), Scheme::Modulated).unwrap();

    let bank = load_tone_bank(dir.path(), Scheme::Modulated).unwrap();
    let from_assets = Encoder::with_bank(bank);
    let synthesized = Encoder::new(Scheme::Modulated).unwrap();

    let text = "the quick brown fox, 42!";
    let a = from_assets.encode(text);
    let b = synthesized.encode(text);
    assert_eq!(a, b);
}

#[test]
fn test_missing_asset_is_reported() {
    let dir = TempDir::new().unwrap();
    export_assets(dir.path(), Scheme::NonHuman).unwrap();
    let removed = asset_path(dir.path(), Scheme::NonHuman, "q");
    std::fs::remove_file(&removed).unwrap();

    match load_tone_bank(dir.path(), Scheme::NonHuman) {
        Err(Error::AssetMissing(path)) => assert_eq!(path, removed),
        other => panic!("expected AssetMissing, got {other:?}"),
    }
}

#[test]
fn test_asset_at_wrong_sample_rate_is_rejected() {
    let dir = TempDir::new().unwrap();
    export_assets(dir.path(), Scheme::Beeps).unwrap();
    let b = asset_path(dir.path(), Scheme::Beeps, "b");
    write_wav(&b, &AudioBuffer::silence(48000, 100)).unwrap();

    match load_tone_bank(dir.path(), Scheme::Beeps) {
        Err(Error::AssetFormat { path, reason }) => {
            assert_eq!(path, b);
            assert!(reason.contains("48000"), "reason: {reason}");
        }
        other => panic!("expected AssetFormat, got {other:?}"),
    }
}

#[test]
fn test_asset_with_wrong_length_is_rejected() {
    let dir = TempDir::new().unwrap();
    export_assets(dir.path(), Scheme::Modulated).unwrap();
    let gap = asset_path(dir.path(), Scheme::Modulated, "gap");
    // a symbol-length tone where the 200 ms gap belongs
    write_wav(&gap, &AudioBuffer::silence(44100, 100)).unwrap();

    match load_tone_bank(dir.path(), Scheme::Modulated) {
        Err(Error::AssetFormat { path, .. }) => assert_eq!(path, gap),
        other => panic!("expected AssetFormat, got {other:?}"),
    }
}

#[test]
fn test_exported_message_decodes_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("message.wav");
    let encoder = Encoder::new(Scheme::NonHuman).unwrap();
    write_wav(&path, &encoder.encode("covert channel 7")).unwrap();

    let loaded = read_wav(&path).unwrap();
    assert_eq!(loaded.origin(), None);
    let text = SpectralDecoder::new(Scheme::NonHuman).decode(&loaded).unwrap();
    assert_eq!(text, "covert channel 7");
}

#[test]
fn test_morse_message_decodes_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("morse.wav");
    let scale = Scale::new(
        "D Major",
        [293.66, 329.63, 369.99, 392.0, 440.0, 493.88, 554.37, 587.33],
    );
    write_wav(&path, &morse_encode("sos", &scale).unwrap()).unwrap();
    assert_eq!(morse_decode(&read_wav(&path).unwrap()).unwrap(), "SOS");
}

#[test]
fn test_memory_sink_plays_loaded_wav() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tone.wav");
    let audio = Encoder::new(Scheme::Beeps).unwrap().encode("a");
    write_wav(&path, &audio).unwrap();

    let mut sink = MemorySink::new();
    sink.load(read_wav(&path).unwrap()).unwrap();
    sink.play().unwrap();
    while sink.is_busy() {}
    assert_eq!(sink.played()[0].samples(), audio.samples());
}
