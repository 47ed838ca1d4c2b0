//! Per-symbol tone asset files.
//!
//! Layout under an asset root:
//!
//! ```text
//! <root>/<scheme>/a.wav ... z.wav, 0.wav ... 9.wav,
//!                 exclamation.wav ... right_square_bracket.wav,
//!                 gap.wav, silence.wav
//! ```

use crate::{Error, Result, read_wav, write_wav};
use audiocipher_codec::{SymbolAlphabet, ToneBank};
use audiocipher_core::{AudioBuffer, SAMPLE_RATE, Scheme, samples_for_ms};
use audiocipher_synth::ToneSynthesizer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File stem of the word-gap tone.
pub const GAP_ASSET: &str = "gap";
/// File stem of the silence clip.
pub const SILENCE_ASSET: &str = "silence";

/// Directory holding one scheme's assets.
pub fn asset_dir(root: &Path, scheme: Scheme) -> PathBuf {
    root.join(scheme.name())
}

/// Path of one asset file.
pub fn asset_path(root: &Path, scheme: Scheme, stem: &str) -> PathBuf {
    asset_dir(root, scheme).join(format!("{stem}.wav"))
}

/// Synthesize and write every tone of `scheme` under `root`.
///
/// Returns the written paths.
pub fn export_assets(root: &Path, scheme: Scheme) -> Result<Vec<PathBuf>> {
    let bank = ToneBank::synthesize(&SymbolAlphabet::new(scheme), &ToneSynthesizer::default())?;
    export_bank(root, &bank, |_| {})
}

/// Write every tone of `bank` under `root`, calling `on_written` after each file.
pub fn export_bank(
    root: &Path,
    bank: &ToneBank,
    mut on_written: impl FnMut(&Path),
) -> Result<Vec<PathBuf>> {
    let scheme = bank.scheme();
    std::fs::create_dir_all(asset_dir(root, scheme))?;

    let alphabet = SymbolAlphabet::new(scheme);
    let mut written = Vec::with_capacity(bank.len() + 2);
    for (c, tone) in bank.tones() {
        let Some(symbol) = alphabet.lookup(c) else {
            debug!(symbol = ?c, "tone outside the alphabet, not exported");
            continue;
        };
        let path = asset_path(root, scheme, &symbol.name());
        write_wav(&path, tone)?;
        on_written(&path);
        written.push(path);
    }
    for (stem, buffer) in [(GAP_ASSET, bank.gap()), (SILENCE_ASSET, bank.silence())] {
        let path = asset_path(root, scheme, stem);
        write_wav(&path, buffer)?;
        on_written(&path);
        written.push(path);
    }

    info!(
        scheme = %scheme,
        files = written.len(),
        dir = %asset_dir(root, scheme).display(),
        "exported tone assets"
    );
    Ok(written)
}

/// Load a scheme's tone bank from assets under `root`.
///
/// Every symbol, the gap and the silence file must be present, at 44.1 kHz
/// and exactly as long as the scheme's tone of that kind.
pub fn load_tone_bank(root: &Path, scheme: Scheme) -> Result<ToneBank> {
    let alphabet = SymbolAlphabet::new(scheme);
    let params = alphabet.params();
    let tones = alphabet
        .symbols()
        .iter()
        .map(|s| {
            let path = asset_path(root, scheme, &s.name());
            Ok((s.character, read_asset(&path, params.symbol_ms)?))
        })
        .collect::<Result<Vec<_>>>()?;
    let gap = read_asset(&asset_path(root, scheme, GAP_ASSET), params.gap_ms)?;
    let silence = read_asset(&asset_path(root, scheme, SILENCE_ASSET), params.silence_ms)?;
    debug!(scheme = %scheme, tones = tones.len(), "loaded tone bank from assets");
    Ok(ToneBank::from_parts(scheme, tones, gap, silence))
}

fn read_asset(path: &Path, duration_ms: u32) -> Result<AudioBuffer> {
    if !path.is_file() {
        return Err(Error::AssetMissing(path.to_path_buf()));
    }
    let buffer = read_wav(path)?;
    if buffer.sample_rate() != SAMPLE_RATE {
        return Err(Error::AssetFormat {
            path: path.to_path_buf(),
            reason: format!("sample rate {} Hz, expected {SAMPLE_RATE} Hz", buffer.sample_rate()),
        });
    }
    let expected = samples_for_ms(SAMPLE_RATE, duration_ms);
    if buffer.len() != expected {
        return Err(Error::AssetFormat {
            path: path.to_path_buf(),
            reason: format!("{} samples, expected {expected}", buffer.len()),
        });
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_paths() {
        let root = Path::new("/tones");
        assert_eq!(
            asset_path(root, Scheme::NonHuman, "question_mark"),
            PathBuf::from("/tones/non_human/question_mark.wav")
        );
        assert_eq!(asset_dir(root, Scheme::Beeps), PathBuf::from("/tones/beeps"));
    }
}
