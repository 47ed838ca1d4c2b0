//! Amplitude dynamics for on/off keyed signals
//!
//! - Peak detection and peak normalization
//! - Threshold gating into a binary tone/silence trace
//! - Run-length segmentation of the trace

/// Compute peak level (maximum absolute value)
pub fn peak(signal: &[f32]) -> f32 {
    signal.iter().fold(0.0f32, |m, x| m.max(x.abs()))
}

/// Rectify and scale a signal so its peak is 1.0.
///
/// A silent (all-zero) or empty signal returns all zeros.
pub fn normalize(signal: &[f32]) -> Vec<f32> {
    let peak_val = peak(signal);
    if peak_val <= 0.0 {
        return vec![0.0; signal.len()];
    }
    signal.iter().map(|x| x.abs() / peak_val).collect()
}

/// Binary trace: `true` where the level is at or above `threshold`.
pub fn gate(levels: &[f32], threshold: f32) -> Vec<bool> {
    levels.iter().map(|&l| l >= threshold).collect()
}

/// A maximal span of identical gate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Whether the span is tone (`true`) or silence (`false`).
    pub on: bool,
    /// Index of the first sample in the span.
    pub start: usize,
    /// Number of samples in the span.
    pub len: usize,
}

impl Run {
    /// Duration of the run in seconds.
    pub fn duration_secs(&self, sample_rate: f32) -> f32 {
        self.len as f32 / sample_rate
    }
}

/// Split a binary trace at its change points.
pub fn runs(trace: &[bool]) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::new();
    for (i, &on) in trace.iter().enumerate() {
        match out.last_mut() {
            Some(run) if run.on == on => run.len += 1,
            _ => out.push(Run { on, start: i, len: 1 }),
        }
    }
    out
}

/// Absorb off-runs shorter than `min_gap` samples that sit between two
/// on-runs, merging all three into one on-run.
///
/// A gated tone dips below threshold near every zero crossing; this folds
/// those dips back into the tone while leaving real pauses intact. Leading
/// and trailing off-runs are never merged.
pub fn merge_short_gaps(runs: &[Run], min_gap: usize) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::with_capacity(runs.len());
    let mut i = 0;
    while i < runs.len() {
        let run = runs[i];
        let bridges = !run.on
            && run.len < min_gap
            && i + 1 < runs.len()
            && matches!(out.last(), Some(prev) if prev.on);
        if bridges {
            let next = runs[i + 1];
            if let Some(prev) = out.last_mut() {
                prev.len += run.len + next.len;
            }
            i += 2;
            continue;
        }
        match out.last_mut() {
            Some(prev) if prev.on == run.on => prev.len += run.len,
            _ => out.push(run),
        }
        i += 1;
    }
    out
}
