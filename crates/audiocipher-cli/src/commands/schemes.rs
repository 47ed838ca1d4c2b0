//! Schemes command.

use audiocipher_core::Scheme;

pub fn run() -> anyhow::Result<()> {
    println!(
        "{:<10}  {:>9}  {:>9}  {:>9}  {:<8}  Modulation",
        "Scheme", "Base Hz", "Step Hz", "Gap Hz", "Waveform"
    );
    for scheme in Scheme::ALL {
        let p = scheme.params();
        let modulation = match p.modulation {
            Some(m) => format!("{} Hz, depth {}", m.frequency, m.depth),
            None => "none".to_string(),
        };
        println!(
            "{:<10}  {:>9.0}  {:>9.0}  {:>9.0}  {:<8}  {}",
            p.name,
            p.base_frequency,
            p.step,
            p.gap_frequency(),
            p.waveform.to_string(),
            modulation
        );
    }
    Ok(())
}
