//! Enhets-/skalanormalisering for råserier fra leverandøren.
//!
//! Prosentaktige serier kan komme som 0–1 eller 0–100; beslutningen tas per
//! batch, ikke per sample. En batch med blandede skalaer blir stille feil –
//! kjent begrensning, pinnet i test.

/// Terskel for å tolke hele batchen som brøkskala.
const FRACTIONAL_MAX: f64 = 1.01;

/// Reskaler en prosentbatch til 0–100.
/// Maks |definert verdi| ≤ 1.01 → hele batchen ganges med 100, ellers urørt.
pub fn normalize_percent_batch(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut max_abs: Option<f64> = None;
    for v in values.iter().flatten() {
        if v.is_finite() {
            let a = v.abs();
            max_abs = Some(match max_abs {
                Some(m) if m >= a => m,
                _ => a,
            });
        }
    }

    match max_abs {
        Some(m) if m <= FRACTIONAL_MAX => values
            .iter()
            .map(|v| v.map(|x| x * 100.0))
            .collect(),
        _ => values.to_vec(),
    }
}

/// Meter → kilometer, ubetinget per sample (uavhengig av størrelsesorden).
pub fn meters_to_km(values: &[Option<f64>]) -> Vec<Option<f64>> {
    values.iter().map(|v| v.map(|x| x / 1000.0)).collect()
}
