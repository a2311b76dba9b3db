use chrono::{DateTime, Duration, Utc};

/// Velg indeksene i det symmetriske vinduet rundt solnedgang,
/// `sunset − halvbredde ≤ t ≤ sunset + halvbredde` (inklusiv i begge ender).
/// Tom liste betyr at dagen skal hoppes over – ingen minimumsterskel for
/// antall samples ellers.
pub fn select_window_indices(
    timestamps: &[DateTime<Utc>],
    sunset: DateTime<Utc>,
    half_width_min: i64,
) -> Vec<usize> {
    let half = Duration::minutes(half_width_min);
    let lo = sunset - half;
    let hi = sunset + half;

    timestamps
        .iter()
        .enumerate()
        .filter(|(_, t)| **t >= lo && **t <= hi)
        .map(|(i, _)| i)
        .collect()
}
