use chrono::{Duration, TimeZone, Utc};
use glowcast_core::select_window_indices;

#[test]
fn window_is_inclusive_both_ends() {
    let sunset = Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap();
    let timestamps = vec![
        sunset - Duration::minutes(91),
        sunset - Duration::minutes(30),
        sunset + Duration::minutes(89),
        sunset + Duration::minutes(91),
    ];
    let idx = select_window_indices(&timestamps, sunset, 90);
    assert_eq!(idx, vec![1, 2]);
}

#[test]
fn exact_boundary_samples_are_included() {
    let sunset = Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap();
    let timestamps = vec![
        sunset - Duration::minutes(90),
        sunset,
        sunset + Duration::minutes(90),
    ];
    let idx = select_window_indices(&timestamps, sunset, 90);
    assert_eq!(idx, vec![0, 1, 2]);
}

#[test]
fn horizon_outside_window_gives_empty_selection() {
    let sunset = Utc.with_ymd_and_hms(2026, 3, 5, 18, 0, 0).unwrap();
    // serie som slutter lenge før solnedgangsdagen
    let base = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let timestamps: Vec<_> = (0..48).map(|h| base + Duration::hours(h)).collect();
    let idx = select_window_indices(&timestamps, sunset, 90);
    assert!(idx.is_empty());
}

#[test]
fn single_qualifying_sample_is_enough() {
    // ingen minimumsterskel for antall samples i vinduet
    let sunset = Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap();
    let timestamps = vec![sunset + Duration::minutes(89)];
    let idx = select_window_indices(&timestamps, sunset, 90);
    assert_eq!(idx, vec![0]);
}
