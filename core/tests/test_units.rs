use glowcast_core::{meters_to_km, normalize_percent_batch};

#[test]
fn fractional_batch_is_rescaled_to_percent() {
    let batch = vec![Some(0.3), Some(0.6), Some(0.9)];
    let out = normalize_percent_batch(&batch);
    assert_eq!(out, vec![Some(30.0), Some(60.0), Some(90.0)]);
}

#[test]
fn percent_batch_is_left_unchanged() {
    let batch = vec![Some(30.0), Some(60.0), Some(90.0)];
    let out = normalize_percent_batch(&batch);
    assert_eq!(out, batch);
}

#[test]
fn gaps_survive_rescaling() {
    let batch = vec![Some(0.5), None, Some(1.0)];
    let out = normalize_percent_batch(&batch);
    assert_eq!(out, vec![Some(50.0), None, Some(100.0)]);
}

#[test]
fn all_undefined_batch_is_untouched() {
    let batch: Vec<Option<f64>> = vec![None, None];
    let out = normalize_percent_batch(&batch);
    assert_eq!(out, batch);
}

// Kjent begrensning: beslutningen tas per batch. En batch som blander
// brøk- og prosentskala tolkes som prosent, og brøkverdiene blir stående
// feil. Pinnet her med vilje – ikke "fikset".
#[test]
fn mixed_scale_batch_keeps_fractions_wrong_known_limitation() {
    let batch = vec![Some(0.5), Some(50.0)];
    let out = normalize_percent_batch(&batch);
    assert_eq!(out, vec![Some(0.5), Some(50.0)]);
}

#[test]
fn boundary_at_one_point_zero_one_is_fractional() {
    let batch = vec![Some(1.01)];
    assert_eq!(normalize_percent_batch(&batch), vec![Some(101.0)]);
    let batch = vec![Some(1.02)];
    assert_eq!(normalize_percent_batch(&batch), vec![Some(1.02)]);
}

#[test]
fn meters_become_kilometers_unconditionally() {
    let batch = vec![Some(10_000.0), None, Some(500.0)];
    let out = meters_to_km(&batch);
    assert_eq!(out, vec![Some(10.0), None, Some(0.5)]);
}
