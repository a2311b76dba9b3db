use glowcast_core::{score_by_model, ScoreModel};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn triangular_hits_peak_zero_and_halfway() {
    let m = ScoreModel::Triangular {
        ideal: 50.0,
        tolerance: 20.0,
    };
    assert!(close(score_by_model(Some(50.0), &m).unwrap(), 1.0));
    assert!(close(score_by_model(Some(30.0), &m).unwrap(), 0.0));
    assert!(close(score_by_model(Some(70.0), &m).unwrap(), 0.0));
    assert!(close(score_by_model(Some(40.0), &m).unwrap(), 0.5));
    assert!(close(score_by_model(Some(60.0), &m).unwrap(), 0.5));
    // langt utenfor toleransen → klampet til 0, aldri negativ
    assert!(close(score_by_model(Some(-1000.0), &m).unwrap(), 0.0));
}

#[test]
fn inverse_triangular_mirrors_triangular() {
    let m = ScoreModel::InverseTriangular {
        ideal: 50.0,
        tolerance: 20.0,
    };
    assert!(close(score_by_model(Some(50.0), &m).unwrap(), 0.0));
    assert!(close(score_by_model(Some(70.0), &m).unwrap(), 1.0));
    assert!(close(score_by_model(Some(60.0), &m).unwrap(), 0.5));
}

#[test]
fn threshold_up_endpoints_and_monotonicity() {
    let m = ScoreModel::ThresholdUp {
        threshold: 5.0,
        full: 15.0,
    };
    assert!(close(score_by_model(Some(5.0), &m).unwrap(), 0.0));
    assert!(close(score_by_model(Some(15.0), &m).unwrap(), 1.0));
    assert!(close(score_by_model(Some(10.0), &m).unwrap(), 0.5));
    assert!(close(score_by_model(Some(2.0), &m).unwrap(), 0.0));
    assert!(close(score_by_model(Some(100.0), &m).unwrap(), 1.0));

    // ikke-avtagende over hele intervallet
    let mut prev = -1.0;
    for i in 0..=40 {
        let v = i as f64 * 0.5;
        let s = score_by_model(Some(v), &m).unwrap();
        assert!(s >= prev, "not monotone at {v}: {s} < {prev}");
        prev = s;
    }
}

#[test]
fn threshold_down_endpoints() {
    let m = ScoreModel::ThresholdDown {
        min: 0.0,
        max: 100.0,
    };
    assert!(close(score_by_model(Some(0.0), &m).unwrap(), 1.0));
    assert!(close(score_by_model(Some(100.0), &m).unwrap(), 0.0));
    assert!(close(score_by_model(Some(50.0), &m).unwrap(), 0.5));
    assert!(close(score_by_model(Some(-5.0), &m).unwrap(), 1.0));
}

#[test]
fn undefined_and_nan_give_none() {
    let m = ScoreModel::Triangular {
        ideal: 50.0,
        tolerance: 20.0,
    };
    assert!(score_by_model(None, &m).is_none());
    assert!(score_by_model(Some(f64::NAN), &m).is_none());
    assert!(score_by_model(Some(f64::INFINITY), &m).is_none());
}

#[test]
fn all_finite_inputs_stay_in_unit_interval() {
    let models = [
        ScoreModel::Triangular {
            ideal: 4.0,
            tolerance: 4.0,
        },
        ScoreModel::InverseTriangular {
            ideal: 4.0,
            tolerance: 4.0,
        },
        ScoreModel::ThresholdUp {
            threshold: 5.0,
            full: 15.0,
        },
        ScoreModel::ThresholdDown {
            min: 0.0,
            max: 100.0,
        },
    ];
    for m in &models {
        for v in [-1e9, -3.7, 0.0, 0.5, 4.0, 99.0, 1e9] {
            let s = score_by_model(Some(v), m).unwrap();
            assert!((0.0..=1.0).contains(&s), "{m:?} at {v} gave {s}");
        }
    }
}

#[test]
fn model_invariants_are_enforced() {
    assert!(ScoreModel::Triangular {
        ideal: 50.0,
        tolerance: 0.0
    }
    .validate()
    .is_err());
    assert!(ScoreModel::ThresholdUp {
        threshold: 15.0,
        full: 15.0
    }
    .validate()
    .is_err());
    assert!(ScoreModel::ThresholdDown {
        min: 100.0,
        max: 0.0
    }
    .validate()
    .is_err());
    assert!(ScoreModel::Triangular {
        ideal: 50.0,
        tolerance: 20.0
    }
    .validate()
    .is_ok());
}
