use crate::types::{
    ExplanationRow, ExplanationTable, FactorAggregates, FactorKey, Label, ParameterBundle,
    ScoreModel,
};

/// Nøytral score for skyfaktorer når data mangler i vinduet.
pub const NEUTRAL_CLOUD_SCORE: f64 = 0.5;
/// Nøytral score for nedbør/sikt/vind når data mangler.
pub const NEUTRAL_AUX_SCORE: f64 = 0.6;

/// Nøytralverdien som substitueres for en faktor uten data.
pub fn neutral_score(key: FactorKey) -> f64 {
    if key.is_cloud() {
        NEUTRAL_CLOUD_SCORE
    } else {
        NEUTRAL_AUX_SCORE
    }
}

/// Evaluer én responskurve. `None`/NaN inn gir `None` ut – substitusjon av
/// nøytralverdi er kallerens ansvar, ikke modellens.
pub fn score_by_model(value: Option<f64>, model: &ScoreModel) -> Option<f64> {
    let v = value?;
    if !v.is_finite() {
        return None;
    }

    let s = match *model {
        ScoreModel::Triangular { ideal, tolerance } => {
            (1.0 - (v - ideal).abs() / tolerance).clamp(0.0, 1.0)
        }
        ScoreModel::InverseTriangular { ideal, tolerance } => {
            1.0 - (1.0 - (v - ideal).abs() / tolerance).clamp(0.0, 1.0)
        }
        ScoreModel::ThresholdUp { threshold, full } => {
            ((v - threshold) / (full - threshold)).clamp(0.0, 1.0)
        }
        ScoreModel::ThresholdDown { min, max } => {
            1.0 - ((v - min) / (max - min)).clamp(0.0, 1.0)
        }
    };
    Some(s)
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Kombiner de seks faktoraggregatene til totalscore 0–100 med full
/// forklaringstabell. Ren og deterministisk: samme input gir identisk
/// output, inkludert avrundingen.
///
/// `bidrag_i = round(score_i · vekt_i · 100, 1 desimal)`
/// `total = round(clamp(Σ bidrag_i, 0, 100))`
pub fn compose_score(
    aggregates: &FactorAggregates,
    params: &ParameterBundle,
) -> (u8, Label, ExplanationTable) {
    let mut rows = Vec::with_capacity(FactorKey::ALL.len());
    let mut sum = 0.0f64;

    for key in FactorKey::ALL {
        let raw = aggregates.get(key).map(|a| a.avg);
        let weight = params.weights.get(key);

        let (score, note) = match score_by_model(raw, params.models.get(key)) {
            Some(s) => (s, None),
            None => (neutral_score(key), Some("no data".to_string())),
        };

        let contribution = round1(score * weight * 100.0);
        sum += contribution;

        rows.push(ExplanationRow {
            key,
            label: key.label().to_string(),
            score,
            weight,
            contribution,
            note,
        });
    }

    let total = sum.clamp(0.0, 100.0).round() as u8;
    let formula = format!(
        "{} = {}",
        rows.iter()
            .map(|r| format!("{:.1}", r.contribution))
            .collect::<Vec<_>>()
            .join(" + "),
        total
    );
    let label = Label::from_total(total);

    (total, label, ExplanationTable { rows, total, formula })
}
