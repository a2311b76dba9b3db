use crate::series::FactorSeries;
use crate::types::DailyAggregate;

/// Aggreger én (ferdig normalisert) faktorsekvens over valgte indekser.
/// Udefinerte samples ekskluderes – de telles aldri som 0.
/// Tomt filtrert sett → `None` (0 er en gyldig domeneverdi, f.eks. 0 % skyer).
pub fn aggregate_window(series: Option<&FactorSeries>, indices: &[usize]) -> Option<DailyAggregate> {
    let series = series?;

    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &i in indices {
        if let Some(v) = series.get(i).copied().flatten() {
            if v.is_finite() {
                sum += v;
                cnt += 1;
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            }
        }
    }

    if cnt == 0 {
        None
    } else {
        Some(DailyAggregate {
            avg: sum / cnt as f64,
            min,
            max,
        })
    }
}
