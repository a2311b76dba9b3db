use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::FactorKey;

/// Én faktorsekvens, indeks-for-indeks justert mot `timestamps`.
/// `None` per sample = eksplisitt hull fra leverandøren.
pub type FactorSeries = Vec<Option<f64>>;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("series length mismatch: {name} has {got} samples, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        got: usize,
        expected: usize,
    },
    #[error("timestamps not ascending at index {index}")]
    NotAscending { index: usize },
}

/// Én times-serie for ett oppslag (sted + horisont). Immutabel snapshot:
/// en sekvens kan mangle helt, men aldri være delvis feiljustert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub timestamps: Vec<DateTime<Utc>>,
    pub cloud_total: Option<FactorSeries>,
    pub cloud_low: Option<FactorSeries>,
    pub cloud_mid: Option<FactorSeries>,
    pub cloud_high: Option<FactorSeries>,
    pub precipitation_prob: Option<FactorSeries>,
    /// Sikt i leverandørens native enhet (meter).
    pub visibility_m: Option<FactorSeries>,
    pub wind_speed_ms: Option<FactorSeries>,
}

impl HourlySeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Sekvensen for en scoret faktor (totalskydekke er ikke en faktor).
    pub fn factor(&self, key: FactorKey) -> Option<&FactorSeries> {
        match key {
            FactorKey::HighCloud => self.cloud_high.as_ref(),
            FactorKey::MidCloud => self.cloud_mid.as_ref(),
            FactorKey::LowCloud => self.cloud_low.as_ref(),
            FactorKey::Precipitation => self.precipitation_prob.as_ref(),
            FactorKey::Visibility => self.visibility_m.as_ref(),
            FactorKey::Wind => self.wind_speed_ms.as_ref(),
        }
    }

    /// Verifiser justering og tidsorden før serien slippes inn i pipelinen.
    pub fn validate(&self) -> Result<(), SeriesError> {
        let expected = self.timestamps.len();
        let named: [(&'static str, Option<&FactorSeries>); 7] = [
            ("cloud_total", self.cloud_total.as_ref()),
            ("cloud_low", self.cloud_low.as_ref()),
            ("cloud_mid", self.cloud_mid.as_ref()),
            ("cloud_high", self.cloud_high.as_ref()),
            ("precipitation_prob", self.precipitation_prob.as_ref()),
            ("visibility_m", self.visibility_m.as_ref()),
            ("wind_speed_ms", self.wind_speed_ms.as_ref()),
        ];
        for (name, seq) in named {
            if let Some(seq) = seq {
                if seq.len() != expected {
                    return Err(SeriesError::LengthMismatch {
                        name,
                        got: seq.len(),
                        expected,
                    });
                }
            }
        }
        for i in 1..self.timestamps.len() {
            if self.timestamps[i] <= self.timestamps[i - 1] {
                return Err(SeriesError::NotAscending { index: i });
            }
        }
        Ok(())
    }
}
