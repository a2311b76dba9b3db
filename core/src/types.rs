use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Gjeldende versjon for eksporterte/importerte parameterbundler.
pub const BUNDLE_VERSION: u32 = 1;

/// De seks værfaktorene som inngår i sammensatt score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKey {
    HighCloud,
    MidCloud,
    LowCloud,
    Precipitation,
    Visibility,
    Wind,
}

impl FactorKey {
    pub const ALL: [FactorKey; 6] = [
        FactorKey::HighCloud,
        FactorKey::MidCloud,
        FactorKey::LowCloud,
        FactorKey::Precipitation,
        FactorKey::Visibility,
        FactorKey::Wind,
    ];

    /// Nøkkel slik den står i bundle-filformatet.
    pub fn key(self) -> &'static str {
        match self {
            FactorKey::HighCloud => "high_cloud",
            FactorKey::MidCloud => "mid_cloud",
            FactorKey::LowCloud => "low_cloud",
            FactorKey::Precipitation => "precipitation",
            FactorKey::Visibility => "visibility",
            FactorKey::Wind => "wind",
        }
    }

    /// Visningsnavn for forklaringstabellen.
    pub fn label(self) -> &'static str {
        match self {
            FactorKey::HighCloud => "Høye skyer",
            FactorKey::MidCloud => "Midlere skyer",
            FactorKey::LowCloud => "Lave skyer",
            FactorKey::Precipitation => "Nedbørssjanse",
            FactorKey::Visibility => "Sikt",
            FactorKey::Wind => "Vind",
        }
    }

    pub fn is_cloud(self) -> bool {
        matches!(
            self,
            FactorKey::HighCloud | FactorKey::MidCloud | FactorKey::LowCloud
        )
    }
}

/// Ikke-negative vekter per faktor. Summen trenger ikke være 1.0 –
/// normalisering er en eksplisitt operasjon, ikke en invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub high_cloud: f64,
    pub mid_cloud: f64,
    pub low_cloud: f64,
    pub precipitation: f64,
    pub visibility: f64,
    pub wind: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            high_cloud: 0.35,
            mid_cloud: 0.25,
            low_cloud: 0.15,
            precipitation: 0.10,
            visibility: 0.07,
            wind: 0.08,
        }
    }
}

impl Weights {
    pub fn get(&self, key: FactorKey) -> f64 {
        match key {
            FactorKey::HighCloud => self.high_cloud,
            FactorKey::MidCloud => self.mid_cloud,
            FactorKey::LowCloud => self.low_cloud,
            FactorKey::Precipitation => self.precipitation,
            FactorKey::Visibility => self.visibility,
            FactorKey::Wind => self.wind,
        }
    }

    pub fn set(&mut self, key: FactorKey, value: f64) {
        match key {
            FactorKey::HighCloud => self.high_cloud = value,
            FactorKey::MidCloud => self.mid_cloud = value,
            FactorKey::LowCloud => self.low_cloud = value,
            FactorKey::Precipitation => self.precipitation = value,
            FactorKey::Visibility => self.visibility = value,
            FactorKey::Wind => self.wind = value,
        }
    }

    pub fn sum(&self) -> f64 {
        FactorKey::ALL.iter().map(|&k| self.get(k)).sum()
    }
}

/// Responskurve som mapper aggregert råverdi til normalisert score i [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreModel {
    /// Topp (score 1) ved `ideal`, lineært ned mot 0 ved `ideal ± tolerance`.
    Triangular { ideal: f64, tolerance: f64 },
    /// Speilvendt triangulær – score 0 ved `ideal`, mot 1 ved toleransegrensen.
    InverseTriangular { ideal: f64, tolerance: f64 },
    /// 0 ved/under `threshold`, lineært opp til 1 ved `full`.
    ThresholdUp { threshold: f64, full: f64 },
    /// 1 ved/under `min`, lineært ned til 0 ved `max`.
    ThresholdDown { min: f64, max: f64 },
}

impl ScoreModel {
    /// Sjekk modellinvariantene. Feilårsak som snake_case-streng.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            ScoreModel::Triangular { tolerance, .. }
            | ScoreModel::InverseTriangular { tolerance, .. } => {
                if !tolerance.is_finite() || tolerance <= 0.0 {
                    return Err("tolerance_not_positive".into());
                }
            }
            ScoreModel::ThresholdUp { threshold, full } => {
                if !threshold.is_finite() || !full.is_finite() || full <= threshold {
                    return Err("full_not_above_threshold".into());
                }
            }
            ScoreModel::ThresholdDown { min, max } => {
                if !min.is_finite() || !max.is_finite() || max <= min {
                    return Err("max_not_above_min".into());
                }
            }
        }
        Ok(())
    }
}

/// Scoringmodell per faktor. Fast nøkkelsett – ukjente nøkler avvises ved
/// deserialisering i stedet for å ignoreres stille.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactorModels {
    pub high_cloud: ScoreModel,
    pub mid_cloud: ScoreModel,
    pub low_cloud: ScoreModel,
    pub precipitation: ScoreModel,
    pub visibility: ScoreModel,
    pub wind: ScoreModel,
}

impl Default for FactorModels {
    fn default() -> Self {
        Self {
            high_cloud: ScoreModel::Triangular {
                ideal: 50.0,
                tolerance: 20.0,
            },
            mid_cloud: ScoreModel::Triangular {
                ideal: 40.0,
                tolerance: 20.0,
            },
            // Lave skyer: mindre er bedre – triangulær sentrert i 0 gir
            // trekk for alt over null.
            low_cloud: ScoreModel::Triangular {
                ideal: 0.0,
                tolerance: 20.0,
            },
            precipitation: ScoreModel::ThresholdDown {
                min: 0.0,
                max: 100.0,
            },
            visibility: ScoreModel::ThresholdUp {
                threshold: 5.0,
                full: 15.0,
            },
            wind: ScoreModel::Triangular {
                ideal: 4.0,
                tolerance: 4.0,
            },
        }
    }
}

impl FactorModels {
    pub fn get(&self, key: FactorKey) -> &ScoreModel {
        match key {
            FactorKey::HighCloud => &self.high_cloud,
            FactorKey::MidCloud => &self.mid_cloud,
            FactorKey::LowCloud => &self.low_cloud,
            FactorKey::Precipitation => &self.precipitation,
            FactorKey::Visibility => &self.visibility,
            FactorKey::Wind => &self.wind,
        }
    }

    pub fn set(&mut self, key: FactorKey, model: ScoreModel) {
        match key {
            FactorKey::HighCloud => self.high_cloud = model,
            FactorKey::MidCloud => self.mid_cloud = model,
            FactorKey::LowCloud => self.low_cloud = model,
            FactorKey::Precipitation => self.precipitation = model,
            FactorKey::Visibility => self.visibility = model,
            FactorKey::Wind => self.wind = model,
        }
    }
}

/// Versjonert snapshot av vekter + modeller for eksport/import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterBundle {
    pub version: u32,
    pub weights: Weights,
    pub models: FactorModels,
}

impl Default for ParameterBundle {
    fn default() -> Self {
        Self {
            version: BUNDLE_VERSION,
            weights: Weights::default(),
            models: FactorModels::default(),
        }
    }
}

/// Aggregat for én faktor i én dags solnedgangsvindu.
/// Fraværende aggregat (ingen definerte samples i vinduet) representeres som
/// `None` hos brukeren – aldri som nuller, siden 0 er en gyldig verdi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

/// Aggregatene for alle seks faktorer i én dag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorAggregates {
    pub high_cloud: Option<DailyAggregate>,
    pub mid_cloud: Option<DailyAggregate>,
    pub low_cloud: Option<DailyAggregate>,
    pub precipitation: Option<DailyAggregate>,
    pub visibility: Option<DailyAggregate>,
    pub wind: Option<DailyAggregate>,
}

impl FactorAggregates {
    pub fn get(&self, key: FactorKey) -> Option<&DailyAggregate> {
        match key {
            FactorKey::HighCloud => self.high_cloud.as_ref(),
            FactorKey::MidCloud => self.mid_cloud.as_ref(),
            FactorKey::LowCloud => self.low_cloud.as_ref(),
            FactorKey::Precipitation => self.precipitation.as_ref(),
            FactorKey::Visibility => self.visibility.as_ref(),
            FactorKey::Wind => self.wind.as_ref(),
        }
    }

    pub fn set(&mut self, key: FactorKey, agg: Option<DailyAggregate>) {
        match key {
            FactorKey::HighCloud => self.high_cloud = agg,
            FactorKey::MidCloud => self.mid_cloud = agg,
            FactorKey::LowCloud => self.low_cloud = agg,
            FactorKey::Precipitation => self.precipitation = agg,
            FactorKey::Visibility => self.visibility = agg,
            FactorKey::Wind => self.wind = agg,
        }
    }
}

/// Én rad i forklaringstabellen: normalisert score, vekt og bidrag
/// (avrundet til én desimal), pluss notat når data manglet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationRow {
    pub key: FactorKey,
    pub label: String,
    pub score: f64,
    pub weight: f64,
    pub contribution: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationTable {
    pub rows: Vec<ExplanationRow>,
    pub total: u8,
    pub formula: String,
}

/// Kvalitativ merkelapp – trappetrinn av totalscore med inklusive nedre grenser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Exceptional,
    Great,
    Good,
    Fair,
    Poor,
}

impl Label {
    pub fn from_total(total: u8) -> Self {
        if total >= 85 {
            Label::Exceptional
        } else if total >= 70 {
            Label::Great
        } else if total >= 55 {
            Label::Good
        } else if total >= 40 {
            Label::Fair
        } else {
            Label::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Exceptional => "exceptional",
            Label::Great => "great",
            Label::Good => "good",
            Label::Fair => "fair",
            Label::Poor => "poor",
        }
    }
}

/// Ferdig vurdering for én dag. Bygges på nytt ved hver endring av input –
/// aldri mutert etter konstruksjon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunsetPrediction {
    pub date: NaiveDate,
    pub sunset: DateTime<Utc>,
    pub score: u8,
    pub label: Label,
    pub aggregates: FactorAggregates,
    pub explanation: ExplanationTable,
}
