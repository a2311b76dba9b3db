use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::aggregate::aggregate_window;
use crate::geocode::ReverseGeocoder;
use crate::score::compose_score;
use crate::series::{FactorSeries, HourlySeries};
use crate::sun::SunsetProvider;
use crate::types::{FactorAggregates, FactorKey, ParameterBundle, SunsetPrediction};
use crate::units::{meters_to_km, normalize_percent_batch};
use crate::weather::{validate_coordinates, ForecastProvider};
use crate::weather_api::OpenMeteoClient;
use crate::window::select_window_indices;

/// Skalér én faktorsekvens til kanonisk enhet: prosentbatcher til 0–100,
/// sikt fra meter til km, vind står i m/s.
fn normalized_factor(series: &HourlySeries, key: FactorKey) -> Option<FactorSeries> {
    let raw = series.factor(key)?;
    let out = match key {
        FactorKey::Visibility => meters_to_km(raw),
        FactorKey::Wind => raw.clone(),
        _ => normalize_percent_batch(raw),
    };
    Some(out)
}

/// Input til den rene evalueringen. Alt leses herfra – ingen global tilstand.
#[derive(Clone)]
pub struct EvaluateInputs<'a> {
    pub series: &'a HourlySeries,
    /// (sivil dag, solnedgangsinstant) per ønsket dag, instanten i samme
    /// epoch som serien. Dagen er den etterspurte lokale kalenderdagen –
    /// den utledes aldri fra UTC-instanten, som kan falle i neste UTC-døgn
    /// vest for Greenwich.
    pub sunsets: &'a [(NaiveDate, DateTime<Utc>)],
    /// Halv vindusbredde i minutter rundt solnedgang.
    pub window_half_width_min: i64,
    pub params: &'a ParameterBundle,
}

/// Ren, synkron evaluering: serie + solnedganger + parametre → én vurdering
/// per dag. Dager med tomt vindu produserer ingen vurdering (hoppes over).
/// Regner alltid alt på nytt – ingen inkrementell cache.
pub fn evaluate(inputs: &EvaluateInputs) -> Vec<SunsetPrediction> {
    // Normaliser batchene én gang for hele serien, ikke per dag
    let factors: Vec<(FactorKey, Option<FactorSeries>)> = FactorKey::ALL
        .iter()
        .map(|&key| (key, normalized_factor(inputs.series, key)))
        .collect();

    let mut out = Vec::with_capacity(inputs.sunsets.len());

    for &(date, sunset) in inputs.sunsets {
        let indices = select_window_indices(
            &inputs.series.timestamps,
            sunset,
            inputs.window_half_width_min,
        );
        if indices.is_empty() {
            // Horisonten dekker ikke dagen → ingen SunsetPrediction
            continue;
        }

        let mut aggregates = FactorAggregates::default();
        for (key, values) in &factors {
            aggregates.set(*key, aggregate_window(values.as_ref(), &indices));
        }

        let (score, label, explanation) = compose_score(&aggregates, inputs.params);

        out.push(SunsetPrediction {
            date,
            sunset,
            score,
            label,
            aggregates,
            explanation,
        });
    }

    out
}

pub struct ForecastInputs<'a> {
    pub lat: f64,
    pub lon: f64,
    /// Varselhorisont i dager.
    pub days: u8,
    pub window_half_width_min: i64,
    pub params: &'a ParameterBundle,
    /// Værtilbyder (prod: OpenMeteoClient, test: StaticForecastProvider).
    /// `None` → live Open-Meteo.
    pub forecast: Option<&'a dyn ForecastProvider>,
    pub sunsets: &'a dyn SunsetProvider,
    /// Best-effort stedsnavn; `None` hopper over geokoding.
    pub geocoder: Option<&'a dyn ReverseGeocoder>,
}

#[derive(Debug, Clone)]
pub struct ForecastOutputs {
    pub predictions: Vec<SunsetPrediction>,
    pub place_name: Option<String>,
    /// Menneskelesbar feilstatus for visning; `None` når alt gikk bra.
    /// Hentefeil havner her – de propageres aldri inn i scoringen.
    pub status: Option<String>,
}

impl ForecastOutputs {
    fn failed(status: String) -> Self {
        Self {
            predictions: Vec::new(),
            place_name: None,
            status: Some(status),
        }
    }
}

/// Orkestrering rundt den rene kjernen: valider koordinater, hent serie,
/// slå opp solnedgang per dag, evaluer, og slå opp stedsnavn best-effort.
pub fn forecast_sunsets(inputs: ForecastInputs) -> ForecastOutputs {
    if let Err(e) = validate_coordinates(inputs.lat, inputs.lon) {
        return ForecastOutputs::failed(e.to_string());
    }

    let fallback = OpenMeteoClient::new();
    let provider: &dyn ForecastProvider = inputs.forecast.unwrap_or(&fallback);

    let series = match provider.get_hourly_forecast(inputs.lat, inputs.lon, inputs.days) {
        Some(s) => s,
        None => return ForecastOutputs::failed("værvarsel kunne ikke hentes".to_string()),
    };
    if let Err(e) = series.validate() {
        return ForecastOutputs::failed(e.to_string());
    }
    if series.is_empty() {
        return ForecastOutputs::failed("tomt værvarsel fra leverandør".to_string());
    }

    // Første dag i serien definerer dag 0
    let start: NaiveDate = series.timestamps[0].date_naive();
    let mut sunsets = Vec::with_capacity(inputs.days as usize);
    for d in 0..inputs.days {
        let Some(date) = start.checked_add_days(Days::new(u64::from(d))) else {
            break;
        };
        match inputs.sunsets.sunset_utc(date, inputs.lat, inputs.lon) {
            Some(instant) => sunsets.push((date, instant)),
            None => log::warn!("ingen solnedgang for {date}, dagen hoppes over"),
        }
    }

    let predictions = evaluate(&EvaluateInputs {
        series: &series,
        sunsets: &sunsets,
        window_half_width_min: inputs.window_half_width_min,
        params: inputs.params,
    });

    let place_name = inputs
        .geocoder
        .and_then(|g| g.place_name(inputs.lat, inputs.lon));

    ForecastOutputs {
        predictions,
        place_name,
        status: None,
    }
}
