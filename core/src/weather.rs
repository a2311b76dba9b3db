use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::metrics::{
    forecast_cache_hit_total, forecast_cache_miss_total, Metrics, DEFAULT_METRICS,
};
use crate::series::HourlySeries;

#[derive(Debug, Error)]
pub enum CoordError {
    #[error("non-finite coordinate: lat={lat}, lon={lon}")]
    NonFinite { lat: f64, lon: f64 },
    #[error("coordinate out of range: lat={lat}, lon={lon}")]
    OutOfRange { lat: f64, lon: f64 },
}

/// Avvis ugyldige koordinater ved inngangen, før noe nettkall gjøres.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), CoordError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(CoordError::NonFinite { lat, lon });
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(CoordError::OutOfRange { lat, lon });
    }
    Ok(())
}

/// Værtilbyder: timeserie for sted + horisont.
/// `None` betyr at varselet ikke kunne hentes – aldri panikk.
pub trait ForecastProvider {
    fn get_hourly_forecast(&self, lat: f64, lon: f64, days: u8) -> Option<HourlySeries>;
}

/// Statisk tilbyder for tester.
#[derive(Debug, Clone, Default)]
pub struct StaticForecastProvider {
    pub series: Option<HourlySeries>,
}

impl ForecastProvider for StaticForecastProvider {
    fn get_hourly_forecast(&self, _lat: f64, _lon: f64, _days: u8) -> Option<HourlySeries> {
        self.series.clone()
    }
}

/// Memoiserende wrapper rundt en vilkårlig tilbyder, nøklet på
/// (lat, lon, horisont). Teller treff/bom i Prometheus.
#[derive(Debug, Default)]
pub struct CachedForecastClient<P> {
    inner: P,
    cache: Arc<Mutex<HashMap<(OrderedFloat<f64>, OrderedFloat<f64>, u8), HourlySeries>>>,
}

impl<P: ForecastProvider> CachedForecastClient<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get_hourly_forecast(
        &self,
        lat: f64,
        lon: f64,
        days: u8,
        metrics: &Metrics,
    ) -> Option<HourlySeries> {
        let key = (OrderedFloat(lat), OrderedFloat(lon), days);
        let mut cache = self.cache.lock().ok()?;

        if let Some(series) = cache.get(&key) {
            forecast_cache_hit_total(metrics).inc();
            return Some(series.clone());
        }

        forecast_cache_miss_total(metrics).inc();
        let fetched = self.inner.get_hourly_forecast(lat, lon, days)?;
        cache.insert(key, fetched.clone());
        Some(fetched)
    }
}

/// Kallere uten egen registry teller i den delte default-instansen.
impl<P: ForecastProvider> ForecastProvider for CachedForecastClient<P> {
    fn get_hourly_forecast(&self, lat: f64, lon: f64, days: u8) -> Option<HourlySeries> {
        CachedForecastClient::get_hourly_forecast(self, lat, lon, days, &DEFAULT_METRICS)
    }
}
