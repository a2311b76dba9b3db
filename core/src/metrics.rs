use once_cell::sync::Lazy;
use prometheus::{IntCounter, Opts, Registry};

/// Tellere for værhenting. Egen registry slik at tester kan holde sine egne
/// instanser uten global tilstand.
pub struct Metrics {
    pub registry: Registry,
    forecast_cache_hits: IntCounter,
    forecast_cache_misses: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let forecast_cache_hits = IntCounter::with_opts(Opts::new(
            "forecast_cache_hit_total",
            "Treff i lokal værcache",
        ))
        .expect("valid metric opts");
        let forecast_cache_misses = IntCounter::with_opts(Opts::new(
            "forecast_cache_miss_total",
            "Bom i lokal værcache (ny henting)",
        ))
        .expect("valid metric opts");

        registry
            .register(Box::new(forecast_cache_hits.clone()))
            .ok();
        registry
            .register(Box::new(forecast_cache_misses.clone()))
            .ok();

        Self {
            registry,
            forecast_cache_hits,
            forecast_cache_misses,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Delt default-instans for kallere som ikke bryr seg om egen registry.
pub static DEFAULT_METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

pub fn forecast_cache_hit_total(metrics: &Metrics) -> &IntCounter {
    &metrics.forecast_cache_hits
}

pub fn forecast_cache_miss_total(metrics: &Metrics) -> &IntCounter {
    &metrics.forecast_cache_misses
}
