use chrono::{Duration, TimeZone, Utc};
use glowcast_core::metrics::{
    forecast_cache_hit_total, forecast_cache_miss_total, Metrics, DEFAULT_METRICS,
};
use glowcast_core::{
    validate_coordinates, CachedForecastClient, CoordError, ForecastProvider, HourlySeries,
    SeriesError, StaticForecastProvider,
};

fn tiny_series() -> HourlySeries {
    let base = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    HourlySeries {
        timestamps: (0..3).map(|h| base + Duration::hours(h)).collect(),
        cloud_high: Some(vec![Some(50.0), Some(55.0), Some(45.0)]),
        ..HourlySeries::default()
    }
}

#[test]
fn cached_client_serves_second_fetch_from_cache() {
    let client = CachedForecastClient::new(StaticForecastProvider {
        series: Some(tiny_series()),
    });
    let metrics = Metrics::new();

    let first = client.get_hourly_forecast(59.91, 10.75, 3, &metrics);
    let second = client.get_hourly_forecast(59.91, 10.75, 3, &metrics);

    assert_eq!(first, second);
    assert_eq!(forecast_cache_miss_total(&metrics).get(), 1);
    assert_eq!(forecast_cache_hit_total(&metrics).get(), 1);
}

#[test]
fn different_lookup_keys_miss_separately() {
    let client = CachedForecastClient::new(StaticForecastProvider {
        series: Some(tiny_series()),
    });
    let metrics = Metrics::new();

    client.get_hourly_forecast(59.91, 10.75, 3, &metrics);
    client.get_hourly_forecast(59.91, 10.75, 5, &metrics);

    assert_eq!(forecast_cache_miss_total(&metrics).get(), 2);
    assert_eq!(forecast_cache_hit_total(&metrics).get(), 0);
}

#[test]
fn provider_trait_path_counts_in_shared_default_registry() {
    let client = CachedForecastClient::new(StaticForecastProvider {
        series: Some(tiny_series()),
    });
    let misses_before = forecast_cache_miss_total(&DEFAULT_METRICS).get();
    let hits_before = forecast_cache_hit_total(&DEFAULT_METRICS).get();

    // trait-kallet uten egen registry teller i DEFAULT_METRICS
    let provider: &dyn ForecastProvider = &client;
    assert!(provider.get_hourly_forecast(58.97, 5.73, 2).is_some());
    assert!(provider.get_hourly_forecast(58.97, 5.73, 2).is_some());

    assert_eq!(
        forecast_cache_miss_total(&DEFAULT_METRICS).get(),
        misses_before + 1
    );
    assert_eq!(
        forecast_cache_hit_total(&DEFAULT_METRICS).get(),
        hits_before + 1
    );
}

#[test]
fn coordinate_validation_rejects_bad_input() {
    assert!(validate_coordinates(59.91, 10.75).is_ok());
    assert!(matches!(
        validate_coordinates(f64::NAN, 10.75),
        Err(CoordError::NonFinite { .. })
    ));
    assert!(matches!(
        validate_coordinates(95.0, 10.75),
        Err(CoordError::OutOfRange { .. })
    ));
    assert!(matches!(
        validate_coordinates(59.91, -181.0),
        Err(CoordError::OutOfRange { .. })
    ));
}

#[test]
fn series_validation_catches_misaligned_sequences() {
    let mut series = tiny_series();
    series.cloud_low = Some(vec![Some(1.0), Some(2.0)]); // 2 ≠ 3
    assert!(matches!(
        series.validate(),
        Err(SeriesError::LengthMismatch {
            name: "cloud_low",
            got: 2,
            expected: 3,
        })
    ));
}

#[test]
fn series_validation_requires_ascending_timestamps() {
    let mut series = tiny_series();
    series.timestamps.swap(0, 1);
    assert!(matches!(
        series.validate(),
        Err(SeriesError::NotAscending { .. })
    ));
}

#[test]
fn wholly_absent_sequences_are_valid() {
    let series = HourlySeries {
        timestamps: tiny_series().timestamps,
        ..HourlySeries::default()
    };
    assert!(series.validate().is_ok());
}
