// core/src/weather_api.rs
use chrono::{DateTime, Utc};
use serde::Deserialize;
use ureq::Agent;

use crate::series::HourlySeries;
use crate::weather::{validate_coordinates, ForecastProvider};

#[derive(Debug, Clone, Deserialize)]
struct OpenMeteoResp {
    hourly: HourlyBlock,
}

// Aliaser dekker både gamle (cloudcover) og nye (cloud_cover) feltnavn.
#[derive(Debug, Clone, Deserialize)]
struct HourlyBlock {
    /// Unix-sekunder (vi ber om timeformat=unixtime).
    time: Vec<i64>,
    #[serde(default, alias = "cloudcover")]
    cloud_cover: Option<Vec<Option<f64>>>,
    #[serde(default, alias = "cloudcover_low")]
    cloud_cover_low: Option<Vec<Option<f64>>>,
    #[serde(default, alias = "cloudcover_mid")]
    cloud_cover_mid: Option<Vec<Option<f64>>>,
    #[serde(default, alias = "cloudcover_high")]
    cloud_cover_high: Option<Vec<Option<f64>>>,
    #[serde(default)]
    precipitation_probability: Option<Vec<Option<f64>>>,
    #[serde(default)]
    visibility: Option<Vec<Option<f64>>>,
    #[serde(default, alias = "windspeed_10m")]
    wind_speed_10m: Option<Vec<Option<f64>>>,
}

/// Open-Meteo klient – enkel blocking-versjon (ureq)
pub struct OpenMeteoClient {
    agent: Agent,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        // En enkel agent; ureq bruker rustls når "tls" er aktivert
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(10))
            .build();
        Self { agent }
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastProvider for OpenMeteoClient {
    fn get_hourly_forecast(&self, lat: f64, lon: f64, days: u8) -> Option<HourlySeries> {
        validate_coordinates(lat, lon).ok()?;

        // wind_speed_unit=ms slik at vindmodellens m/s-parametre gjelder direkte
        let url = format!(
            "https://api.open-meteo.com/v1/forecast?latitude={lat}&longitude={lon}\
             &hourly=cloud_cover,cloud_cover_low,cloud_cover_mid,cloud_cover_high,\
             precipitation_probability,visibility,wind_speed_10m\
             &timezone=auto&timeformat=unixtime&wind_speed_unit=ms&forecast_days={days}"
        );

        let resp = self.agent.get(&url).call().ok()?;
        let body: OpenMeteoResp = resp.into_json().ok()?;

        let timestamps: Vec<DateTime<Utc>> = body
            .hourly
            .time
            .iter()
            .filter_map(|s| DateTime::from_timestamp(*s, 0))
            .collect();
        if timestamps.len() != body.hourly.time.len() {
            log::warn!("[OpenMeteo] forkastet svar med ugyldige tidsstempler");
            return None;
        }

        let series = HourlySeries {
            timestamps,
            cloud_total: body.hourly.cloud_cover,
            cloud_low: body.hourly.cloud_cover_low,
            cloud_mid: body.hourly.cloud_cover_mid,
            cloud_high: body.hourly.cloud_cover_high,
            precipitation_prob: body.hourly.precipitation_probability,
            visibility_m: body.hourly.visibility,
            wind_speed_ms: body.hourly.wind_speed_10m,
        };

        // Feiljusterte sekvenser avvises ved kanten – aldri inn i pipelinen
        if let Err(e) = series.validate() {
            log::warn!("[OpenMeteo] forkastet svar: {e}");
            return None;
        }

        log::info!(
            "[OpenMeteo] lat={:.3}, lon={:.3} => {} timer, {} dager",
            lat,
            lon,
            series.len(),
            days
        );

        Some(series)
    }
}
