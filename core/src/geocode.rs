use serde::Deserialize;
use ureq::Agent;

use crate::weather::validate_coordinates;

/// Best-effort stedsnavn for koordinater. Aldri påkrevd for scoring;
/// feil svelges og logges.
pub trait ReverseGeocoder {
    fn place_name(&self, lat: f64, lon: f64) -> Option<String>;
}

/// Statisk geokoder for tester.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    pub name: Option<String>,
}

impl ReverseGeocoder for StaticGeocoder {
    fn place_name(&self, _lat: f64, _lon: f64) -> Option<String> {
        self.name.clone()
    }
}

#[derive(Debug, Deserialize)]
struct NominatimResp {
    display_name: Option<String>,
}

/// Nominatim (OpenStreetMap) – blocking ureq, som værklienten.
pub struct NominatimClient {
    agent: Agent,
}

impl NominatimClient {
    pub fn new() -> Self {
        // Nominatim krever identifiserende User-Agent
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(10))
            .user_agent("glowcast/0.1")
            .build();
        Self { agent }
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReverseGeocoder for NominatimClient {
    fn place_name(&self, lat: f64, lon: f64) -> Option<String> {
        validate_coordinates(lat, lon).ok()?;
        let url = format!(
            "https://nominatim.openstreetmap.org/reverse?format=jsonv2&lat={lat}&lon={lon}&zoom=10"
        );
        match self.agent.get(&url).call() {
            Ok(resp) => resp
                .into_json::<NominatimResp>()
                .ok()
                .and_then(|r| r.display_name),
            Err(e) => {
                log::warn!("reverse geocode feilet for ({lat:.3}, {lon:.3}): {e}");
                None
            }
        }
    }
}
