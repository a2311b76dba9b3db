use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

/// Solnedgangskilde. Selve efemeride-beregningen er en ekstern samarbeids-
/// partner; kjernen trenger bare instanten i samme epoch som værserien.
pub trait SunsetProvider {
    fn sunset_utc(&self, date: NaiveDate, lat: f64, lon: f64) -> Option<DateTime<Utc>>;
}

/// Konfigurert solnedgangstid på lokal veggklokke, slik brukeren setter den
/// i innstillingene. Godt nok for fotoformål; presis efemeride kan kobles
/// inn via traiten.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocalSunset {
    pub hour: u32,
    pub minute: u32,
    /// UTC-offset i timer for stedet, f.eks. +1 for Oslo vinterstid.
    pub utc_offset_hours: i32,
}

impl Default for FixedLocalSunset {
    fn default() -> Self {
        Self {
            hour: 18,
            minute: 30,
            utc_offset_hours: 0,
        }
    }
}

impl SunsetProvider for FixedLocalSunset {
    fn sunset_utc(&self, date: NaiveDate, _lat: f64, _lon: f64) -> Option<DateTime<Utc>> {
        let offset = FixedOffset::east_opt(self.utc_offset_hours * 3600)?;
        let naive = date.and_hms_opt(self.hour, self.minute, 0)?;
        let local = offset.from_local_datetime(&naive).single()?;
        Some(local.with_timezone(&Utc))
    }
}

/// Statisk tilbyder for tester – oppslag per dato.
#[derive(Debug, Clone, Default)]
pub struct StaticSunsetProvider {
    pub instants: Vec<(NaiveDate, DateTime<Utc>)>,
}

impl SunsetProvider for StaticSunsetProvider {
    fn sunset_utc(&self, date: NaiveDate, _lat: f64, _lon: f64) -> Option<DateTime<Utc>> {
        self.instants
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, t)| *t)
    }
}
