pub mod aggregate;
pub mod cli;
pub mod geocode;
pub mod metrics;
pub mod params;
pub mod pipeline;
pub mod score;
pub mod series;
pub mod storage;
pub mod sun;
pub mod types;
pub mod units;
pub mod weather;
pub mod weather_api;
pub mod window;

pub use aggregate::aggregate_window;
pub use params::{validate_bundle, ImportError, ParameterStore};
pub use pipeline::{evaluate, forecast_sunsets, EvaluateInputs, ForecastInputs, ForecastOutputs};
pub use score::{
    compose_score, neutral_score, score_by_model, NEUTRAL_AUX_SCORE, NEUTRAL_CLOUD_SCORE,
};
pub use series::{FactorSeries, HourlySeries, SeriesError};
pub use storage::{load_params, save_params};
pub use types::{
    DailyAggregate, ExplanationRow, ExplanationTable, FactorAggregates, FactorKey, FactorModels,
    Label, ParameterBundle, ScoreModel, SunsetPrediction, Weights, BUNDLE_VERSION,
};
pub use units::{meters_to_km, normalize_percent_batch};
pub use weather::{
    validate_coordinates, CachedForecastClient, CoordError, ForecastProvider,
    StaticForecastProvider,
};
pub use window::select_window_indices;
