use serde_path_to_error as spte;
use thiserror::Error;

use crate::types::{FactorKey, FactorModels, ParameterBundle, Weights, BUNDLE_VERSION};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unknown bundle version {got}, expected {expected}")]
    WrongVersion { got: u32, expected: u32 },
    #[error("invalid weight for {factor}: {value}")]
    InvalidWeight { factor: &'static str, value: f64 },
    #[error("invalid model for {factor}: {reason}")]
    InvalidModel { factor: &'static str, reason: String },
    #[error("bundle parse error at {path}: {message}")]
    Parse { path: String, message: String },
}

/// Valider en bundle før den slipper inn: riktig versjon, endelige
/// ikke-negative vekter og gyldige modellparametre for alle seks faktorer.
pub fn validate_bundle(bundle: &ParameterBundle) -> Result<(), ImportError> {
    if bundle.version != BUNDLE_VERSION {
        return Err(ImportError::WrongVersion {
            got: bundle.version,
            expected: BUNDLE_VERSION,
        });
    }
    for key in FactorKey::ALL {
        let w = bundle.weights.get(key);
        if !w.is_finite() || w < 0.0 {
            return Err(ImportError::InvalidWeight {
                factor: key.key(),
                value: w,
            });
        }
        bundle
            .models
            .get(key)
            .validate()
            .map_err(|reason| ImportError::InvalidModel {
                factor: key.key(),
                reason,
            })?;
    }
    Ok(())
}

/// Holder gjeldende vekter + modeller for kjørende sesjon. Persisteres aldri
/// automatisk – eksport/import er eksplisitte operasjoner.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    weights: Weights,
    models: FactorModels,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn models(&self) -> &FactorModels {
        &self.models
    }

    pub fn reset_to_defaults(&mut self) {
        self.weights = Weights::default();
        self.models = FactorModels::default();
    }

    /// Del hver vekt på summen slik at de summerer til 1.0.
    /// No-op ved sum 0 (vokter mot div/0, vektene står urørt).
    pub fn normalize_weights(&mut self) {
        let sum = self.weights.sum();
        if sum > 0.0 {
            for key in FactorKey::ALL {
                let w = self.weights.get(key);
                self.weights.set(key, w / sum);
            }
        }
    }

    /// Versjonert snapshot av gjeldende tilstand.
    pub fn export(&self) -> ParameterBundle {
        ParameterBundle {
            version: BUNDLE_VERSION,
            weights: self.weights.clone(),
            models: self.models.clone(),
        }
    }

    /// Valider og erstatt hele tilstanden i ett. Feiler validering beholdes
    /// gjeldende vekter og modeller uendret – ingen delvis merge.
    pub fn import(&mut self, bundle: ParameterBundle) -> Result<(), ImportError> {
        validate_bundle(&bundle)?;
        self.weights = bundle.weights;
        self.models = bundle.models;
        Ok(())
    }

    /// Import fra JSON-tekst med sti-annoterte parsefeil.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        let mut de = serde_json::Deserializer::from_str(json);
        let bundle: ParameterBundle =
            spte::deserialize(&mut de).map_err(|e| ImportError::Parse {
                path: e.path().to_string(),
                message: e.inner().to_string(),
            })?;
        self.import(bundle)
    }

    /// Eksport som pretty JSON.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.export())
    }
}
