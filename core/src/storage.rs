use std::path::Path;

use anyhow::{anyhow, Result};

use crate::params::validate_bundle;
use crate::types::ParameterBundle;

/// Leser inn parameterbundle fra disk (JSON).
/// Hvis filen ikke finnes, returneres defaults.
pub fn load_params(path: &str) -> Result<ParameterBundle> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let mut de = serde_json::Deserializer::from_str(&contents);
        let bundle: ParameterBundle = serde_path_to_error::deserialize(&mut de)
            .map_err(|e| anyhow!("bundle parse at {}: {}", e.path(), e))?;
        validate_bundle(&bundle)?;
        println!("📂 Parametre lastet fra {} (versjon={})", path, bundle.version);
        Ok(bundle)
    } else {
        println!("⚠️ Fant ikke parameterfil på {}, bruker defaults", path);
        Ok(ParameterBundle::default())
    }
}

/// Lagrer parameterbundle til disk som JSON (pretty-print).
pub fn save_params(bundle: &ParameterBundle, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(bundle)?;
    std::fs::write(path, json)?;
    println!("✅ Parametre lagret til {} (versjon={})", path, bundle.version);
    Ok(())
}
