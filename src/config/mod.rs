//! Configuration loading for mbiss

mod schema;

pub use schema::{BinaryOverride, Config, ThresholdOverrides, TieredOverride};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".mbissrc.json";

/// Find and load config file with extends resolution. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => load_config_with_extends(&path, &mut HashSet::new()),
        None => Ok(Config::default()),
    }
}

/// Load a config file and resolve its extends chain
fn load_config_with_extends(config_path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if !visited.insert(canonical) {
        anyhow::bail!(
            "Circular extends detected in config: {}",
            config_path.display()
        );
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    if let Some(extends) = config.extends.take() {
        let config_dir = config_path.parent().unwrap_or(Path::new("."));
        let mut base_path = config_dir.join(&extends);
        if base_path.extension().is_none() {
            base_path.set_extension("json");
        }
        if !base_path.exists() {
            anyhow::bail!(
                "Extended config not found: {} (referenced from {})",
                base_path.display(),
                config_path.display()
            );
        }
        let base = load_config_with_extends(&base_path, visited)?;
        config.merge_from(base);
    }

    Ok(config)
}

/// Search for .mbissrc.json in directory and its parents
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Contents written by `mbiss init`
pub fn default_config_json(variant: crate::questionnaire::Variant) -> String {
    format!(
        r#"{{
  "variant": "{}",
  "resultsFile": "{}",
  "mediaDir": "{}",
  "thresholds": {{
    "binary": {{
      "emotionalExhaustion": 14,
      "cynicism": 6,
      "academicEfficacy": 18
    }},
    "tiered": {{
      "highEmotionalExhaustionAbove": 20,
      "highCynicismAbove": 17,
      "highAcademicEfficacyBelow": 18,
      "moderateEmotionalExhaustion": [15, 20],
      "moderateCynicism": [13, 17],
      "lowEmotionalExhaustionBelow": 15,
      "lowCynicismBelow": 12,
      "lowAcademicEfficacyAbove": 20
    }}
  }}
}}
"#,
        variant,
        crate::store::default_results_filename(variant),
        crate::store::DEFAULT_MEDIA_DIR
    )
}
