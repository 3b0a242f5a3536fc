//! Loading optimizer settings from YAML or JSON files.

use std::path::Path;

use nftopt::NftConfig;

use crate::error::{DemoError, DemoResult};

/// Reads an [`NftConfig`] from `path`.
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
/// Missing fields take their defaults.
pub fn load_config(path: &Path) -> DemoResult<NftConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    tracing::debug!(path = %path.display(), ?config, "loaded optimizer config");
    Ok(config)
}
