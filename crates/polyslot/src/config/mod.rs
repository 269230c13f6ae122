//! Registry configuration.
//!
//! Format-neutral [`RegistryConfig`] with a TOML loader:
//!
//! ```toml
//! # silent (default) or report
//! unresolved = "report"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How registry operations treat an object index that matches no slot.
///
/// The policy applies uniformly to every registry operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedPolicy {
	/// Absorb the index: counts are 0, reads return `FieldValue::default()`,
	/// writes and prints do nothing.
	#[default]
	Silent,
	/// Return [`RegistryError::UnresolvedIndex`](crate::RegistryError::UnresolvedIndex).
	Report,
}

/// Settings applied to an [`IndexedRegistry`](crate::IndexedRegistry) at assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RegistryConfig {
	pub unresolved: UnresolvedPolicy,
}

impl RegistryConfig {
	/// Config with the given unresolved-index policy.
	pub const fn with_policy(unresolved: UnresolvedPolicy) -> Self {
		Self { unresolved }
	}

	/// Parses a config from TOML text. Missing keys take their defaults.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	/// Reads and parses a TOML config file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), ?config, "loaded registry config");
		Ok(config)
	}
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests;
