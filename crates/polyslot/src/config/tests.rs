use std::io::Write;

use super::*;

#[test]
fn empty_config_uses_defaults() {
	let config = RegistryConfig::from_toml_str("").unwrap();
	assert_eq!(config, RegistryConfig::default());
	assert_eq!(config.unresolved, UnresolvedPolicy::Silent);
}

#[test]
fn parses_report_policy() {
	let config = RegistryConfig::from_toml_str("unresolved = \"report\"\n").unwrap();
	assert_eq!(config.unresolved, UnresolvedPolicy::Report);
}

#[test]
fn rejects_unknown_keys_and_values() {
	assert!(matches!(
		RegistryConfig::from_toml_str("unresolvd = \"report\""),
		Err(ConfigError::Parse(_))
	));
	assert!(matches!(
		RegistryConfig::from_toml_str("unresolved = \"loud\""),
		Err(ConfigError::Parse(_))
	));
}

#[test]
fn loads_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "unresolved = \"silent\"").unwrap();
	let config = RegistryConfig::load(file.path()).unwrap();
	assert_eq!(config, RegistryConfig::with_policy(UnresolvedPolicy::Silent));
}

#[test]
fn missing_file_names_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.toml");
	let err = RegistryConfig::load(&path).unwrap_err();
	assert!(matches!(err, ConfigError::Read { .. }));
	assert!(err.to_string().contains("absent.toml"));
}
