//! Configuration Loading Tests

use std::collections::HashMap;
use strata_json::{DateMode, JsonConfig, JsonMapper, CONFIG_FILE_NAME, EPOCH_DATE_KEY};

#[test]
fn mapper_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[json]\nepoch_date = true\nenum_properties = [\"status\"]\n").unwrap();

    let mapper = JsonMapper::from_config_file(&path).unwrap();
    assert!(mapper.is_epoch_based());
    assert!(mapper.config().enum_properties.contains("status"));
}

#[test]
fn missing_config_file_means_string_mode() {
    let dir = tempfile::tempdir().unwrap();
    let mapper = JsonMapper::from_config_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(mapper.codec().mode(), DateMode::String);
}

#[test]
fn malformed_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[json\nepoch_date = true").unwrap();
    assert!(JsonMapper::from_config_file(&path).is_err());
}

#[test]
fn properties_source() {
    let props: HashMap<String, String> =
        [(EPOCH_DATE_KEY.to_string(), "true".to_string())].into_iter().collect();
    let config = JsonConfig::from_source(&props).unwrap();
    assert_eq!(config.date_mode, DateMode::Epoch);
}
