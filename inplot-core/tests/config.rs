use inplot_core::config::ConfigError;
use inplot_core::LabConfig;
use std::io::Write;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("inplot.toml");
    let mut file = std::fs::File::create(&path).expect("create config");
    file.write_all(contents.as_bytes()).expect("write config");
    path
}

#[test]
fn reads_broker_pub_port() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "[ports]\nBLACS_Broker_Pub = 55537\n");
    let config = LabConfig::from_path(&path).expect("load config");
    assert_eq!(config.broker_pub_port().expect("port"), 55537);
}

#[test]
fn missing_key_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "[ports]\nother = 1234\n");
    let config = LabConfig::from_path(&path).expect("load config");
    assert!(matches!(
        config.broker_pub_port(),
        Err(ConfigError::MissingKey { .. })
    ));
}

#[test]
fn missing_ports_table_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "[general]\nname = \"lab\"\n");
    let config = LabConfig::from_path(&path).expect("load config");
    assert!(matches!(
        config.broker_pub_port(),
        Err(ConfigError::MissingKey { .. })
    ));
}

#[test]
fn out_of_range_port_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "[ports]\nBLACS_Broker_Pub = 70000\n");
    let config = LabConfig::from_path(&path).expect("load config");
    assert!(matches!(
        config.broker_pub_port(),
        Err(ConfigError::InvalidPort { .. })
    ));
}

#[test]
fn unparsable_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "ports = not valid toml");
    assert!(matches!(
        LabConfig::from_path(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.toml");
    assert!(matches!(
        LabConfig::from_path(&path),
        Err(ConfigError::Read { .. })
    ));
}
