use super::{config_stub, load_config, validate_config, Config, CONFIG_SCHEMA_VERSION};
use std::path::Path;

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directory");
    }
    std::fs::write(path, contents.as_bytes()).expect("write file");
}

#[test]
fn stub_round_trips_to_defaults() {
    let stub = config_stub().expect("stub");
    let parsed: Config = serde_json::from_str(&stub).expect("parse stub");
    assert_eq!(parsed, Config::default());
    validate_config(&parsed).expect("stub is valid");
}

#[test]
fn missing_fields_take_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    write_file(&path, r#"{ "schema_version": 1, "serve": { "port": 9000 } }"#);

    let config = load_config(Some(&path)).expect("load");
    assert_eq!(config.serve.port, 9000);
    assert_eq!(config.serve.bind, "127.0.0.1");
    assert_eq!(config.profile_base_url, "https://x.com/");
    assert_eq!(config.clipboard_command, None);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_config(Some(&dir.path().join("absent.json"))).expect_err("missing");
    assert!(err.to_string().contains("read config"));
}

#[test]
fn rejects_unknown_schema_version() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    write_file(
        &path,
        &format!(r#"{{ "schema_version": {} }}"#, CONFIG_SCHEMA_VERSION + 1),
    );
    let err = load_config(Some(&path)).expect_err("bad version");
    assert!(format!("{err:#}").contains("schema_version"));
}

#[test]
fn rejects_malformed_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    write_file(&path, "{ not json");
    let err = load_config(Some(&path)).expect_err("malformed");
    assert!(err.to_string().contains("parse config JSON"));
}

#[test]
fn clipboard_command_is_shell_split() {
    let config = Config {
        clipboard_command: Some("xclip -selection 'clip board'".to_string()),
        ..Config::default()
    };
    assert_eq!(
        config.clipboard_argv().expect("split"),
        Some(vec![
            "xclip".to_string(),
            "-selection".to_string(),
            "clip board".to_string()
        ])
    );

    let blank = Config {
        clipboard_command: Some("  ".to_string()),
        ..Config::default()
    };
    assert_eq!(blank.clipboard_argv().expect("blank"), None);

    let unbalanced = Config {
        clipboard_command: Some("xclip 'oops".to_string()),
        ..Config::default()
    };
    assert!(validate_config(&unbalanced).is_err());
}
