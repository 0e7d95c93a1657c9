use aceest_fitness::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let cfg = Config::load(missing.to_str().unwrap()).unwrap();
    assert_eq!(cfg.http.bind, "0.0.0.0");
    assert_eq!(cfg.http.port, 8000);
    assert!(!cfg.http.cors);
    assert_eq!(cfg.socket_addr().unwrap().to_string(), "0.0.0.0:8000");
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fitness.toml");
    fs::write(
        &path,
        r#"
[service]
name = "Gym Floor"

[http]
bind = "127.0.0.1"
port = 9100
cors = true
"#,
    )
    .unwrap();

    let cfg = Config::load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.service.name, "Gym Floor");
    assert_eq!(cfg.http.bind, "127.0.0.1");
    assert_eq!(cfg.http.port, 9100);
    assert!(cfg.http.cors);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(&path, "[http]\nbind = \"127.0.0.1\"\n").unwrap();

    let cfg = Config::load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.http.bind, "127.0.0.1");
    assert_eq!(cfg.http.port, 8000);
}

#[test]
fn test_invalid_bind_address() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bind.toml");
    fs::write(&path, "[http]\nbind = \"not an address\"\n").unwrap();

    let cfg = Config::load(path.to_str().unwrap()).unwrap();
    assert!(cfg.socket_addr().is_err());
}
