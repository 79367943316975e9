use std::path::Path;

#[test]
fn configure_logging_creates_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    nexuswire::logger::configure_logging(Some(dir.path()), Some("debug"), Some(3));
    log::info!("logger smoke test");
    assert!(dir.path().join("app.log").exists());
}

#[test]
fn init_path_with_missing_config_is_not_fatal() {
    assert!(nexuswire::logger::init_path(Path::new("does-not-exist.yaml")).is_ok());
}
