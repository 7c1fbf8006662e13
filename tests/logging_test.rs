use std::fs;

#[test]
fn test_log_file_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs");
    fs::write(&path, "previous run\n").unwrap();

    pod_resolver::logging::initialize(&path, false).unwrap();
    tracing::debug!(target: "kube_client", "listing pods");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("previous run\n"));
    assert!(contents.contains(&format!(
        "Starting {} v{}",
        pod_resolver::APP_NAME,
        pod_resolver::VERSION
    )));

    // without RUST_LOG every crate logs at debug
    if std::env::var_os("RUST_LOG").is_none() {
        assert!(contents.contains("listing pods"));
    }
}
