use std::process::Command;

fn bin_path() -> &'static str {
    env!("CARGO_BIN_EXE_nasne")
}

#[test]
fn list_prints_every_catalog_operation_without_network() {
    let output = Command::new(bin_path())
        .args(["--list", "192.0.2.1"])
        .output()
        .expect("failed to run nasne --list");

    assert!(output.status.success(), "--list should exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 56);
    assert!(
        stdout.contains("get_area_info\tGET\thttp://192.0.2.1:64210/status/areaInfoGet"),
        "unexpected listing: {stdout}"
    );
    assert!(stdout.contains("create_reserved_info\tPOST\thttp://192.0.2.1:64220/schedule/reservedInfoCreate"));
}

#[test]
fn unreachable_host_still_exits_successfully() {
    // カタログのポートは固定なので、ループバック上で誰も待ち受けていない前提で失敗させる
    let output = Command::new(bin_path())
        .args(["--json", "--only", "get_box_name", "--only", "get_missing", "127.0.0.1"])
        .env("NASNE_LOG_LEVEL", "off")
        .output()
        .expect("failed to run nasne");

    assert!(output.status.success(), "per-operation failures must not fail the survey");
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report should be JSON");
    assert_eq!(report["host"], "127.0.0.1");
    assert_eq!(report["failed"].as_array().map(Vec::len), Some(2));
}
