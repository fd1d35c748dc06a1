use std::process::{Command, Output};

fn bitx(args: &[&str]) -> Output {
    let binary_path = env!("CARGO_BIN_EXE_bitx");
    Command::new(binary_path)
        .args(args)
        .env_remove("BITX_HOSTNAME")
        .env_remove("BITX_PORT")
        .env_remove("BITX_PAIR")
        .env_remove("BITX_CA_FILE")
        .env_remove("BITX_KEY_ID")
        .env_remove("BITX_KEY_SECRET")
        .output()
        .expect("Failed to start bitx binary")
}

fn example_config(name: &str) -> String {
    format!("{}/examples/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn help_lists_subcommands() {
    let output = bitx(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["ticker", "order-book", "funding-address", "withdrawals"] {
        assert!(stdout.contains(name), "missing {name} in help:\n{stdout}");
    }
}

#[test]
fn missing_config_file_fails() {
    let output = bitx(&["--config", "/nonexistent/bitx.yaml", "ticker"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load config"), "stderr: {stderr}");
}

#[test]
fn unreachable_host_reports_command() {
    let config_path = example_config("unreachable.yaml");
    let output = bitx(&["--config", &config_path, "--log-level", "error", "ticker"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ticker request failed"), "stderr: {stderr}");
}
