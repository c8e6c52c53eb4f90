// Contract tests for integrating data with the `integrate` binary

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::common::{integrate, parse_value};

const LINE: &str = "# x y\n0 0\n1 1\n2 2\n3 3\n4 4\n";
const PARABOLA: &str = "0 0\n1 1\n2 4\n3 9\n4 16\n";

fn data_file(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("data.txt");
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

/// Where the binary looks for the per-user configuration under the isolated `HOME`
#[cfg(unix)]
fn user_config_file(dir: &TempDir) -> std::path::PathBuf {
    let base = if cfg!(target_os = "macos") {
        dir.path().join("Library").join("Application Support")
    } else {
        dir.path().join("config")
    };
    let config_dir = base.join("integrate");
    fs::create_dir_all(&config_dir).unwrap();
    config_dir.join("integrate.toml")
}

#[test]
fn test_default_method_is_riemann() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, LINE);

    integrate(&temp_dir)
        .arg(&path)
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_method_prefixes() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, LINE);

    for method in ["t", "trap", "trapezoid", "TRAP"] {
        integrate(&temp_dir)
            .args(["-m", method, &path])
            .assert()
            .success()
            .stdout("8\n");
    }
}

#[test]
fn test_simpson_from_stdin() {
    let temp_dir = TempDir::new().unwrap();

    let output = integrate(&temp_dir)
        .args(["--method", "simpson", "-"])
        .write_stdin(PARABOLA)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!((parse_value(&output.stdout) - 64.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_gauss_legendre_uses_interpolation() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, PARABOLA);

    let output = integrate(&temp_dir).args(["-m", "gauss", &path]).output().unwrap();

    assert!(output.status.success());
    assert!((parse_value(&output.stdout) - 64.0 / 3.0).abs() < 1.0);
}

#[test]
fn test_indefinite_integral_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, "0 1\n1 1\n2 1\n3 1\n");

    integrate(&temp_dir)
        .args(["-m", "trap", "-i", &path])
        .assert()
        .success()
        .stdout("1 1\n2 2\n3 3\n");
}

#[test]
fn test_two_dimensional_data() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, "0 0 1\n0 1 1\n\n1 0 1\n1 1 1\n\n2 0 1\n2 1 1\n");

    integrate(&temp_dir)
        .args(["-d", "2", "-m", "trap", &path])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_negative_zero_merges_with_zero_in_2d() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, "0 0 1\n-0 0 2\n0 1 3\n-0 1 4\n1 0 5\n1 1 6\n");

    integrate(&temp_dir)
        .args(["-d", "2", "-m", "trap", &path])
        .assert()
        .success()
        .stdout("4.25\n");
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, LINE);

    let output = integrate(&temp_dir)
        .args(["-m", "trap", "--json", &path])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["method"], "trapezoid");
    assert_eq!(value["dimensions"], 1);
    assert_eq!(value["points"], 5);
    assert_eq!(value["value"], 8.0);
    assert!(value.get("running").is_none());
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, "0 0\n1 1\n2 1\n");
    fs::write(
        temp_dir.path().join("integrate.toml"),
        "[defaults]\nmethod = \"trap\"\n\n[output]\nprecision = 3\n",
    )
    .unwrap();

    integrate(&temp_dir)
        .arg(&path)
        .assert()
        .success()
        .stdout("1.50\n");

    // flags still win over the file
    integrate(&temp_dir)
        .args(["-m", "riemann", &path])
        .assert()
        .success()
        .stdout("1.00\n");
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, LINE);
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "[output]\njson = true\n").unwrap();

    integrate(&temp_dir)
        .args(["--config", &config.display().to_string(), &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"success\""));
}

#[test]
fn test_config_path_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, LINE);
    let config = temp_dir.path().join("from-env.toml");
    fs::write(&config, "[defaults]\nmethod = \"trap\"\n\n[output]\njson = true\n").unwrap();

    let output = integrate(&temp_dir)
        .env("INTEGRATE_CONFIG", &config)
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["method"], "trapezoid");
    assert_eq!(value["value"], 8.0);
}

#[cfg(unix)]
#[test]
fn test_user_config_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, "0 0\n1 1\n2 1\n");
    fs::write(user_config_file(&temp_dir), "[defaults]\nmethod = \"trap\"\n").unwrap();

    integrate(&temp_dir).arg(&path).assert().success().stdout("1.5\n");
}

#[cfg(unix)]
#[test]
fn test_local_config_wins_over_user_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, "0 0\n1 1\n2 1\n");
    fs::write(
        user_config_file(&temp_dir),
        "[defaults]\nmethod = \"trap\"\n\n[output]\nprecision = 3\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("integrate.toml"), "[defaults]\nmethod = \"simpson\"\n").unwrap();

    // the local file replaces the user file entirely, precision included
    integrate(&temp_dir)
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1.6666"));
}

#[test]
fn test_invalid_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, LINE);
    fs::write(temp_dir.path().join("integrate.toml"), "[defaults]\nmethod = \"romberg\"\n").unwrap();

    integrate(&temp_dir)
        .arg(&path)
        .assert()
        .failure()
        .code(78)
        .stderr(predicate::str::contains("Unknown default method: romberg"));
}

#[test]
fn test_unknown_method() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, LINE);

    integrate(&temp_dir)
        .args(["-m", "romberg", &path])
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Unrecognized integration method (romberg)."));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    integrate(&temp_dir)
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .code(74)
        .stderr(predicate::str::contains("Could not open file: no-such-file.txt"));
}

#[test]
fn test_gauss_legendre_refused_in_2d() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, "0 0 1\n1 1 1\n");

    integrate(&temp_dir)
        .args(["-d", "2", "-m", "gauss", &path])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not supported for 2D data"));
}

#[test]
fn test_indefinite_refused_in_2d() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, "0 0 1\n1 1 1\n");

    integrate(&temp_dir)
        .args(["-d", "2", "-i", &path])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Indefinite integrals are not supported with 2D integrals"));
}

#[test]
fn test_too_little_data() {
    let temp_dir = TempDir::new().unwrap();

    integrate(&temp_dir)
        .args(["-m", "trap", "-"])
        .write_stdin("# only one point\n1 2\n")
        .assert()
        .failure()
        .code(65)
        .stderr(predicate::str::contains("Too few samples"));
}

#[test]
fn test_invalid_dimensions_rejected_by_parser() {
    let temp_dir = TempDir::new().unwrap();

    integrate(&temp_dir)
        .args(["-d", "3", "data.txt"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_no_arguments_prints_help() {
    let temp_dir = TempDir::new().unwrap();

    integrate(&temp_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_batch_mode_keeps_stderr_quiet() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, LINE);

    integrate(&temp_dir)
        .args(["-b", "-v", "-m", "simp", &path])
        .assert()
        .success()
        .stderr("");
}
