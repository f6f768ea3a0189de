use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
    log_path: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        let log_path = base.join("ted").join("telemetry.jsonl");

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_config,
            xdg_state,
            log_path,
        }
    }

    fn seed_fixture(&self, name: &str) {
        let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../ted-telemetry-core/tests/fixtures/telemetry")
            .join(name);
        fs::create_dir_all(self.log_path.parent().expect("missing log parent"))
            .expect("failed to create log directory");
        fs::copy(source, &self.log_path).expect("failed to copy telemetry fixture");
    }

    fn write_config(&self, contents: &str) {
        let dir = self.xdg_config.join("ted-telemetry");
        fs::create_dir_all(&dir).expect("failed to create config dir");
        fs::write(dir.join("config.toml"), contents).expect("failed to write config");
    }

    fn log_arg(&self) -> String {
        self.log_path.to_string_lossy().into_owned()
    }
}

fn run_bin(env: &CliTestEnv, args: &[&str]) -> Output {
    run_bin_with_state(env, &env.xdg_state, args)
}

fn run_bin_with_state(env: &CliTestEnv, xdg_state: &Path, args: &[&str]) -> Output {
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("ted-telemetry-report"));

    Command::new(bin_path)
        .args(args)
        .env("HOME", &env.home)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", xdg_state)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to execute ted-telemetry-report: {e}"))
}

fn assert_success(args: &[&str], output: &Output) {
    if output.status.success() {
        return;
    }

    let rendered_args = args
        .iter()
        .map(|arg| OsString::from(arg).to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    panic!(
        "ted-telemetry-report {rendered_args} failed\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
        output.status, stdout, stderr
    );
}

fn state_has_log_file(dir: &Path) -> bool {
    fs::read_dir(dir.join("ted-telemetry"))
        .map(|entries| {
            entries
                .flatten()
                .any(|e| e.file_name().to_string_lossy().starts_with("ted-telemetry.log"))
        })
        .unwrap_or(false)
}

#[test]
fn report_prints_all_sections_for_fixture_log() {
    let env = CliTestEnv::new();
    env.seed_fixture("session.jsonl");

    let log = env.log_arg();
    let args = ["--log", log.as_str()];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- Telemetry Analysis Report ---"));
    assert!(stdout.contains("Total Events Captured: 12"));
    assert!(stdout.contains(&format!("Log File Location: {}", log)));
    assert!(stdout.contains("Unique Sessions: 2"));
    assert!(stdout.contains("Event Breakdown:"));
    assert!(stdout.contains("  - package.json: 2 times"));
    assert!(stdout.contains("  - Total Characters Typed: 33"));
    assert!(stdout.contains("  - git commit: 2 times"));
    assert!(stdout.contains("Interpretation:"));

    assert!(
        state_has_log_file(&env.xdg_state),
        "expected a log file under {}",
        env.xdg_state.display()
    );
}

#[test]
fn missing_log_is_reported_and_exits_cleanly() {
    let env = CliTestEnv::new();

    let log = env.log_arg();
    let args = ["--log", log.as_str()];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, format!("Log file not found at: {}\n", log));
}

#[test]
fn log_without_events_says_so() {
    let env = CliTestEnv::new();
    env.seed_fixture("no-events.jsonl");

    let log = env.log_arg();
    let args = ["--log", log.as_str()];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "No events found in log.\n");
}

#[test]
fn config_file_supplies_log_path_and_top_n() {
    let env = CliTestEnv::new();
    env.seed_fixture("session.jsonl");
    env.write_config(&format!(
        "[telemetry]\nlog_path = {:?}\n\n[report]\ntop_n = 1\n",
        env.log_arg()
    ));

    let args = ["--no-interpretation"];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  - package.json: 2 times"));
    assert!(!stdout.contains("main.rs"));
    assert!(!stdout.contains("File: Save"));
    assert!(!stdout.contains("Interpretation:"));
}

#[test]
fn zero_top_is_rejected() {
    let env = CliTestEnv::new();
    env.seed_fixture("session.jsonl");

    let log = env.log_arg();
    let output = run_bin(&env, &["--log", log.as_str(), "--top", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--top must be at least 1"));
}

#[test]
fn directory_as_log_path_fails_instead_of_hanging() {
    let env = CliTestEnv::new();
    fs::create_dir_all(&env.log_path).expect("failed to create directory at log path");

    let log = env.log_arg();
    let output = run_bin(&env, &["--log", log.as_str()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to analyze"),
        "expected an analysis error, got:\n{stderr}"
    );
}

#[test]
fn unusable_state_dir_still_prints_report() {
    let env = CliTestEnv::new();
    env.seed_fixture("session.jsonl");

    let state_file = env.home.join("state-is-a-file");
    fs::write(&state_file, "not a directory").expect("failed to write state file");

    let log = env.log_arg();
    let args = ["--log", log.as_str()];
    let output = run_bin_with_state(&env, &state_file, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Events Captured: 12"));
    assert!(stdout.contains("--- End of Report ---"));
}
