use anyhow::Result;
use std::path::PathBuf;
use std::process::Command;

use super::common::TestEnvironment;

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

pub fn run_welcome_command(env: &TestEnvironment, args: &[&str]) -> Result<CommandOutput> {
    let output = Command::new(env!("CARGO_BIN_EXE_antergos-welcome"))
        .args(args)
        .arg("--no-color")
        .env("HOME", env.home())
        .env("XDG_CONFIG_HOME", env.config_home())
        .env_remove("TERMINAL")
        .output()?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

/// Parse the last JSON event printed on stdout
pub fn last_event(output: &CommandOutput) -> Result<serde_json::Value> {
    let line = output
        .stdout
        .lines()
        .filter(|l| l.starts_with('{'))
        .last()
        .ok_or_else(|| anyhow::anyhow!("no JSON output in: {}", output.stdout))?;
    Ok(serde_json::from_str(line)?)
}

pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
