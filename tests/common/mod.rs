// Test utility module for standchart integration tests
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

/// The example chart link from idrlabs, with flag, locale and scheme.
pub const CHART_URL: &str = "https://charts.idrlabs.com/graphic/autism-spectrum?1&p=100,100,50,50,50,100,100,50,50,50&l=EN";

/// Build a chart URL for `scores` on `host` with no optional parts.
pub fn chart_url(host: &str, scores: &[u16; 10]) -> String {
    let joined = scores
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("https://{host}/graphic/autism-spectrum?&p={joined}")
}

/// The standchart binary, run from `dir` with a scrubbed environment so
/// user-level config and color settings do not leak into assertions.
pub fn standchart_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_standchart"));
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir);
    cmd
}
