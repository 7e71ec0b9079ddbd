#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};

pub fn stellahub(args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_stellahub"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .with_context(|| format!("run stellahub {:?}", args))
}

/// Runs the binary and fails unless it exits successfully.
pub fn run_stellahub(args: &[&str]) -> Result<String> {
    let out = stellahub(args)?;
    if !out.status.success() {
        anyhow::bail!(
            "stellahub {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

pub fn path_arg(p: &Path) -> Result<&str> {
    p.to_str().context("non-utf8 temp path")
}
