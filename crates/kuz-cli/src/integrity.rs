//! Executable self-checksum watchdog.
//!
//! The running binary is hashed and compared against a reference file
//! stored next to it (`<exe>.sha256`), once at startup and then
//! periodically from a background thread. The `checksum` subcommand
//! rewrites the reference after a rebuild.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::{error, info, warn};
use sha2::{Digest, Sha256};

/// Delay between background re-verifications.
const WATCH_INTERVAL: Duration = Duration::from_secs(30);

enum Verification {
    Passed,
    NoReference(PathBuf),
}

fn executable_path() -> Result<PathBuf> {
    env::current_exe().context("locate the running executable")
}

fn reference_path(exe: &Path) -> PathBuf {
    exe.with_extension("sha256")
}

fn digest_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

fn verify_once() -> Result<Verification> {
    let exe = executable_path()?;
    let reference = reference_path(&exe);
    let stored = match fs::read_to_string(&reference) {
        Ok(stored) => stored,
        Err(_) => return Ok(Verification::NoReference(reference)),
    };
    if stored.trim() != digest_file(&exe)? {
        bail!("executable checksum mismatch for {}", exe.display());
    }
    Ok(Verification::Passed)
}

/// Writes the reference checksum for the current executable. Run once
/// after every rebuild.
pub fn create_reference() -> Result<()> {
    let exe = executable_path()?;
    let digest = digest_file(&exe)?;
    let reference = reference_path(&exe);
    fs::write(&reference, &digest)
        .with_context(|| format!("write {}", reference.display()))?;
    info!("reference checksum written to {}", reference.display());
    Ok(())
}

/// Checks the executable against its reference checksum. A missing
/// reference logs a warning and passes; a mismatch is fatal.
pub fn verify_on_start() -> Result<()> {
    match verify_once()? {
        Verification::Passed => info!("executable checksum verified"),
        Verification::NoReference(reference) => warn!(
            "no reference checksum at {}; skipping integrity check",
            reference.display()
        ),
    }
    Ok(())
}

/// Re-verifies the checksum periodically, terminating the process on
/// mismatch.
pub fn spawn_watchdog() {
    thread::spawn(|| loop {
        thread::sleep(WATCH_INTERVAL);
        if let Err(err) = verify_once() {
            error!("integrity watchdog: {err}");
            process::exit(1);
        }
    });
}
