//! Timestamped logging to a file or stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

enum Sink {
    File(File),
    Stderr,
}

struct FileLogger {
    sink: Mutex<Sink>,
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format!(
            "[{}] {} {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        );
        if let Ok(mut sink) = self.sink.lock() {
            let _ = match &mut *sink {
                Sink::File(file) => file.write_all(line.as_bytes()),
                Sink::Stderr => io::stderr().write_all(line.as_bytes()),
            };
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = match &mut *sink {
                Sink::File(file) => file.flush(),
                Sink::Stderr => io::stderr().flush(),
            };
        }
    }
}

/// Installs the process-wide logger. Lines go to `log_file` when one
/// is given, stderr otherwise.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let sink = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            Sink::File(file)
        }
        None => Sink::Stderr,
    };
    log::set_boxed_logger(Box::new(FileLogger {
        sink: Mutex::new(sink),
    }))
    .context("install logger")?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}
