// src/log.rs
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tracing::Level;

use crate::config::consts::{LOG_BACKUPS, LOG_FILE_PREFIX, LOG_MAX_BYTES};

/// Install the process-wide file logger under `dir`.
/// One file per run, stamped with the local start time, rolled over by size.
pub fn init(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let path = dir.join(join!(LOG_FILE_PREFIX, "_", &stamp, ".log"));
    let file = RotatingFile::create(path.clone(), LOG_MAX_BYTES, LOG_BACKUPS)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(path)
}

/// Log file that moves itself to `<path>.1` once it would exceed `max_bytes`,
/// shifting older backups up to `<path>.<backups>` and dropping the oldest.
/// With `backups == 0` the file is truncated instead.
pub struct RotatingFile {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    backups: usize,
}

impl RotatingFile {
    pub fn create(path: PathBuf, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let file = File::create(&path)?;
        Ok(Self { path, file, written: 0, max_bytes, backups })
    }

    fn backup(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.backups > 0 {
            let oldest = self.backup(self.backups);
            if oldest.exists() { fs::remove_file(&oldest)?; }
            for n in (1..self.backups).rev() {
                let from = self.backup(n);
                if from.exists() { fs::rename(&from, self.backup(n + 1))?; }
            }
            fs::rename(&self.path, self.backup(1))?;
        }
        self.file = File::create(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // An oversized single record still lands in a fresh file.
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
