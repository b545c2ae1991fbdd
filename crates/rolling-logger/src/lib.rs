//! Rolling Logger
//!
//! Size-rotated log files installed as the global `tracing` subscriber.
//!
//! ```ignore
//! rolling_logger::init_logger(log_dir, "Places")?;
//! let _ = rolling_logger::info("ready");
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::filter::LevelFilter;

/// Rotate once the current file reaches this size
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Rotated files kept besides the current one
pub const DEFAULT_MAX_FILES: usize = 3;

// ========================
// Rolling file
// ========================

/// Log file that rotates `<name>.log` -> `<name>.log.1` -> ... when full
pub struct RollingFile {
    dir: PathBuf,
    base_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: impl AsRef<Path>, base_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.log", base_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir,
            base_name: base_name.to_string(),
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    /// Path of the current file (index 0) or a rotated one
    pub fn path(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.base_name))
        } else {
            self.dir.join(format!("{}.log.{}", self.base_name, index))
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(self.path(0))?;
            self.written = 0;
            return Ok(());
        }
        let oldest = self.path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (0..self.max_files).rev() {
            let from = self.path(index);
            if from.exists() {
                fs::rename(&from, self.path(index + 1))?;
            }
        }
        self.file = OpenOptions::new().create(true).append(true).open(self.path(0))?;
        self.written = 0;
        Ok(())
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        let len = line.len() as u64 + 1;
        if self.written > 0 && self.written + len > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.written += len;
        Ok(())
    }
}

// ========================
// Subscriber plumbing
// ========================

struct Sink {
    file: Mutex<RollingFile>,
}

impl Sink {
    fn commit(&self, text: &str) {
        for line in text.lines().filter(|l| !l.is_empty()) {
            if let Ok(mut file) = self.file.lock() {
                let _ = file.write_line(line);
            }
        }
    }
}

static SINK: OnceLock<Arc<Sink>> = OnceLock::new();

/// Buffers one formatted event and commits it on drop
struct SinkWriter {
    sink: Arc<Sink>,
    buf: Vec<u8>,
}

impl Write for SinkWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for SinkWriter {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            self.sink.commit(&String::from_utf8_lossy(&self.buf));
        }
    }
}

#[derive(Clone)]
struct SinkMaker(Arc<Sink>);

impl<'a> MakeWriter<'a> for SinkMaker {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter {
            sink: self.0.clone(),
            buf: Vec::new(),
        }
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber writing to `<log_dir>/<app_name>.log`
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    let file = RollingFile::open(log_dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)
        .map_err(|e| format!("Failed to open log file: {}", e))?;
    let sink = Arc::new(Sink {
        file: Mutex::new(file),
    });
    SINK.set(sink.clone())
        .map_err(|_| "Logger already initialized".to_string())?;

    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_timer(LocalTime)
                .with_writer(SinkMaker(sink)),
        );

    #[cfg(target_os = "android")]
    {
        // log records go to logcat; tracing events to the file
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name),
        );
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| format!("Failed to set subscriber: {}", e))?;
    }

    #[cfg(not(target_os = "android"))]
    {
        use tracing_subscriber::util::SubscriberInitExt;
        // Also bridges `log` records into the subscriber
        subscriber
            .try_init()
            .map_err(|e| format!("Failed to set subscriber: {}", e))?;
    }

    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    if SINK.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

/// Emit at a runtime-chosen level
pub fn log_at(level: log::Level, message: &str) -> Result<(), String> {
    match level {
        log::Level::Error => tracing::error!("{}", message),
        log::Level::Warn => tracing::warn!("{}", message),
        log::Level::Info => tracing::info!("{}", message),
        log::Level::Debug => tracing::debug!("{}", message),
        log::Level::Trace => tracing::trace!("{}", message),
    }
    ensure_initialized()
}

pub fn debug(message: &str) -> Result<(), String> {
    log_at(log::Level::Debug, message)
}

pub fn info(message: &str) -> Result<(), String> {
    log_at(log::Level::Info, message)
}

pub fn warn(message: &str) -> Result<(), String> {
    log_at(log::Level::Warn, message)
}

pub fn error(message: &str) -> Result<(), String> {
    log_at(log::Level::Error, message)
}
