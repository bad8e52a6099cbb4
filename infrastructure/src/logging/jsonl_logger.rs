//! JSONL transcript writer for workflow runs.
//!
//! Every [`ConversationEvent`] becomes one JSON line carrying the event
//! `type`, a millisecond `timestamp`, the `run_id` and a per-run `seq`
//! number, merged with the event payload.

use pecko_application::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Suffix of every transcript file
pub const TRANSCRIPT_SUFFIX: &str = ".conversation.jsonl";

/// Transcript logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every line and on `Drop`.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    run_id: String,
    seq: AtomicU64,
}

impl JsonlConversationLogger {
    /// Create a logger writing to `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>, run_id: impl Into<String>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            run_id: run_id.into(),
            seq: AtomicU64::new(0),
        })
    }

    /// Open a fresh `<timestamp>.conversation.jsonl` file in `logs_dir`.
    ///
    /// The timestamp doubles as the run id. Returns `None` (after a warning)
    /// when the file cannot be created, so a broken log directory never
    /// stops a run.
    pub fn for_run(logs_dir: impl AsRef<Path>) -> Option<Self> {
        let logs_dir = logs_dir.as_ref();
        let run_id = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ").to_string();
        let path = logs_dir.join(format!("{}{}", run_id, TRANSCRIPT_SUFFIX));

        match Self::new(&path, run_id) {
            Ok(logger) => Some(logger),
            Err(e) => {
                warn!(
                    "Could not create conversation log {}: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    fn record(&self, event: ConversationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        map.insert("run_id".to_string(), Value::from(self.run_id.as_str()));
        map.insert("seq".to_string(), Value::from(seq));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let record = self.record(event);
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock()
            && let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush())
        {
            warn!("Could not write conversation log {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
