//! Destinations for workout summaries.
//!
//! Summaries are written either to a stream (text or JSON lines) or appended
//! to a JSONL journal file. The journal is locked while written so several
//! `fittrack` processes can share it.

use crate::{InfoMessage, JournalEntry, Result};
use chrono::Utc;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Summary sink trait for emitting summaries
pub trait SummarySink {
    fn emit(&mut self, summary: &InfoMessage) -> Result<()>;
}

/// Writes one formatted message per line
pub struct TextSink<W: Write> {
    writer: W,
    precision: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W, precision: usize) -> Self {
        Self { writer, precision }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SummarySink for TextSink<W> {
    fn emit(&mut self, summary: &InfoMessage) -> Result<()> {
        writeln!(
            self.writer,
            "{}",
            summary.message_with_precision(self.precision)
        )?;
        Ok(())
    }
}

/// Writes one JSON object per line
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SummarySink for JsonSink<W> {
    fn emit(&mut self, summary: &InfoMessage) -> Result<()> {
        serde_json::to_writer(&mut self.writer, summary)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// JSONL journal sink with file locking
pub struct JournalSink {
    path: PathBuf,
    run_id: Uuid,
}

impl JournalSink {
    /// Create a journal sink; every entry it writes carries `run_id`
    pub fn new(path: impl Into<PathBuf>, run_id: Uuid) -> Self {
        Self {
            path: path.into(),
            run_id,
        }
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl SummarySink for JournalSink {
    fn emit(&mut self, summary: &InfoMessage) -> Result<()> {
        self.ensure_parent_dir()?;

        let entry = JournalEntry {
            run_id: self.run_id,
            recorded_at: Utc::now(),
            summary: summary.clone(),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(&entry)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        file.unlock()?;

        tracing::debug!(
            "Appended {} summary to journal {:?}",
            summary.training_type,
            self.path
        );
        Ok(())
    }
}

/// Fans every summary out to several sinks, in order
#[derive(Default)]
pub struct MultiSink<'a> {
    sinks: Vec<Box<dyn SummarySink + 'a>>,
}

impl<'a> MultiSink<'a> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn push(&mut self, sink: impl SummarySink + 'a) {
        self.sinks.push(Box::new(sink));
    }
}

impl SummarySink for MultiSink<'_> {
    fn emit(&mut self, summary: &InfoMessage) -> Result<()> {
        for sink in &mut self.sinks {
            sink.emit(summary)?;
        }
        Ok(())
    }
}

/// Read all entries from a journal file
///
/// Malformed lines are logged and skipped.
pub fn read_journal(path: &Path) -> Result<Vec<JournalEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut entries = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<JournalEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Failed to parse journal entry at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} entries from journal", entries.len());
    Ok(entries)
}
