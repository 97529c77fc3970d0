//! CSV export of the summary journal.

use crate::{JournalEntry, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    run_id: String,
    recorded_at: String,
    training_type: String,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories_kcal: f64,
}

impl From<&JournalEntry> for CsvRow {
    fn from(entry: &JournalEntry) -> Self {
        CsvRow {
            run_id: entry.run_id.to_string(),
            recorded_at: entry.recorded_at.to_rfc3339(),
            training_type: entry.summary.training_type.clone(),
            duration_hours: entry.summary.duration_hours,
            distance_km: entry.summary.distance_km,
            mean_speed_kmh: entry.summary.mean_speed_kmh,
            calories_kcal: entry.summary.calories_kcal,
        }
    }
}

/// Append every journal entry to a CSV file
///
/// Headers are written only when the CSV is new or empty. Once the CSV is
/// synced the journal is renamed to `<journal>.processed`, so the next export
/// only sees summaries journaled after this one. Returns the number of rows
/// written.
pub fn journal_to_csv(journal_path: &Path, csv_path: &Path) -> Result<usize> {
    let entries = crate::sink::read_journal(journal_path)?;

    if entries.is_empty() {
        tracing::info!("No journal entries to export");
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for entry in &entries {
        writer.serialize(CsvRow::from(entry))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Exported {} journal entries to {:?}", entries.len(), csv_path);

    let archived = processed_path(journal_path);
    std::fs::rename(journal_path, &archived)?;
    tracing::info!("Archived journal to {:?}", archived);

    Ok(entries.len())
}

/// Where an exported journal is archived
fn processed_path(journal_path: &Path) -> PathBuf {
    let mut name = journal_path.as_os_str().to_owned();
    name.push(".processed");
    PathBuf::from(name)
}
