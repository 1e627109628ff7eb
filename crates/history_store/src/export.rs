use std::path::{Path, PathBuf};

use history_core::ExportArtifact;
use history_logging::{history_info, history_warn};

use crate::persist::{AtomicFileWriter, PersistError};
use crate::record::{StoreSettings, StoredRecord};

pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Renders the history as CSV, one quoted row per record:
/// text, format, timestamp millis, display timestamp, details.
pub fn build_history_csv(records: &[StoredRecord]) -> String {
    let mut buffer = String::new();
    for record in records {
        let timestamp = record.timestamp_millis.to_string();
        let display = record.display_timestamp();
        let fields = [
            record.text.as_str(),
            record.format.as_str(),
            timestamp.as_str(),
            display.as_str(),
            record.details.as_deref().unwrap_or_default(),
        ];
        let row: Vec<String> = fields.iter().map(|field| quote_field(field)).collect();
        buffer.push_str(&row.join(","));
        buffer.push_str("\r\n");
    }
    buffer
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn export_filename(now_millis: i64) -> String {
    format!("history-{now_millis}.csv")
}

/// Writes the CSV export into `dir` and describes the result.
pub fn write_history_export(
    dir: &Path,
    records: &[StoredRecord],
    now_millis: i64,
) -> Result<ExportArtifact, PersistError> {
    let csv = build_history_csv(records);
    let writer = AtomicFileWriter::new(PathBuf::from(dir));
    let path = writer.write(&export_filename(now_millis), csv.as_bytes())?;
    Ok(ExportArtifact {
        path,
        mime_type: EXPORT_MIME_TYPE.to_string(),
        entry_count: records.len(),
    })
}

/// Export for the store contract: `None` when there is nowhere to write.
pub(crate) fn export_records(
    settings: &StoreSettings,
    records: &[StoredRecord],
) -> Option<ExportArtifact> {
    let Some(dir) = settings.export_dir.as_deref() else {
        history_warn!("No export directory configured");
        return None;
    };
    match write_history_export(dir, records, (settings.now_millis)()) {
        Ok(artifact) => {
            history_info!("Wrote history export {:?}", artifact.path);
            Some(artifact)
        }
        Err(err) => {
            history_warn!("Could not write history export to {:?}: {}", dir, err);
            None
        }
    }
}
