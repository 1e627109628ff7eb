//! Scan history storage: record lists, JSON persistence and CSV export.
mod export;
mod file;
mod memory;
mod persist;
mod record;

pub use export::{build_history_csv, export_filename, write_history_export, EXPORT_MIME_TYPE};
pub use file::FileHistoryStore;
pub use memory::MemoryHistoryStore;
pub use persist::{ensure_writable_dir, AtomicFileWriter, PersistError};
pub use record::{Clock, StoreSettings, StoredRecord, DISPLAY_TIME_FORMAT};
