use thiserror::Error;

use crate::StoreError;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("row {position} is out of range for a list of {len}")]
    OutOfRange { position: usize, len: usize },
    #[error("export medium unavailable")]
    ExportUnavailable,
    #[error(transparent)]
    Store(#[from] StoreError),
}
