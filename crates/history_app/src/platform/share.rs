use std::io;
use std::process::Command;

use history_core::{ExportArtifact, ShareError, ShareTarget};
use history_logging::history_debug;

/// Hands the exported file to an external program, e.g. `xdg-open` or a
/// mail helper, as `<program> <path>` with the subject in the environment.
pub struct CommandShareTarget {
    program: Option<String>,
}

impl CommandShareTarget {
    pub fn new(program: Option<String>) -> Self {
        Self { program }
    }
}

impl ShareTarget for CommandShareTarget {
    fn share(&self, artifact: &ExportArtifact, subject: &str) -> Result<(), ShareError> {
        let not_found = || ShareError::HandlerNotFound {
            mime_type: artifact.mime_type.clone(),
        };
        let program = self.program.as_deref().ok_or_else(not_found)?;

        history_debug!("Sharing {:?} via {}", artifact.path, program);
        let status = Command::new(program)
            .arg(&artifact.path)
            .env("SCAN_HISTORY_SUBJECT", subject)
            .env("SCAN_HISTORY_MIME_TYPE", &artifact.mime_type)
            .status()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => not_found(),
                _ => ShareError::Failed(err.to_string()),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ShareError::Failed(format!("{program} exited with {status}")))
        }
    }
}
