use std::io::{self, Write};

use history_core::{Dialog, Effect, ShareError, ShareTarget};
use history_logging::{history_info, history_warn};

pub const EXPORT_UNAVAILABLE_MESSAGE: &str =
    "Cannot export: the export directory is missing or not writable.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct EffectRunner {
    share: Box<dyn ShareTarget>,
    share_subject: String,
}

impl EffectRunner {
    pub fn new(share: Box<dyn ShareTarget>, share_subject: impl Into<String>) -> Self {
        Self {
            share,
            share_subject: share_subject.into(),
        }
    }

    pub fn run(&self, effects: Vec<Effect>, out: &mut impl Write) -> io::Result<Flow> {
        let mut flow = Flow::Continue;
        for effect in effects {
            match effect {
                Effect::ReturnEntry { position, entry } => {
                    history_info!("Returning history row {}", position);
                    writeln!(out, "{}", entry.content().unwrap_or_default())?;
                }
                Effect::Share(artifact) => {
                    match self.share.share(&artifact, &self.share_subject) {
                        Ok(()) => history_info!("Shared {:?}", artifact.path),
                        Err(ShareError::HandlerNotFound { mime_type }) => {
                            history_warn!(
                                "No handler for {}; export left at {:?}",
                                mime_type,
                                artifact.path
                            );
                        }
                        Err(err) => history_warn!("Sharing {:?} failed: {}", artifact.path, err),
                    }
                    writeln!(
                        out,
                        "Exported {} entries to {}",
                        artifact.entry_count,
                        artifact.path.display()
                    )?;
                }
                Effect::ShowDialog(Dialog::ExportUnavailable) => {
                    writeln!(out, "{EXPORT_UNAVAILABLE_MESSAGE}")?;
                }
                // Rendered from the view model's pending confirmation.
                Effect::ShowDialog(Dialog::ConfirmClearAll) => {}
                Effect::Finish => flow = Flow::Exit,
            }
        }
        Ok(flow)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use history_core::{ExportArtifact, HistoryEntry};

    use super::*;

    struct RecordingShare {
        shared: RefCell<Vec<PathBuf>>,
        available: bool,
    }

    impl ShareTarget for RecordingShare {
        fn share(&self, artifact: &ExportArtifact, _subject: &str) -> Result<(), ShareError> {
            if !self.available {
                return Err(ShareError::HandlerNotFound {
                    mime_type: artifact.mime_type.clone(),
                });
            }
            self.shared.borrow_mut().push(artifact.path.clone());
            Ok(())
        }
    }

    fn runner(available: bool) -> EffectRunner {
        EffectRunner::new(
            Box::new(RecordingShare {
                shared: RefCell::new(Vec::new()),
                available,
            }),
            "subject",
        )
    }

    fn artifact() -> ExportArtifact {
        ExportArtifact {
            path: PathBuf::from("exports/history-1.csv"),
            mime_type: "text/csv".to_string(),
            entry_count: 2,
        }
    }

    #[test]
    fn return_entry_prints_content_and_finish_exits() {
        let mut out = Vec::new();
        let flow = runner(true)
            .run(
                vec![
                    Effect::ReturnEntry {
                        position: 0,
                        entry: HistoryEntry::new("hello", None, None),
                    },
                    Effect::Finish,
                ],
                &mut out,
            )
            .unwrap();

        assert_eq!(flow, Flow::Exit);
        assert_eq!(String::from_utf8(out).unwrap(), "hello\n");
    }

    #[test]
    fn missing_share_handler_is_not_fatal() {
        let mut out = Vec::new();
        let flow = runner(false)
            .run(vec![Effect::Share(artifact())], &mut out)
            .unwrap();

        assert_eq!(flow, Flow::Continue);
        assert!(String::from_utf8(out).unwrap().contains("Exported 2 entries"));
    }

    #[test]
    fn export_unavailable_is_reported() {
        let mut out = Vec::new();
        runner(true)
            .run(vec![Effect::ShowDialog(Dialog::ExportUnavailable)], &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{EXPORT_UNAVAILABLE_MESSAGE}\n")
        );
    }
}
