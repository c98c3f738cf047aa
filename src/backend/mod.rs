pub mod catalog;
pub mod config;
pub mod documents;
pub mod error;
pub mod format;
pub mod model;
pub mod notify;
pub mod proposal;
pub mod upload;

use config::AppConfig;
use error::UploadError;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use model::{AttachedFile, DocumentSlot, LandProposal, LandProposalItem};
use notify::Notice;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppCmd {
    SubmitFile { slot: DocumentSlot, file: AttachedFile },
    RemoveFile { slot: DocumentSlot },
    VerifyAll { uploaded: usize },
    SaveProposal { proposal: LandProposal, items: Vec<LandProposalItem> },
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    UploadStarted { slot_id: String },
    SlotUpdated(DocumentSlot),
    UploadFailed { slot_id: String, error: UploadError },
    ProposalSaved { proposal: LandProposal, items: Vec<LandProposalItem> },
    Notify(Notice),
}

type UploadOutcome = (DocumentSlot, Result<DocumentSlot, UploadError>);

#[cfg(not(target_arch = "wasm32"))]
type UploadFuture = futures::future::BoxFuture<'static, UploadOutcome>;
#[cfg(target_arch = "wasm32")]
type UploadFuture = futures::future::LocalBoxFuture<'static, UploadOutcome>;

pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

/// Runs document uploads for the session. The registry itself lives in the
/// view; the backend only sees the slot a command carries and answers with
/// the replacement slot.
pub struct Backend {
    config: AppConfig,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    in_flight: HashSet<String>, // Slot ids with an upload running
}

impl Backend {
    pub fn new(
        config: AppConfig,
        cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            config,
            cmd_rx,
            event_tx,
            in_flight: HashSet::new(),
        }
    }

    /// Returns once the command channel is closed and every running upload
    /// has finished.
    pub async fn run(&mut self) {
        let mut uploads: FuturesUnordered<UploadFuture> = FuturesUnordered::new();

        loop {
            tokio::select! {
                Some(cmd) = self.cmd_rx.recv() => {
                    if let Some(upload) = self.handle_command(cmd) {
                        uploads.push(upload);
                    }
                }
                Some((slot, result)) = uploads.next(), if !uploads.is_empty() => {
                    self.finish_upload(slot, result);
                }
                else => break,
            }
        }
        tracing::debug!("Upload backend stopped");
    }

    fn emit(&self, event: AppEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::warn!("Event receiver dropped");
        }
    }

    fn reject(&self, slot: &DocumentSlot, error: UploadError) {
        tracing::warn!("Rejected change to {}: {}", slot.id, error);
        self.emit(AppEvent::Notify(Notice::error(format!("{}: {}", slot.name, error))));
        self.emit(AppEvent::UploadFailed { slot_id: slot.id.clone(), error });
    }

    fn handle_command(&mut self, cmd: AppCmd) -> Option<UploadFuture> {
        match cmd {
            AppCmd::SubmitFile { slot, file } => {
                if self.in_flight.contains(&slot.id) {
                    self.reject(&slot, UploadError::UploadInFlight { slot_id: slot.id.clone() });
                    return None;
                }
                if let Err(e) = upload::begin_upload(&slot, &file, &self.config) {
                    self.reject(&slot, e);
                    return None;
                }

                tracing::info!("Uploading {} for {} ({} bytes)", file.name, slot.id, file.size_bytes);
                self.in_flight.insert(slot.id.clone());
                self.emit(AppEvent::UploadStarted { slot_id: slot.id.clone() });

                let config = self.config.clone();
                let fut = async move {
                    let result = upload::submit_file(slot.clone(), file, &config).await;
                    (slot, result)
                };
                #[cfg(not(target_arch = "wasm32"))]
                let fut = fut.boxed();
                #[cfg(target_arch = "wasm32")]
                let fut = fut.boxed_local();
                Some(fut)
            }
            AppCmd::RemoveFile { slot } => {
                if self.in_flight.contains(&slot.id) {
                    self.reject(&slot, UploadError::UploadInFlight { slot_id: slot.id.clone() });
                    return None;
                }
                match upload::remove_file(&slot) {
                    Ok(updated) => {
                        tracing::info!("Removed file from {}", slot.id);
                        self.emit(AppEvent::SlotUpdated(updated));
                        self.emit(AppEvent::Notify(Notice::success(format!("{} removed", slot.name))));
                    }
                    Err(e) => self.reject(&slot, e),
                }
                None
            }
            AppCmd::VerifyAll { uploaded } => {
                // Slot statuses are left alone until a verification authority exists.
                tracing::info!("Verification requested for {} uploaded documents", uploaded);
                self.emit(AppEvent::Notify(Notice::info(
                    "Verification process initiated for all uploaded documents",
                )));
                None
            }
            AppCmd::SaveProposal { proposal, items } => {
                tracing::info!("Saving proposal {} with {} land items", proposal.proposal_number, items.len());
                self.emit(AppEvent::ProposalSaved { proposal, items });
                self.emit(AppEvent::Notify(Notice::success("Proposal updated successfully!")));
                None
            }
        }
    }

    fn finish_upload(&mut self, slot: DocumentSlot, result: Result<DocumentSlot, UploadError>) {
        self.in_flight.remove(&slot.id);
        match result {
            Ok(updated) => {
                tracing::info!("Upload finished for {}", slot.id);
                self.emit(AppEvent::SlotUpdated(updated));
                self.emit(AppEvent::Notify(Notice::success(format!("{} uploaded successfully", slot.name))));
            }
            Err(e) => self.reject(&slot, e),
        }
    }
}

pub async fn init(
    config: AppConfig,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    let mut backend = Backend::new(config, cmd_rx, event_tx);
    backend.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::catalog::{mock_proposal, mock_proposal_items};
    use crate::backend::model::DocumentStatus;
    use crate::backend::notify::NoticeLevel;

    fn spawn_backend(config: AppConfig) -> (mpsc::UnboundedSender<AppCmd>, mpsc::UnboundedReceiver<AppEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        tokio::spawn(init(config, cmd_rx, event_tx));
        (cmd_tx, event_rx)
    }

    fn test_config() -> AppConfig {
        AppConfig { upload_latency_ms: 50, ..AppConfig::default() }
    }

    async fn next_event(event_rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> AppEvent {
        match tokio::time::timeout(Duration::from_secs(5), event_rx.recv()).await {
            Ok(Some(event)) => event,
            Ok(None) => panic!("Event channel closed"),
            Err(_) => panic!("Timed out waiting for event"),
        }
    }

    fn sale_deed() -> DocumentSlot {
        DocumentSlot::pending("doc1", "Sale Deed")
    }

    fn deed_pdf() -> AttachedFile {
        AttachedFile::new("sale-deed.pdf", 4096, Some("application/pdf".into()))
    }

    #[tokio::test]
    async fn test_upload_then_remove() {
        let (cmd_tx, mut event_rx) = spawn_backend(test_config());

        cmd_tx.send(AppCmd::SubmitFile { slot: sale_deed(), file: deed_pdf() }).unwrap();

        match next_event(&mut event_rx).await {
            AppEvent::UploadStarted { slot_id } => assert_eq!(slot_id, "doc1"),
            other => panic!("Expected UploadStarted, got {:?}", other),
        }
        let uploaded = match next_event(&mut event_rx).await {
            AppEvent::SlotUpdated(slot) => slot,
            other => panic!("Expected SlotUpdated, got {:?}", other),
        };
        assert_eq!(uploaded.status, DocumentStatus::Uploaded);
        assert_eq!(uploaded.attached_file, Some(deed_pdf()));
        assert!(uploaded.uploaded_at.is_some());

        match next_event(&mut event_rx).await {
            AppEvent::Notify(notice) => {
                assert_eq!(notice.level, NoticeLevel::Success);
                assert_eq!(notice.message, "Sale Deed uploaded successfully");
            }
            other => panic!("Expected Notify, got {:?}", other),
        }

        cmd_tx.send(AppCmd::RemoveFile { slot: uploaded }).unwrap();
        match next_event(&mut event_rx).await {
            AppEvent::SlotUpdated(slot) => assert_eq!(slot, sale_deed()),
            other => panic!("Expected SlotUpdated, got {:?}", other),
        }
        match next_event(&mut event_rx).await {
            AppEvent::Notify(notice) => assert_eq!(notice.message, "Sale Deed removed"),
            other => panic!("Expected Notify, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_second_submission_while_in_flight_is_rejected() {
        let (cmd_tx, mut event_rx) = spawn_backend(AppConfig { upload_latency_ms: 300, ..AppConfig::default() });

        cmd_tx.send(AppCmd::SubmitFile { slot: sale_deed(), file: deed_pdf() }).unwrap();
        let other_file = AttachedFile::new("other.pdf", 1, None);
        cmd_tx.send(AppCmd::SubmitFile { slot: sale_deed(), file: other_file }).unwrap();
        cmd_tx.send(AppCmd::RemoveFile { slot: sale_deed() }).unwrap();

        assert!(matches!(next_event(&mut event_rx).await, AppEvent::UploadStarted { .. }));

        let mut rejections = 0;
        let mut updated = None;
        while updated.is_none() {
            match next_event(&mut event_rx).await {
                AppEvent::UploadFailed { slot_id, error } => {
                    assert_eq!(slot_id, "doc1");
                    assert_eq!(error, UploadError::UploadInFlight { slot_id: "doc1".into() });
                    rejections += 1;
                }
                AppEvent::SlotUpdated(slot) => updated = Some(slot),
                AppEvent::Notify(_) => {}
                other => panic!("Unexpected event {:?}", other),
            }
        }
        assert_eq!(rejections, 2);
        // The first submission wins.
        assert_eq!(updated.unwrap().attached_file, Some(deed_pdf()));
    }

    #[tokio::test]
    async fn test_uploads_to_different_slots_are_independent() {
        let (cmd_tx, mut event_rx) = spawn_backend(test_config());

        cmd_tx.send(AppCmd::SubmitFile { slot: sale_deed(), file: deed_pdf() }).unwrap();
        let will = DocumentSlot::pending("doc21", "Will");
        cmd_tx.send(AppCmd::SubmitFile { slot: will, file: AttachedFile::new("will.pdf", 10, None) }).unwrap();

        let mut finished = HashSet::new();
        while finished.len() < 2 {
            if let AppEvent::SlotUpdated(slot) = next_event(&mut event_rx).await {
                assert_eq!(slot.status, DocumentStatus::Uploaded);
                finished.insert(slot.id);
            }
        }
        assert!(finished.contains("doc1"));
        assert!(finished.contains("doc21"));
    }

    #[tokio::test]
    async fn test_strict_rules_reject_before_upload() {
        let config = AppConfig { enforce_file_rules: true, ..test_config() };
        let (cmd_tx, mut event_rx) = spawn_backend(config);

        cmd_tx
            .send(AppCmd::SubmitFile { slot: sale_deed(), file: AttachedFile::new("virus.exe", 10, None) })
            .unwrap();

        match next_event(&mut event_rx).await {
            AppEvent::Notify(notice) => assert_eq!(notice.level, NoticeLevel::Error),
            other => panic!("Expected Notify, got {:?}", other),
        }
        match next_event(&mut event_rx).await {
            AppEvent::UploadFailed { error, .. } => {
                assert_eq!(error, UploadError::InvalidFileType { name: "virus.exe".into() })
            }
            other => panic!("Expected UploadFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_verify_all_only_notifies() {
        let (cmd_tx, mut event_rx) = spawn_backend(test_config());

        cmd_tx.send(AppCmd::VerifyAll { uploaded: 3 }).unwrap();
        match next_event(&mut event_rx).await {
            AppEvent::Notify(notice) => {
                assert_eq!(notice.level, NoticeLevel::Info);
                assert_eq!(notice.message, "Verification process initiated for all uploaded documents")
            }
            other => panic!("Expected Notify, got {:?}", other),
        }
        drop(cmd_tx);
        // Nothing else is emitted before the loop shuts down.
        assert!(event_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_save_proposal_echoes_values() {
        let (cmd_tx, mut event_rx) = spawn_backend(test_config());
        let mut proposal = mock_proposal();
        proposal.village = "Maan".into();

        cmd_tx
            .send(AppCmd::SaveProposal { proposal: proposal.clone(), items: mock_proposal_items() })
            .unwrap();

        match next_event(&mut event_rx).await {
            AppEvent::ProposalSaved { proposal: saved, items } => {
                assert_eq!(saved, proposal);
                assert_eq!(items.len(), 2);
            }
            other => panic!("Expected ProposalSaved, got {:?}", other),
        }
        match next_event(&mut event_rx).await {
            AppEvent::Notify(notice) => assert_eq!(notice.message, "Proposal updated successfully!"),
            other => panic!("Expected Notify, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_backend_drains_uploads_after_channel_closes() {
        let (cmd_tx, mut event_rx) = spawn_backend(test_config());
        cmd_tx.send(AppCmd::SubmitFile { slot: sale_deed(), file: deed_pdf() }).unwrap();
        drop(cmd_tx);

        let mut saw_update = false;
        while let Ok(Some(event)) = tokio::time::timeout(Duration::from_secs(5), event_rx.recv()).await {
            if matches!(event, AppEvent::SlotUpdated(_)) {
                saw_update = true;
            }
        }
        assert!(saw_update);
    }
}
