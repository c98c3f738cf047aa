pub mod dashboard_page;
pub mod document_list;
pub mod edit_proposal_page;
pub mod file_upload;
pub mod nav_bar;
pub mod proposal_header;
pub mod proposal_table;
pub mod toaster;

use dioxus::prelude::*;
use std::collections::HashSet;
use tokio::sync::mpsc;

use crate::backend::catalog;
use crate::backend::documents::apply_slot_update;
use crate::backend::error::UploadError;
use crate::backend::model::{DocumentCategory, LandProposal, LandProposalItem};
use crate::backend::notify::Notice;
use crate::backend::AppEvent;

#[derive(Clone, Copy)]
pub struct AppState {
    pub proposal: Signal<LandProposal>,
    pub items: Signal<Vec<LandProposalItem>>,
    pub categories: Signal<Vec<DocumentCategory>>,
    pub uploading: Signal<HashSet<String>>, // Slot ids shown as "Uploading..."
    pub notices: Signal<Vec<Notice>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            proposal: use_signal(catalog::mock_proposal),
            items: use_signal(catalog::mock_proposal_items),
            categories: use_signal(catalog::document_categories),
            uploading: use_signal(|| HashSet::new()),
            notices: use_signal(|| vec![]),
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notices.write().push(notice);
    }
}

/// Folds backend events into the session state.
pub async fn handle_events(mut app_state: AppState, mut event_rx: mpsc::UnboundedReceiver<AppEvent>) {
    while let Some(event) = event_rx.recv().await {
        match event {
            AppEvent::UploadStarted { slot_id } => {
                app_state.uploading.write().insert(slot_id);
            }
            AppEvent::SlotUpdated(slot) => {
                app_state.uploading.write().remove(&slot.id);
                let next = apply_slot_update(&app_state.categories.read(), &slot);
                if let Some(next) = next {
                    app_state.categories.set(next);
                }
            }
            AppEvent::UploadFailed { slot_id, error } => {
                // A rejected duplicate must not clear the running upload.
                if !matches!(error, UploadError::UploadInFlight { .. }) {
                    app_state.uploading.write().remove(&slot_id);
                }
            }
            AppEvent::ProposalSaved { proposal, items } => {
                app_state.proposal.set(proposal);
                app_state.items.set(items);
            }
            AppEvent::Notify(notice) => app_state.notify(notice),
        }
    }
}
