use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use crate::backend::AppCmd;
use crate::backend::config::AppConfig;
use crate::backend::error::UploadError;
use crate::backend::format::{format_file_size, format_upload_date};
use crate::backend::model::{AttachedFile, DocumentSlot, DocumentStatus};
use crate::backend::notify::Notice;
use crate::components::AppState;

fn send_or_report(cmd_tx: &UnboundedSender<AppCmd>, mut app_state: AppState, slot_name: &str, cmd: AppCmd) {
    if let Err(e) = cmd_tx.send(cmd) {
        let error = UploadError::Transport(e.to_string());
        tracing::warn!("Failed to send upload command: {}", error);
        app_state.notify(Notice::error(format!("{}: {}", slot_name, error)));
    }
}

/// Only the file's metadata is sent; the contents are never read.
fn submit_picked(file_data: &FileData, slot: &DocumentSlot, cmd_tx: &UnboundedSender<AppCmd>, app_state: AppState) {
    let file = AttachedFile::new(file_data.name(), file_data.size(), file_data.content_type());
    tracing::debug!("Picked {} ({} bytes) for {}", file.name, file.size_bytes, slot.id);
    let cmd = AppCmd::SubmitFile { slot: slot.clone(), file };
    send_or_report(cmd_tx, app_state, &slot.name, cmd);
}

#[component]
pub fn FileUploadCard(slot: DocumentSlot, uploading: bool, compact: Option<bool>) -> Element {
    let app_state = use_context::<AppState>();
    let config = use_context::<AppConfig>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();
    let mut is_dragging = use_signal(|| false);

    let compact = compact.unwrap_or(false);
    let input_id = format!("file-upload-{}", slot.id);

    let upload_from_picker = {
        let cmd_tx = cmd_tx.clone();
        let slot = slot.clone();
        move |evt: Event<FormData>| {
            if let Some(file_data) = evt.files().into_iter().next() {
                submit_picked(&file_data, &slot, &cmd_tx, app_state);
            }
        }
    };

    let upload_from_drop = {
        let cmd_tx = cmd_tx.clone();
        let slot = slot.clone();
        move |evt: Event<DragData>| {
            evt.prevent_default();
            is_dragging.set(false);
            if uploading {
                return;
            }
            if let Some(file_data) = evt.files().into_iter().next() {
                submit_picked(&file_data, &slot, &cmd_tx, app_state);
            }
        }
    };

    let remove = {
        let slot = slot.clone();
        move |_| {
            let name = slot.name.clone();
            send_or_report(&cmd_tx, app_state, &name, AppCmd::RemoveFile { slot: slot.clone() });
        }
    };

    let (status_color, status_icon) = if uploading {
        ("text-muted", "⟳")
    } else {
        match slot.status {
            DocumentStatus::Verified => ("text-green", "✓"),
            DocumentStatus::Uploaded => ("text-amber", "!"),
            DocumentStatus::Pending => ("text-muted", "⇪"),
        }
    };
    let status_text = if uploading { "Uploading..." } else { slot.status.label() };
    let card_state = match slot.status {
        DocumentStatus::Verified => "upload-card-verified",
        DocumentStatus::Uploaded => "upload-card-uploaded",
        DocumentStatus::Pending => "",
    };
    let drag_class = if is_dragging() { "upload-card-dragging" } else { "" };
    let size_class = if compact { "upload-card-compact" } else { "" };

    let title = slot
        .attached_file
        .as_ref()
        .map(|f| f.name.clone())
        .unwrap_or_else(|| slot.name.clone());
    let subtitle = slot
        .attached_file
        .as_ref()
        .map(|f| format_file_size(f.size_bytes))
        .unwrap_or_else(|| "PDF, DOCX, JPG (max. 10MB)".to_string());
    let has_file = slot.attached_file.is_some();
    let is_verified = slot.status == DocumentStatus::Verified;
    let spin_class = if uploading { "animate-spin" } else { "" };
    let picker_class = if uploading {
        "btn btn-sm btn-secondary disabled"
    } else if has_file {
        "btn btn-sm btn-secondary"
    } else {
        "btn btn-sm btn-primary"
    };

    rsx! {
        div {
            class: "upload-card {card_state} {drag_class} {size_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                is_dragging.set(true);
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                is_dragging.set(false);
            },
            ondrop: upload_from_drop,

            div { class: "flex flex-col items-center justify-center text-center space-y-2",
                div { class: "status-icon {status_color}",
                    span { class: "{spin_class}", "{status_icon}" }
                }

                div { class: "space-y-1",
                    p { class: "text-sm font-medium", "{title}" }
                    p { class: "text-xs text-[var(--text-muted)] truncate", "{subtitle}" }
                    if let Some(at) = slot.uploaded_at {
                        if !compact {
                            p { class: "text-xs text-[var(--text-muted)]", "Uploaded on: {format_upload_date(&at)}" }
                        }
                    }
                }

                div { class: "flex items-center gap-2",
                    if is_verified {
                        span { class: "btn btn-sm btn-success", "{status_text}" }
                    } else {
                        label {
                            class: "{picker_class}",
                            r#for: "{input_id}",
                            span { class: "{status_color}", "{status_text}" }
                        }
                    }

                    if has_file && !is_verified {
                        button {
                            class: "btn btn-sm btn-danger-outline",
                            disabled: uploading,
                            onclick: remove,
                            "Remove"
                        }
                    }
                }
            }

            input {
                r#type: "file",
                id: "{input_id}",
                class: "hidden",
                accept: "{config.accept_attr()}",
                disabled: uploading || is_verified,
                onchange: upload_from_picker,
            }
        }
    }
}
