use chrono::Utc;

use crate::backend::config::AppConfig;
use crate::backend::error::UploadError;
use crate::backend::model::{AttachedFile, DocumentSlot, DocumentStatus};

/// Checks the type and size limits. Only enforced when the config says so.
pub fn check_file(file: &AttachedFile, config: &AppConfig) -> Result<(), UploadError> {
    if !config.enforce_file_rules {
        return Ok(());
    }
    let accepted = file
        .extension()
        .map(|ext| config.accepted_extensions.iter().any(|a| a.eq_ignore_ascii_case(&ext)))
        .unwrap_or(false);
    if !accepted {
        return Err(UploadError::InvalidFileType { name: file.name.clone() });
    }
    if file.size_bytes > config.max_file_size_bytes {
        return Err(UploadError::FileTooLarge {
            name: file.name.clone(),
            size: file.size_bytes,
            max: config.max_file_size_bytes,
        });
    }
    Ok(())
}

fn ensure_mutable(slot: &DocumentSlot) -> Result<(), UploadError> {
    if slot.status == DocumentStatus::Verified {
        return Err(UploadError::SlotVerified { slot_id: slot.id.clone() });
    }
    Ok(())
}

/// Validates a submission without waiting. Split out so the backend can
/// reject before it marks the slot as uploading.
pub fn begin_upload(slot: &DocumentSlot, file: &AttachedFile, config: &AppConfig) -> Result<(), UploadError> {
    ensure_mutable(slot)?;
    check_file(file, config)
}

/// The slot after a finished upload.
pub fn complete_upload(slot: &DocumentSlot, file: AttachedFile) -> DocumentSlot {
    DocumentSlot {
        status: DocumentStatus::Uploaded,
        attached_file: Some(file),
        uploaded_at: Some(Utc::now()),
        ..slot.clone()
    }
}

/// Attaches `file` to `slot` after the simulated upload latency.
pub async fn submit_file(
    slot: DocumentSlot,
    file: AttachedFile,
    config: &AppConfig,
) -> Result<DocumentSlot, UploadError> {
    begin_upload(&slot, &file, config)?;
    crate::backend::sleep(config.upload_latency()).await;
    Ok(complete_upload(&slot, file))
}

pub fn remove_file(slot: &DocumentSlot) -> Result<DocumentSlot, UploadError> {
    ensure_mutable(slot)?;
    Ok(DocumentSlot {
        status: DocumentStatus::Pending,
        attached_file: None,
        uploaded_at: None,
        ..slot.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> AppConfig {
        AppConfig { upload_latency_ms: 5, ..AppConfig::default() }
    }

    fn strict_config() -> AppConfig {
        AppConfig { enforce_file_rules: true, ..fast_config() }
    }

    fn deed_pdf() -> AttachedFile {
        AttachedFile::new("sale-deed.pdf", 204_800, Some("application/pdf".into()))
    }

    #[tokio::test]
    async fn test_submit_to_pending_slot() {
        let slot = DocumentSlot::pending("doc1", "Sale Deed");
        let before = Utc::now();

        let updated = submit_file(slot.clone(), deed_pdf(), &fast_config()).await.unwrap();

        assert_eq!(updated.status, DocumentStatus::Uploaded);
        assert_eq!(updated.attached_file, Some(deed_pdf()));
        assert!(updated.uploaded_at.unwrap() > before);
        assert_eq!(updated.id, slot.id);
        assert_eq!(updated.name, slot.name);
        // Input value untouched
        assert_eq!(slot.status, DocumentStatus::Pending);
    }

    #[tokio::test]
    async fn test_reupload_replaces_file() {
        let config = fast_config();
        let slot = DocumentSlot::pending("doc1", "Sale Deed");
        let first = submit_file(slot, deed_pdf(), &config).await.unwrap();

        let scan = AttachedFile::new("sale-deed-scan.jpg", 512, Some("image/jpeg".into()));
        let second = submit_file(first.clone(), scan.clone(), &config).await.unwrap();

        assert_eq!(second.status, DocumentStatus::Uploaded);
        assert_eq!(second.attached_file, Some(scan));
        assert!(second.uploaded_at.unwrap() > first.uploaded_at.unwrap());
    }

    #[tokio::test]
    async fn test_remove_after_upload_clears_fields() {
        let slot = DocumentSlot::pending("doc1", "Sale Deed");
        let uploaded = submit_file(slot.clone(), deed_pdf(), &fast_config()).await.unwrap();

        let removed = remove_file(&uploaded).unwrap();
        assert_eq!(removed, slot);
        assert!(removed.is_consistent());
    }

    #[test]
    fn test_remove_on_pending_stays_consistent() {
        let slot = DocumentSlot::pending("doc7", "JDA & POA");
        let removed = remove_file(&slot).unwrap();
        assert_eq!(removed, slot);
    }

    #[tokio::test]
    async fn test_verified_slot_is_terminal() {
        let slot = DocumentSlot {
            status: DocumentStatus::Verified,
            attached_file: Some(deed_pdf()),
            uploaded_at: Some(Utc::now()),
            ..DocumentSlot::pending("doc1", "Sale Deed")
        };

        let err = submit_file(slot.clone(), deed_pdf(), &fast_config()).await.unwrap_err();
        assert_eq!(err, UploadError::SlotVerified { slot_id: "doc1".into() });
        assert_eq!(remove_file(&slot).unwrap_err(), UploadError::SlotVerified { slot_id: "doc1".into() });
    }

    #[test]
    fn test_rules_are_advisory_by_default() {
        let exe = AttachedFile::new("setup.exe", 50 * 1024 * 1024, None);
        assert!(check_file(&exe, &fast_config()).is_ok());
    }

    #[test]
    fn test_strict_rules_reject_type_and_size() {
        let config = strict_config();

        let exe = AttachedFile::new("setup.exe", 10, None);
        assert_eq!(
            check_file(&exe, &config),
            Err(UploadError::InvalidFileType { name: "setup.exe".into() })
        );

        let huge = AttachedFile::new("survey.PNG", config.max_file_size_bytes + 1, None);
        assert!(matches!(check_file(&huge, &config), Err(UploadError::FileTooLarge { .. })));

        let exact = AttachedFile::new("survey.png", config.max_file_size_bytes, None);
        assert!(check_file(&exact, &config).is_ok());
    }

    #[tokio::test]
    async fn test_strict_rejection_leaves_slot_pending() {
        let slot = DocumentSlot::pending("doc31", "7-12 Extract");
        let result = submit_file(slot.clone(), AttachedFile::new("notes.txt", 10, None), &strict_config()).await;
        assert!(matches!(result, Err(UploadError::InvalidFileType { .. })));
        assert!(slot.is_consistent());
    }
}
