use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Uploaded,
    Verified,
}

impl DocumentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Upload Document",
            DocumentStatus::Uploaded => "Uploaded",
            DocumentStatus::Verified => "Verified",
        }
    }
}

/// Metadata of a file picked or dropped by the user. The bytes themselves
/// are never kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttachedFile {
    pub name: String,
    pub size_bytes: u64,
    pub content_type: Option<String>,
}

impl AttachedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, content_type: Option<String>) -> Self {
        Self { name: name.into(), size_bytes, content_type }
    }

    /// Lowercased extension including the leading dot, e.g. `.pdf`.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(format!(".{}", ext.to_lowercase()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentSlot {
    pub id: String,
    pub name: String,
    pub status: DocumentStatus,
    #[serde(default)]
    pub attached_file: Option<AttachedFile>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl DocumentSlot {
    pub fn pending(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: DocumentStatus::Pending,
            attached_file: None,
            uploaded_at: None,
        }
    }

    /// A pending slot carries neither a file nor a timestamp; only
    /// uploaded or verified slots may carry a file.
    pub fn is_consistent(&self) -> bool {
        match self.status {
            DocumentStatus::Pending => self.attached_file.is_none() && self.uploaded_at.is_none(),
            DocumentStatus::Uploaded | DocumentStatus::Verified => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentCategory {
    pub name: String,
    pub documents: Vec<DocumentSlot>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LandZone {
    Residential,
    Commercial,
    Industrial,
    Agricultural,
}

impl LandZone {
    pub const ALL: [LandZone; 4] = [
        LandZone::Residential,
        LandZone::Commercial,
        LandZone::Industrial,
        LandZone::Agricultural,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LandZone::Residential => "Residential",
            LandZone::Commercial => "Commercial",
            LandZone::Industrial => "Industrial",
            LandZone::Agricultural => "Agricultural",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|z| z.label() == label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AreaUnit {
    #[serde(rename = "sq.m")]
    SquareMetre,
    #[serde(rename = "sq.ft")]
    SquareFoot,
    #[serde(rename = "acre")]
    Acre,
    #[serde(rename = "hectare")]
    Hectare,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 4] = [
        AreaUnit::SquareMetre,
        AreaUnit::SquareFoot,
        AreaUnit::Acre,
        AreaUnit::Hectare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AreaUnit::SquareMetre => "sq.m",
            AreaUnit::SquareFoot => "sq.ft",
            AreaUnit::Acre => "acre",
            AreaUnit::Hectare => "hectare",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LandStatus {
    InProcess,
    Approved,
    Rejected,
}

impl LandStatus {
    pub const ALL: [LandStatus; 3] = [LandStatus::InProcess, LandStatus::Approved, LandStatus::Rejected];

    pub fn label(&self) -> &'static str {
        match self {
            LandStatus::InProcess => "In Process",
            LandStatus::Approved => "Approved",
            LandStatus::Rejected => "Rejected",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProposalType {
    AgriculturalToNonAgricultural,
    Residential,
    Commercial,
    Industrial,
}

impl ProposalType {
    pub const ALL: [ProposalType; 4] = [
        ProposalType::AgriculturalToNonAgricultural,
        ProposalType::Residential,
        ProposalType::Commercial,
        ProposalType::Industrial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProposalType::AgriculturalToNonAgricultural => "Agricultural to Non-Agricultural",
            ProposalType::Residential => "Residential",
            ProposalType::Commercial => "Commercial",
            ProposalType::Industrial => "Industrial",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandProposal {
    pub id: String,
    pub proposal_number: String,
    pub village: String,
    pub taluka: String,
    pub district: String,
    pub state: String,
    pub land_source: String,
    pub land_status: LandStatus,
    pub land_stage: String,
    pub source_code: String,
    pub proposal_date: String, // YYYY-MM-DD
    pub proposal_type: ProposalType,
    pub land_cost: f64, // Rupees
    pub stamp_duty: f64,
    pub registration_amount: f64,
}

/// One parcel of land in a proposal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandProposalItem {
    pub id: String,
    pub proposal_id: String,
    pub gat_survey_number: String,
    pub hissa_number: String,
    pub cst_number: String,
    pub final_plot_number: String,
    pub land_zone: LandZone,
    pub owner: String,
    pub co_owner: String,
    pub land_area: f64,
    pub land_uom: AreaUnit,
    pub land_rate: f64, // Rupees per unit of land_uom
    pub land_cost: f64, // land_area * land_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentStatus::Uploaded).unwrap();
        assert_eq!(json, "\"uploaded\"");
        let back: DocumentStatus = serde_json::from_str("\"verified\"").unwrap();
        assert_eq!(back, DocumentStatus::Verified);
    }

    #[test]
    fn test_slot_without_optional_fields_deserializes_as_pending() {
        let slot: DocumentSlot =
            serde_json::from_str(r#"{"id":"doc1","name":"Sale Deed","status":"pending"}"#).unwrap();
        assert_eq!(slot, DocumentSlot::pending("doc1", "Sale Deed"));
        assert!(slot.is_consistent());
    }

    #[test]
    fn test_pending_slot_with_file_is_inconsistent() {
        let mut slot = DocumentSlot::pending("doc1", "Sale Deed");
        slot.attached_file = Some(AttachedFile::new("deed.pdf", 10, None));
        assert!(!slot.is_consistent());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(AttachedFile::new("Deed.PDF", 1, None).extension().as_deref(), Some(".pdf"));
        assert_eq!(AttachedFile::new("scan.final.jpeg", 1, None).extension().as_deref(), Some(".jpeg"));
        assert_eq!(AttachedFile::new("README", 1, None).extension(), None);
        assert_eq!(AttachedFile::new(".pdf", 1, None).extension(), None);
    }

    #[test]
    fn test_option_labels_round_trip() {
        for zone in LandZone::ALL {
            assert_eq!(LandZone::from_label(zone.label()), Some(zone));
        }
        assert_eq!(AreaUnit::from_label("hectare"), Some(AreaUnit::Hectare));
        assert_eq!(LandStatus::from_label("In Process"), Some(LandStatus::InProcess));
        assert_eq!(
            ProposalType::from_label("Agricultural to Non-Agricultural"),
            Some(ProposalType::AgriculturalToNonAgricultural)
        );
        assert_eq!(LandZone::from_label("Forest"), None);
    }
}
