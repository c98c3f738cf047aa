//! Compiled-in session seed: one proposal, its parcels and the fixed
//! checklist of required documents.

use crate::backend::model::{
    AreaUnit, DocumentCategory, DocumentSlot, LandProposal, LandProposalItem, LandStatus, LandZone,
    ProposalType,
};

const DOCUMENT_CATALOG: &[(&str, &[(&str, &str)])] = &[
    ("Deed Documents", &[
        ("doc1", "Sale Deed"),
        ("doc2", "Conveyance Deed"),
        ("doc3", "Deed of Declaration"),
        ("doc4", "DA & POA"),
        ("doc5", "DM & POA"),
        ("doc6", "JV & POA"),
        ("doc7", "JDA & POA"),
        ("doc8", "POA"),
        ("doc9", "Deed of Transfer"),
        ("doc10", "Deed of Assignment"),
        ("doc11", "Correction Deed"),
        ("doc12", "Agreement to Sale"),
        ("doc13", "T.D.R. Agreement"),
        ("doc14", "Partition Deed"),
        ("doc15", "Release Deed"),
        ("doc16", "MOU"),
        ("doc17", "Visar Pavati"),
        ("doc18", "Lease Deed"),
        ("doc19", "Surrender of Lease Deed"),
        ("doc20", "Gift Deed"),
        ("doc21", "Will"),
    ]),
    ("Legal Documents", &[
        ("doc22", "Title Opinion & Search Report and Title Certificate"),
        ("doc23", "Affidavit"),
        ("doc24", "Declaration"),
        ("doc25", "Affidavit cum Declaration"),
        ("doc26", "Indemnity Bond"),
        ("doc27", "Affidavit cum Indemnity Bond"),
        ("doc28", "Mortgage Deed"),
        ("doc29", "Deed of Legal Entity Formation"),
        ("doc30", "Registration Certificate of Legal Entity"),
    ]),
    ("Land Records", &[
        ("doc31", "7-12 Extract"),
        ("doc32", "PRC"),
        ("doc33", "8A Extract"),
        ("doc34", "Mutation Entries"),
        ("doc35", "Contour Survey & Total Station Survey"),
        ("doc36", "Land Geological Survey"),
    ]),
    ("Planning Documents", &[
        ("doc37", "Demarcation Plan"),
        ("doc38", "Zone Demarcation Plan"),
        ("doc39", "Zone Certificate"),
        ("doc40", "D.P./R.P. Remark Site Plan"),
        ("doc41", "Town Planning Scheme Site Plan"),
        ("doc42", "Development Plan"),
        ("doc43", "Regional Plan"),
        ("doc44", "Sanctioned D.P. Layout Plans"),
        ("doc45", "Sanctioned Building Permission Plans"),
        ("doc46", "Commencement Certificate"),
    ]),
    ("Government Documents", &[
        ("doc47", "N.A. Order"),
        ("doc48", "Nazrana Challan paid"),
        ("doc49", "MCorp/MRDA/SPA/ULB Premium Challan paid"),
        ("doc50", "ULC Documents"),
        ("doc51", "Spl. Permissions from Collector"),
        ("doc52", "Occupation Certificate /Completion Certificate"),
        ("doc53", "Property Tax"),
        ("doc54", "N.A. Tax"),
    ]),
    ("NOC Documents", &[
        ("doc55", "NOC"),
        ("doc56", "NOC – Chief Fire Officer"),
        ("doc57", "NOC – Water Connection"),
        ("doc58", "NOC – Electricity Connection"),
        ("doc59", "NOC – Drainage Connection"),
        ("doc60", "NOC – Garden Connection"),
        ("doc61", "NOC – Grampanchayat"),
        ("doc62", "NOC – Aviation Dept. for Permissible Height Restriction"),
        ("doc63", "NOC – Survey of India"),
        ("doc64", "NOC – Pollution Control Board"),
        ("doc65", "MoEF/EC Certificate"),
    ]),
];

/// Every category with all of its slots pending.
pub fn document_categories() -> Vec<DocumentCategory> {
    DOCUMENT_CATALOG
        .iter()
        .map(|(category, docs)| DocumentCategory {
            name: category.to_string(),
            documents: docs.iter().map(|(id, name)| DocumentSlot::pending(*id, *name)).collect(),
        })
        .collect()
}

pub fn mock_proposal() -> LandProposal {
    LandProposal {
        id: "P001".into(),
        proposal_number: "LP-2023-001".into(),
        village: "Hinjewadi".into(),
        taluka: "Mulshi".into(),
        district: "Pune".into(),
        state: "Maharashtra".into(),
        land_source: "Direct Purchase".into(),
        land_status: LandStatus::InProcess,
        land_stage: "Initial Assessment".into(),
        source_code: "DP-001".into(),
        proposal_date: "2023-06-15".into(),
        proposal_type: ProposalType::AgriculturalToNonAgricultural,
        land_cost: 25_000_000.0,
        stamp_duty: 1_250_000.0,
        registration_amount: 500_000.0,
    }
}

pub fn mock_proposal_items() -> Vec<LandProposalItem> {
    vec![
        LandProposalItem {
            id: "PI001".into(),
            proposal_id: "P001".into(),
            gat_survey_number: "123/A".into(),
            hissa_number: "1".into(),
            cst_number: "CST-456".into(),
            final_plot_number: "FP-789".into(),
            land_zone: LandZone::Residential,
            owner: "John Doe".into(),
            co_owner: "Jane Doe".into(),
            land_area: 10_000.0,
            land_uom: AreaUnit::SquareMetre,
            land_rate: 2_500.0,
            land_cost: 25_000_000.0,
        },
        LandProposalItem {
            id: "PI002".into(),
            proposal_id: "P001".into(),
            gat_survey_number: "124/B".into(),
            hissa_number: "2".into(),
            cst_number: "CST-457".into(),
            final_plot_number: "FP-790".into(),
            land_zone: LandZone::Commercial,
            owner: "Robert Smith".into(),
            co_owner: "Sarah Smith".into(),
            land_area: 5_000.0,
            land_uom: AreaUnit::SquareMetre,
            land_rate: 3_000.0,
            land_cost: 15_000_000.0,
        },
    ]
}
