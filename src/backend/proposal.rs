use crate::backend::error::ProposalError;
use crate::backend::model::{
    AreaUnit, LandProposal, LandProposalItem, LandStatus, LandZone, ProposalType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalField {
    ProposalNumber,
    ProposalDate,
    ProposalType,
    Village,
    Taluka,
    District,
    State,
    LandSource,
    LandStatus,
    LandStage,
    SourceCode,
    LandCost,
    StampDuty,
    RegistrationAmount,
}

impl ProposalField {
    pub fn name(&self) -> &'static str {
        match self {
            ProposalField::ProposalNumber => "proposal_number",
            ProposalField::ProposalDate => "proposal_date",
            ProposalField::ProposalType => "proposal_type",
            ProposalField::Village => "village",
            ProposalField::Taluka => "taluka",
            ProposalField::District => "district",
            ProposalField::State => "state",
            ProposalField::LandSource => "land_source",
            ProposalField::LandStatus => "land_status",
            ProposalField::LandStage => "land_stage",
            ProposalField::SourceCode => "source_code",
            ProposalField::LandCost => "land_cost",
            ProposalField::StampDuty => "stamp_duty",
            ProposalField::RegistrationAmount => "registration_amount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    GatSurveyNumber,
    HissaNumber,
    CstNumber,
    FinalPlotNumber,
    LandZone,
    Owner,
    CoOwner,
    LandArea,
    LandUom,
    LandRate,
}

impl ItemField {
    pub fn name(&self) -> &'static str {
        match self {
            ItemField::GatSurveyNumber => "gat_survey_number",
            ItemField::HissaNumber => "hissa_number",
            ItemField::CstNumber => "cst_number",
            ItemField::FinalPlotNumber => "final_plot_number",
            ItemField::LandZone => "land_zone",
            ItemField::Owner => "owner",
            ItemField::CoOwner => "co_owner",
            ItemField::LandArea => "land_area",
            ItemField::LandUom => "land_uom",
            ItemField::LandRate => "land_rate",
        }
    }
}

/// Number inputs: blank means zero.
fn parse_amount(field: &'static str, raw: &str) -> Result<f64, ProposalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ProposalError::InvalidNumber { field, value: raw.to_string() })
}

fn parse_option<T>(field: &'static str, raw: &str, from_label: fn(&str) -> Option<T>) -> Result<T, ProposalError> {
    from_label(raw).ok_or_else(|| ProposalError::UnknownOption { field, value: raw.to_string() })
}

pub fn apply_proposal_field(
    proposal: &LandProposal,
    field: ProposalField,
    raw: &str,
) -> Result<LandProposal, ProposalError> {
    let mut next = proposal.clone();
    let name = field.name();
    match field {
        ProposalField::ProposalNumber => next.proposal_number = raw.to_string(),
        ProposalField::ProposalDate => next.proposal_date = raw.to_string(),
        ProposalField::ProposalType => next.proposal_type = parse_option(name, raw, ProposalType::from_label)?,
        ProposalField::Village => next.village = raw.to_string(),
        ProposalField::Taluka => next.taluka = raw.to_string(),
        ProposalField::District => next.district = raw.to_string(),
        ProposalField::State => next.state = raw.to_string(),
        ProposalField::LandSource => next.land_source = raw.to_string(),
        ProposalField::LandStatus => next.land_status = parse_option(name, raw, LandStatus::from_label)?,
        ProposalField::LandStage => next.land_stage = raw.to_string(),
        ProposalField::SourceCode => next.source_code = raw.to_string(),
        ProposalField::LandCost => next.land_cost = parse_amount(name, raw)?,
        ProposalField::StampDuty => next.stamp_duty = parse_amount(name, raw)?,
        ProposalField::RegistrationAmount => next.registration_amount = parse_amount(name, raw)?,
    }
    Ok(next)
}

pub fn apply_item_field(
    items: &[LandProposalItem],
    index: usize,
    field: ItemField,
    raw: &str,
) -> Result<Vec<LandProposalItem>, ProposalError> {
    let mut next = items.to_vec();
    let item = next.get_mut(index).ok_or(ProposalError::NoSuchItem(index))?;
    let name = field.name();
    match field {
        ItemField::GatSurveyNumber => item.gat_survey_number = raw.to_string(),
        ItemField::HissaNumber => item.hissa_number = raw.to_string(),
        ItemField::CstNumber => item.cst_number = raw.to_string(),
        ItemField::FinalPlotNumber => item.final_plot_number = raw.to_string(),
        ItemField::LandZone => item.land_zone = parse_option(name, raw, LandZone::from_label)?,
        ItemField::Owner => item.owner = raw.to_string(),
        ItemField::CoOwner => item.co_owner = raw.to_string(),
        ItemField::LandArea => item.land_area = parse_amount(name, raw)?,
        ItemField::LandUom => item.land_uom = parse_option(name, raw, AreaUnit::from_label)?,
        ItemField::LandRate => item.land_rate = parse_amount(name, raw)?,
    }
    Ok(next)
}

/// Recomputes the derived `land_cost = land_area * land_rate`.
pub fn recalculate_land_cost(
    items: &[LandProposalItem],
    index: usize,
) -> Result<Vec<LandProposalItem>, ProposalError> {
    let mut next = items.to_vec();
    let item = next.get_mut(index).ok_or(ProposalError::NoSuchItem(index))?;
    item.land_cost = item.land_area * item.land_rate;
    Ok(next)
}

/// Next parcel id: one past the largest `PI<n>` suffix in use, so an id is
/// never handed out twice after a removal.
fn next_item_id(items: &[LandProposalItem]) -> String {
    let max = items
        .iter()
        .filter_map(|i| i.id.strip_prefix("PI").and_then(|n| n.parse::<usize>().ok()))
        .max()
        .unwrap_or(0);
    format!("PI{:03}", max.max(items.len()) + 1)
}

pub fn add_item(items: &[LandProposalItem], proposal_id: &str) -> Vec<LandProposalItem> {
    let proposal_id = items
        .first()
        .map(|i| i.proposal_id.clone())
        .unwrap_or_else(|| proposal_id.to_string());
    let mut next = items.to_vec();
    next.push(LandProposalItem {
        id: next_item_id(items),
        proposal_id,
        gat_survey_number: String::new(),
        hissa_number: String::new(),
        cst_number: String::new(),
        final_plot_number: String::new(),
        land_zone: LandZone::Residential,
        owner: String::new(),
        co_owner: String::new(),
        land_area: 0.0,
        land_uom: AreaUnit::SquareMetre,
        land_rate: 0.0,
        land_cost: 0.0,
    });
    next
}

pub fn remove_item(items: &[LandProposalItem], index: usize) -> Result<Vec<LandProposalItem>, ProposalError> {
    if items.len() <= 1 {
        return Err(ProposalError::RemoveOnLastItem);
    }
    if index >= items.len() {
        return Err(ProposalError::NoSuchItem(index));
    }
    let mut next = items.to_vec();
    next.remove(index);
    Ok(next)
}

pub fn total_land_cost(items: &[LandProposalItem]) -> f64 {
    items.iter().map(|i| i.land_cost).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::catalog::{mock_proposal, mock_proposal_items};

    #[test]
    fn test_text_and_select_fields() {
        let proposal = mock_proposal();
        let next = apply_proposal_field(&proposal, ProposalField::Village, "Maan").unwrap();
        assert_eq!(next.village, "Maan");
        assert_eq!(proposal.village, "Hinjewadi");

        let next = apply_proposal_field(&next, ProposalField::LandStatus, "Approved").unwrap();
        assert_eq!(next.land_status, LandStatus::Approved);

        let err = apply_proposal_field(&next, ProposalField::ProposalType, "Forest").unwrap_err();
        assert_eq!(err, ProposalError::UnknownOption { field: "proposal_type", value: "Forest".into() });
    }

    #[test]
    fn test_number_fields() {
        let proposal = mock_proposal();
        let next = apply_proposal_field(&proposal, ProposalField::StampDuty, "1300000").unwrap();
        assert_eq!(next.stamp_duty, 1_300_000.0);

        let next = apply_proposal_field(&next, ProposalField::StampDuty, "").unwrap();
        assert_eq!(next.stamp_duty, 0.0);

        let err = apply_proposal_field(&next, ProposalField::LandCost, "lots").unwrap_err();
        assert!(matches!(err, ProposalError::InvalidNumber { field: "land_cost", .. }));
    }

    #[test]
    fn test_item_fields_and_cost_derivation() {
        let items = mock_proposal_items();
        let items = apply_item_field(&items, 1, ItemField::LandArea, "6000").unwrap();
        let items = apply_item_field(&items, 1, ItemField::LandRate, "3500").unwrap();
        // Cost only follows after the explicit recalculation.
        assert_eq!(items[1].land_cost, 15_000_000.0);

        let items = recalculate_land_cost(&items, 1).unwrap();
        assert_eq!(items[1].land_cost, 21_000_000.0);
        assert_eq!(items[0].land_cost, 25_000_000.0);

        let items = apply_item_field(&items, 0, ItemField::LandUom, "acre").unwrap();
        assert_eq!(items[0].land_uom, AreaUnit::Acre);
    }

    #[test]
    fn test_item_index_out_of_range() {
        let items = mock_proposal_items();
        assert_eq!(
            apply_item_field(&items, 5, ItemField::Owner, "x").unwrap_err(),
            ProposalError::NoSuchItem(5)
        );
        assert_eq!(recalculate_land_cost(&items, 2).unwrap_err(), ProposalError::NoSuchItem(2));
    }

    #[test]
    fn test_add_item_numbering() {
        let items = add_item(&mock_proposal_items(), "ignored");
        assert_eq!(items.len(), 3);
        let new = &items[2];
        assert_eq!(new.id, "PI003");
        assert_eq!(new.proposal_id, "P001");
        assert_eq!(new.land_zone, LandZone::Residential);
        assert_eq!(new.land_uom, AreaUnit::SquareMetre);
        assert_eq!(new.land_cost, 0.0);

        let first = add_item(&[], "P009");
        assert_eq!(first[0].id, "PI001");
        assert_eq!(first[0].proposal_id, "P009");
    }

    #[test]
    fn test_add_after_remove_keeps_ids_unique() {
        let items = remove_item(&mock_proposal_items(), 0).unwrap();
        let items = add_item(&items, "P001");
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["PI002", "PI003"]);

        let items = add_item(&items, "P001");
        let unique: std::collections::HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(unique.len(), items.len());
        assert_eq!(items[2].id, "PI004");
    }

    #[test]
    fn test_remove_item() {
        let items = mock_proposal_items();
        let remaining = remove_item(&items, 0).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "PI002");

        assert_eq!(remove_item(&remaining, 0).unwrap_err(), ProposalError::RemoveOnLastItem);
        assert_eq!(remove_item(&items, 7).unwrap_err(), ProposalError::NoSuchItem(7));
    }

    #[test]
    fn test_total_land_cost() {
        assert_eq!(total_land_cost(&mock_proposal_items()), 40_000_000.0);
    }
}
