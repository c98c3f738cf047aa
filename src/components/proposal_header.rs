use dioxus::prelude::*;
use crate::backend::format::{format_date, format_inr};
use crate::backend::model::{LandProposal, LandStatus};

#[component]
fn Field(label: &'static str, value: String, class: Option<String>) -> Element {
    let extra_class = class.unwrap_or_default();
    rsx! {
        div { class: "space-y-1",
            span { class: "field-label", "{label}" }
            p { class: "field-value {extra_class}", "{value}" }
        }
    }
}

#[component]
pub fn ProposalHeader(proposal: LandProposal) -> Element {
    let status_class = match proposal.land_status {
        LandStatus::Approved => "badge badge-success",
        LandStatus::Rejected => "badge badge-danger",
        LandStatus::InProcess => "badge badge-warning",
    };

    rsx! {
        div { class: "panel glass-card animate-fade-in",
            div { class: "flex justify-between items-start mb-6",
                div {
                    span { class: "title-chip", "Land Proposal" }
                    h1 { class: "text-2xl font-semibold", "{proposal.proposal_number}" }
                }
                div { class: "flex flex-col items-end",
                    span { class: "field-label", "Proposal Date" }
                    span { class: "field-value", "{format_date(&proposal.proposal_date)}" }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                div { class: "space-y-4",
                    Field { label: "Village", value: proposal.village.clone() }
                    Field { label: "Taluka", value: proposal.taluka.clone() }
                    Field { label: "District", value: proposal.district.clone() }
                    Field { label: "State", value: proposal.state.clone() }
                }

                div { class: "space-y-4",
                    Field { label: "Land Source", value: proposal.land_source.clone() }
                    div { class: "space-y-1",
                        span { class: "field-label", "Land Status" }
                        p { class: "field-value",
                            span { class: "{status_class}", "{proposal.land_status.label()}" }
                        }
                    }
                    Field { label: "Land Stage", value: proposal.land_stage.clone() }
                    Field { label: "Source Code", value: proposal.source_code.clone() }
                }

                div { class: "space-y-4",
                    Field { label: "Proposal Type", value: proposal.proposal_type.label().to_string() }
                    Field { label: "Land Cost", value: format_inr(proposal.land_cost), class: "font-medium" }
                    Field { label: "Stamp Duty", value: format_inr(proposal.stamp_duty) }
                    Field { label: "Registration Amount", value: format_inr(proposal.registration_amount) }
                }
            }
        }
    }
}
