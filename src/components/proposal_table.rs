use dioxus::prelude::*;
use crate::backend::format::{format_inr, format_number};
use crate::backend::model::LandProposalItem;
use crate::backend::proposal::total_land_cost;

const COLUMNS: [&str; 10] = [
    "GAT/Survey No.",
    "Hissa No.",
    "CST No.",
    "Final Plot No.",
    "Land Zone",
    "Owner",
    "Co-Owner",
    "Land Area",
    "Land Rate",
    "Land Cost",
];

#[component]
pub fn ProposalTable(items: Vec<LandProposalItem>) -> Element {
    let total = total_land_cost(&items);

    rsx! {
        div { class: "panel",
            div { class: "panel-header",
                h2 { class: "panel-title", "Land Proposal Items" }
            }
            if items.is_empty() {
                div { class: "empty-state py-8",
                    p { class: "empty-state-text", "No land items" }
                }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "data-table",
                        thead {
                            tr {
                                for column in COLUMNS {
                                    th { "{column}" }
                                }
                            }
                        }
                        tbody {
                            for item in items.iter() {
                                tr { key: "{item.id}",
                                    td { "{item.gat_survey_number}" }
                                    td { "{item.hissa_number}" }
                                    td { "{item.cst_number}" }
                                    td { "{item.final_plot_number}" }
                                    td {
                                        span { class: "badge badge-info", "{item.land_zone.label()}" }
                                    }
                                    td { "{item.owner}" }
                                    td { "{item.co_owner}" }
                                    td { "{format_number(item.land_area)} {item.land_uom.label()}" }
                                    td { "{format_number(item.land_rate)}" }
                                    td { "{format_number(item.land_cost)}" }
                                }
                            }
                        }
                        tfoot {
                            tr {
                                td { colspan: "9", class: "text-right font-medium", "Total" }
                                td { class: "font-medium", "{format_inr(total)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
