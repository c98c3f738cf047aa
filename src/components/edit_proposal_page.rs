use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use crate::Route;
use crate::backend::AppCmd;
use crate::backend::error::ProposalError;
use crate::backend::model::{
    AreaUnit, LandProposal, LandProposalItem, LandStatus, LandZone, ProposalType,
};
use crate::backend::notify::Notice;
use crate::backend::proposal::{
    add_item, apply_item_field, apply_proposal_field, recalculate_land_cost, remove_item, ItemField,
    ProposalField,
};
use crate::components::AppState;

#[component]
fn InputField(
    label: &'static str,
    id: String,
    value: String,
    input_type: Option<&'static str>,
    read_only: Option<bool>,
    oninput: Option<EventHandler<String>>,
    onblur: Option<EventHandler<()>>,
) -> Element {
    let input_type = input_type.unwrap_or("text");
    let read_only = read_only.unwrap_or(false);
    let class = if read_only { "input input-readonly" } else { "input" };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{label}" }
            input {
                class: "{class}",
                id: "{id}",
                r#type: "{input_type}",
                value: "{value}",
                readonly: read_only,
                oninput: move |e| {
                    if let Some(handler) = oninput {
                        handler.call(e.value());
                    }
                },
                onblur: move |_| {
                    if let Some(handler) = onblur {
                        handler.call(());
                    }
                },
            }
        }
    }
}

#[component]
fn SelectField(
    label: &'static str,
    id: String,
    value: &'static str,
    options: Vec<&'static str>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{label}" }
            select {
                class: "input",
                id: "{id}",
                onchange: move |e| onchange.call(e.value()),
                for opt in options {
                    option { value: "{opt}", selected: opt == value, "{opt}" }
                }
            }
        }
    }
}

#[component]
fn ProposalForm(proposal: LandProposal, on_change: EventHandler<(ProposalField, String)>) -> Element {
    let text = move |field: ProposalField| EventHandler::new(move |v: String| on_change.call((field, v)));
    let date_value = proposal.proposal_date.split('T').next().unwrap_or_default().to_string();

    rsx! {
        div { class: "space-y-6",
            div { class: "panel",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Proposal Information" }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    InputField {
                        label: "Proposal Number",
                        id: "proposalNumber",
                        value: proposal.proposal_number.clone(),
                        oninput: text(ProposalField::ProposalNumber),
                    }
                    InputField {
                        label: "Proposal Date",
                        id: "proposalDate",
                        value: date_value,
                        input_type: "date",
                        oninput: text(ProposalField::ProposalDate),
                    }
                    SelectField {
                        label: "Proposal Type",
                        id: "proposalType",
                        value: proposal.proposal_type.label(),
                        options: ProposalType::ALL.iter().map(|t| t.label()).collect::<Vec<_>>(),
                        onchange: text(ProposalField::ProposalType),
                    }
                }
            }

            div { class: "panel",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Location Details" }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                    InputField { label: "Village", id: "village", value: proposal.village.clone(), oninput: text(ProposalField::Village) }
                    InputField { label: "Taluka", id: "taluka", value: proposal.taluka.clone(), oninput: text(ProposalField::Taluka) }
                    InputField { label: "District", id: "district", value: proposal.district.clone(), oninput: text(ProposalField::District) }
                    InputField { label: "State", id: "state", value: proposal.state.clone(), oninput: text(ProposalField::State) }
                }
            }

            div { class: "panel",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Land Information" }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    InputField { label: "Land Source", id: "landSource", value: proposal.land_source.clone(), oninput: text(ProposalField::LandSource) }
                    SelectField {
                        label: "Land Status",
                        id: "landStatus",
                        value: proposal.land_status.label(),
                        options: LandStatus::ALL.iter().map(|s| s.label()).collect::<Vec<_>>(),
                        onchange: text(ProposalField::LandStatus),
                    }
                    InputField { label: "Land Stage", id: "landStage", value: proposal.land_stage.clone(), oninput: text(ProposalField::LandStage) }
                    InputField { label: "Source Code", id: "sourceCode", value: proposal.source_code.clone(), oninput: text(ProposalField::SourceCode) }
                }
            }

            div { class: "panel",
                div { class: "panel-header",
                    h2 { class: "panel-title", "Financial Details" }
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    InputField {
                        label: "Land Cost (₹)",
                        id: "landCost",
                        value: proposal.land_cost.to_string(),
                        input_type: "number",
                        oninput: text(ProposalField::LandCost),
                    }
                    InputField {
                        label: "Stamp Duty (₹)",
                        id: "stampDuty",
                        value: proposal.stamp_duty.to_string(),
                        input_type: "number",
                        oninput: text(ProposalField::StampDuty),
                    }
                    InputField {
                        label: "Registration Amount (₹)",
                        id: "registrationAmount",
                        value: proposal.registration_amount.to_string(),
                        input_type: "number",
                        oninput: text(ProposalField::RegistrationAmount),
                    }
                }
            }
        }
    }
}

#[component]
fn ItemCard(
    index: usize,
    item: LandProposalItem,
    on_change: EventHandler<(usize, ItemField, String)>,
    on_recalculate: EventHandler<usize>,
    on_remove: EventHandler<usize>,
) -> Element {
    let field = move |f: ItemField| EventHandler::new(move |v: String| on_change.call((index, f, v)));
    let recalc = EventHandler::new(move |_: ()| on_recalculate.call(index));
    let number = index + 1;

    rsx! {
        div { class: "panel item-card",
            div { class: "panel-header",
                h2 { class: "panel-title", "Land Item #{number}" }
                button {
                    class: "btn btn-sm btn-danger-outline",
                    title: "Remove land item",
                    onclick: move |_| on_remove.call(index),
                    "🗑"
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                InputField { label: "GAT/Survey Number", id: "gatSurveyNumber-{index}", value: item.gat_survey_number.clone(), oninput: field(ItemField::GatSurveyNumber) }
                InputField { label: "Hissa Number", id: "hissaNumber-{index}", value: item.hissa_number.clone(), oninput: field(ItemField::HissaNumber) }
                InputField { label: "CST Number", id: "cstNumber-{index}", value: item.cst_number.clone(), oninput: field(ItemField::CstNumber) }
                InputField { label: "Final Plot Number", id: "finalPlotNumber-{index}", value: item.final_plot_number.clone(), oninput: field(ItemField::FinalPlotNumber) }
                SelectField {
                    label: "Land Zone",
                    id: "landZone-{index}",
                    value: item.land_zone.label(),
                    options: LandZone::ALL.iter().map(|z| z.label()).collect::<Vec<_>>(),
                    onchange: field(ItemField::LandZone),
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 mt-6",
                InputField { label: "Owner", id: "owner-{index}", value: item.owner.clone(), oninput: field(ItemField::Owner) }
                InputField { label: "Co-Owner", id: "coOwner-{index}", value: item.co_owner.clone(), oninput: field(ItemField::CoOwner) }
            }

            div { class: "grid grid-cols-1 md:grid-cols-3 gap-6 mt-6",
                div { class: "flex gap-2 items-end",
                    div { class: "flex-1",
                        InputField {
                            label: "Land Area",
                            id: "landArea-{index}",
                            value: item.land_area.to_string(),
                            input_type: "number",
                            oninput: field(ItemField::LandArea),
                            onblur: recalc,
                        }
                    }
                    div { class: "w-24",
                        SelectField {
                            label: "UOM",
                            id: "landUOM-{index}",
                            value: item.land_uom.label(),
                            options: AreaUnit::ALL.iter().map(|u| u.label()).collect::<Vec<_>>(),
                            onchange: field(ItemField::LandUom),
                        }
                    }
                }
                InputField {
                    label: "Land Rate (₹)",
                    id: "landRate-{index}",
                    value: item.land_rate.to_string(),
                    input_type: "number",
                    oninput: field(ItemField::LandRate),
                    onblur: recalc,
                }
                InputField {
                    label: "Land Cost (₹)",
                    id: "landCost-{index}",
                    value: item.land_cost.to_string(),
                    input_type: "number",
                    read_only: true,
                }
            }
        }
    }
}

fn report(mut app_state: AppState, e: ProposalError) {
    tracing::warn!("Rejected proposal edit: {}", e);
    app_state.notify(Notice::error(e.to_string()));
}

#[component]
pub fn EditProposalComponent() -> Element {
    let mut app_state = use_context::<AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();
    let navigator = use_navigator();

    // Edits stay in a draft until saved
    let mut draft = use_signal(|| app_state.proposal.peek().clone());
    let mut draft_items = use_signal(|| app_state.items.peek().clone());
    let mut active_tab = use_signal(|| "proposal".to_string());

    let on_proposal_change = move |(field, raw): (ProposalField, String)| {
        let result = apply_proposal_field(&draft.read(), field, &raw);
        match result {
            Ok(next) => draft.set(next),
            Err(e) => report(app_state, e),
        }
    };

    let on_item_change = move |(index, field, raw): (usize, ItemField, String)| {
        let result = apply_item_field(&draft_items.read(), index, field, &raw);
        match result {
            Ok(next) => draft_items.set(next),
            Err(e) => report(app_state, e),
        }
    };

    let on_recalculate = move |index: usize| {
        let result = recalculate_land_cost(&draft_items.read(), index);
        match result {
            Ok(next) => draft_items.set(next),
            Err(e) => report(app_state, e),
        }
    };

    let on_add = move |_| {
        let next = add_item(&draft_items.read(), &draft.read().id);
        draft_items.set(next);
        app_state.notify(Notice::success("New land item added"));
    };

    let on_remove = move |index: usize| {
        let result = remove_item(&draft_items.read(), index);
        match result {
            Ok(next) => {
                draft_items.set(next);
                app_state.notify(Notice::success("Land item removed"));
            }
            Err(e) => report(app_state, e),
        }
    };

    let on_save = move |_| {
        let cmd = AppCmd::SaveProposal { proposal: draft(), items: draft_items() };
        if let Err(e) = cmd_tx.send(cmd) {
            tracing::warn!("Failed to send SaveProposal command: {:?}", e);
            app_state.notify(Notice::error("Could not save the proposal"));
            return;
        }
        navigator.push(Route::DashboardComponent {});
    };

    let tab_class = |tab: &str| if active_tab() == tab { "tab active" } else { "tab" };
    let proposal_number = draft.read().proposal_number.clone();

    rsx! {
        div { class: "page-container py-8 space-y-6 animate-fade-in",
            div { class: "flex justify-between items-center",
                div { class: "flex items-center gap-4",
                    button {
                        class: "btn btn-secondary btn-icon",
                        onclick: move |_| { navigator.push(Route::DashboardComponent {}); },
                        "←"
                    }
                    div {
                        h1 { class: "page-title", "Edit Land Proposal" }
                        p { class: "text-[var(--text-secondary)]",
                            "Update details for proposal {proposal_number}"
                        }
                    }
                }
                button { class: "btn btn-primary", onclick: on_save, "Save Changes" }
            }

            div { class: "tabs",
                button {
                    class: tab_class("proposal"),
                    onclick: move |_| active_tab.set("proposal".to_string()),
                    "Proposal Details"
                }
                button {
                    class: tab_class("items"),
                    onclick: move |_| active_tab.set("items".to_string()),
                    "Land Items"
                }
            }

            if active_tab() == "items" {
                div { class: "space-y-6 animate-slide-in",
                    for (index, item) in draft_items.read().iter().enumerate() {
                        ItemCard {
                            key: "{item.id}",
                            index,
                            item: item.clone(),
                            on_change: on_item_change,
                            on_recalculate: on_recalculate,
                            on_remove: on_remove,
                        }
                    }
                    button { class: "btn btn-secondary w-full", onclick: on_add, "+ Add New Land Item" }
                }
            } else {
                div { class: "animate-slide-in",
                    ProposalForm { proposal: draft(), on_change: on_proposal_change }
                }
            }
        }
    }
}
