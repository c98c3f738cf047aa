use dioxus::prelude::*;
use crate::Route;
use crate::components::document_list::DocumentList;
use crate::components::proposal_header::ProposalHeader;
use crate::components::proposal_table::ProposalTable;

#[component]
pub fn DashboardComponent() -> Element {
    let app_state = use_context::<crate::components::AppState>();
    let mut active_tab = use_signal(|| "details".to_string());

    let proposal = app_state.proposal.read().clone();
    let items = app_state.items.read().clone();
    let tab_class = |tab: &str| if active_tab() == tab { "tab active" } else { "tab" };

    rsx! {
        div { class: "page-container py-8 space-y-10 animate-fade-in",

            // Header
            div { class: "page-header",
                div { class: "flex justify-between items-center",
                    div {
                        h1 { class: "page-title", "Land Management System" }
                        p { class: "text-[var(--text-secondary)] mt-1",
                            "Manage land proposals, track documents, and monitor land acquisition progress."
                        }
                    }
                    Link {
                        to: Route::EditProposalComponent {},
                        class: "btn btn-primary",
                        "Edit Proposal"
                    }
                }
            }

            ProposalHeader { proposal }

            div { class: "tabs mb-6",
                button {
                    class: tab_class("details"),
                    onclick: move |_| active_tab.set("details".to_string()),
                    "Land Details"
                }
                button {
                    class: tab_class("documents"),
                    onclick: move |_| active_tab.set("documents".to_string()),
                    "Documents"
                }
            }

            if active_tab() == "documents" {
                DocumentList {}
            } else {
                ProposalTable { items }
            }
        }
    }
}
