use dioxus::prelude::*;
use crate::Route;
use crate::components::toaster::Toaster;

#[component]
pub fn NavComponent() -> Element {
    let app_state = use_context::<crate::components::AppState>();
    let proposal_number = app_state.proposal.read().proposal_number.clone();

    rsx! {
        div { class: "min-h-screen flex flex-col",
            nav { class: "nav-bar",
                div { class: "page-container",
                    // Logo section
                    div { class: "nav-logo",
                        div { class: "logo-icon" }
                        span { class: "logo-text", "Land Management" }
                        span { class: "badge ml-2", "{proposal_number}" }
                    }

                    // Navigation links
                    div { class: "nav-links",
                        Link {
                            to: Route::DashboardComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Dashboard"
                        }
                        Link {
                            to: Route::EditProposalComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Edit Proposal"
                        }
                    }
                }
            }

            div { class: "fixed-header-spacer" }

            div { class: "flex-1",
                Outlet::<Route> {}
            }

            Toaster {}
        }
    }
}
