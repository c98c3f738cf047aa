use dioxus::prelude::*;
use std::collections::HashSet;
use tokio::sync::mpsc::UnboundedSender;
use crate::backend::AppCmd;
use crate::backend::documents::{filter_categories, toggle_expanded, DocumentStats};
use crate::backend::format::format_upload_date;
use crate::backend::model::DocumentCategory;
use crate::components::file_upload::FileUploadCard;

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Grid,
    List,
}

#[component]
pub fn DocumentList() -> Element {
    let app_state = use_context::<crate::components::AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();

    let mut search_term = use_signal(String::new);
    let mut view_mode = use_signal(|| ViewMode::Grid);
    let expanded = use_signal(HashSet::<String>::new);

    let categories = app_state.categories.read();
    let stats = DocumentStats::of(&categories);
    let filtered = filter_categories(&categories, &search_term.read());
    drop(categories);

    let verify_all = move |_| {
        if let Err(e) = cmd_tx.send(AppCmd::VerifyAll { uploaded: stats.uploaded }) {
            tracing::warn!("Failed to send VerifyAll command: {:?}", e);
        }
    };

    let tab_class = |mode: ViewMode| {
        if view_mode() == mode { "tab active" } else { "tab" }
    };

    rsx! {
        div { class: "panel animate-fade-in",
            div { class: "panel-header",
                div {
                    h2 { class: "panel-title", "Document List" }
                    p { class: "text-xs text-[var(--text-muted)]",
                        "{stats.submitted()} of {stats.total()} submitted · {stats.verified} verified"
                    }
                }
                input {
                    class: "input w-64",
                    placeholder: "Search documents...",
                    value: "{search_term}",
                    oninput: move |e| search_term.set(e.value())
                }
            }

            div { class: "flex justify-between items-center mb-4",
                div { class: "tabs",
                    button {
                        class: tab_class(ViewMode::Grid),
                        onclick: move |_| view_mode.set(ViewMode::Grid),
                        "Grid View"
                    }
                    button {
                        class: tab_class(ViewMode::List),
                        onclick: move |_| view_mode.set(ViewMode::List),
                        "List View"
                    }
                }
                button {
                    class: "btn-link text-sm",
                    onclick: verify_all,
                    "Verify all uploaded documents"
                }
            }

            if filtered.is_empty() {
                div { class: "empty-state py-8",
                    p { class: "empty-state-text", "No documents match \"{search_term}\"" }
                }
            }

            div { class: "space-y-4",
                for category in filtered {
                    CategoryPanel {
                        key: "{category.name}",
                        category: category.clone(),
                        list_view: view_mode() == ViewMode::List,
                        expanded,
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryPanel(category: DocumentCategory, list_view: bool, mut expanded: Signal<HashSet<String>>) -> Element {
    let app_state = use_context::<crate::components::AppState>();
    let uploading = app_state.uploading.read().clone();

    let is_open = expanded.read().contains(&category.name);
    let stats = DocumentStats::of_slots(&category.documents);
    let name = category.name.clone();

    rsx! {
        div { class: "category-panel",
            div {
                class: "category-header",
                onclick: move |_| {
                    let next = toggle_expanded(&expanded.read(), &name);
                    expanded.set(next);
                },
                h3 { class: "font-medium", "{category.name}" }
                div { class: "flex items-center gap-3",
                    span { class: "text-xs text-[var(--text-muted)]", "{stats.submitted()}/{stats.total()}" }
                    span { class: "chevron", if is_open { "▴" } else { "▾" } }
                }
            }

            if is_open {
                if list_view {
                    div { class: "divide-y",
                        for doc in category.documents.iter() {
                            div { key: "{doc.id}", class: "flex justify-between items-center p-4",
                                div { class: "flex-1",
                                    p { class: "font-medium", "{doc.name}" }
                                    if let Some(at) = doc.uploaded_at {
                                        p { class: "text-xs text-[var(--text-muted)]",
                                            "Uploaded on: {format_upload_date(&at)}"
                                        }
                                    }
                                }
                                div { class: "w-56",
                                    FileUploadCard {
                                        slot: doc.clone(),
                                        uploading: uploading.contains(&doc.id),
                                        compact: true,
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 p-4",
                        for doc in category.documents.iter() {
                            FileUploadCard {
                                key: "{doc.id}",
                                slot: doc.clone(),
                                uploading: uploading.contains(&doc.id),
                            }
                        }
                    }
                }
            }
        }
    }
}
