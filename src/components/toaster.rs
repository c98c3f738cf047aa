use dioxus::prelude::*;
use crate::backend::config::AppConfig;
use crate::backend::notify::{Notice, NoticeLevel};

#[component]
pub fn Toaster() -> Element {
    let app_state = use_context::<crate::components::AppState>();
    let notices = app_state.notices.read().clone();

    rsx! {
        div { class: "toaster",
            for notice in notices {
                ToastItem { key: "{notice.id}", notice: notice.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(notice: Notice) -> Element {
    let mut app_state = use_context::<crate::components::AppState>();
    let config = use_context::<AppConfig>();
    let id = notice.id;

    // Dismiss after the configured time
    use_future(move || {
        let ttl = config.toast_duration();
        let mut notices = app_state.notices;
        async move {
            crate::backend::sleep(ttl).await;
            notices.write().retain(|n| n.id != id);
        }
    });

    let (level_class, icon) = match notice.level {
        NoticeLevel::Success => ("toast-success", "✓"),
        NoticeLevel::Info => ("toast-info", "ℹ"),
        NoticeLevel::Error => ("toast-error", "!"),
    };

    rsx! {
        div { class: "toast {level_class} animate-fade-in",
            span { class: "toast-icon", "{icon}" }
            span { class: "flex-1", "{notice.message}" }
            button {
                class: "toast-close",
                onclick: move |_| app_state.notices.write().retain(|n| n.id != id),
                "✕"
            }
        }
    }
}
