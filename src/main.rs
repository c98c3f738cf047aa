mod backend;
mod components;

use components::dashboard_page::DashboardComponent;
use components::edit_proposal_page::EditProposalComponent;
use components::nav_bar::NavComponent;
use components::AppState;

use backend::config::AppConfig;
use backend::{AppCmd, AppEvent};
use dioxus::prelude::*;
use tokio::sync::mpsc;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[route("/")]
    DashboardComponent {},
    #[route("/edit-proposal")]
    EditProposalComponent {},
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tracing_subscriber::fmt().try_init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default config: {}", e);
            AppConfig::default()
        }
    });
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    use_context_provider(move || {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<AppCmd>();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<AppEvent>();
        spawn(backend::init(config.clone(), cmd_rx, event_tx));
        spawn(components::handle_events(app_state, event_rx));
        cmd_tx
    });

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}
