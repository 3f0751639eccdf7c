// Shell rendering - Page chrome and the HTML document
use crate::application::shell::Shell;
use crate::domain::panel_state::PanelState;
use crate::presentation::panel_view::MetricsPanel;
use dioxus::prelude::*;

#[component]
pub fn DashboardShell(title: String, state: PanelState) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-4",
            h1 { class: "text-2xl font-bold mb-4", "{title}" }
            MetricsPanel { state }
        }
    }
}

#[component]
fn DashboardDocument(title: String, state: PanelState) -> Element {
    let loading = !state.is_settled();

    rsx! {
        head {
            meta { charset: "utf-8" }
            if loading {
                meta { "http-equiv": "refresh", content: "1" }
            }
            title { "{title}" }
        }
        body {
            DashboardShell { title: title.clone(), state }
        }
    }
}

/// Full page for the shell's current panel state. Reading the state never
/// starts a fetch. A loading page asks the browser to refresh itself.
pub fn render_document(shell: &Shell) -> String {
    let title = shell.title().to_string();
    let state = shell.panel().state();
    let page = dioxus_ssr::render_element(rsx! { DashboardDocument { title, state } });
    format!("<!DOCTYPE html><html>{}</html>", page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api_transport::{DOMAINS_PATH, FINANCE_PATH, KPIS_PATH};
    use crate::application::testing::ScriptedTransport;
    use std::sync::Arc;

    #[test]
    fn test_shell_title_then_panel() {
        let html = dioxus_ssr::render_element(rsx! {
            DashboardShell { title: "Lucas Dashboard".to_string(), state: PanelState::Loading }
        });

        let title = html.find("Lucas Dashboard").unwrap();
        let panel = html.find("Loading...").unwrap();
        assert!(html.contains(r#"<h1 class="text-2xl font-bold mb-4">"#));
        assert!(title < panel);
    }

    #[tokio::test]
    async fn test_document_refreshes_only_while_loading() {
        let (transport, release) = ScriptedTransport::new()
            .reply(KPIS_PATH, 200, r#"{"domains": 1, "revenue": 2}"#)
            .reply(FINANCE_PATH, 200, r#"{"profit": 3}"#)
            .reply(DOMAINS_PATH, 200, r#"["x.io"]"#)
            .gate(DOMAINS_PATH);
        let transport = Arc::new(transport);
        let shell = Shell::mount("Lucas <Dashboard>".to_string(), transport.clone());

        let loading = render_document(&shell);
        assert!(loading.starts_with("<!DOCTYPE html>"));
        assert!(loading.contains("refresh"));
        assert!(!loading.contains("<Dashboard>"));
        assert!(loading.contains("Loading..."));

        release.send(()).unwrap();
        shell.panel().settled().await;

        let ready = render_document(&shell);
        assert!(!ready.contains("refresh"));
        assert!(ready.contains("KPIs: domains=1, revenue=2.0"));
        assert!(ready.contains("x.io"));

        // Rendering twice more issues no new requests
        render_document(&shell);
        render_document(&shell);
        assert_eq!(transport.calls(), 3);
    }
}
