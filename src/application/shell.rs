// Shell - Page chrome around exactly one panel
use crate::application::api_transport::ApiTransport;
use crate::application::panel::Panel;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct Shell {
    title: String,
    panel: Panel,
}

impl Shell {
    pub fn mount(title: String, transport: Arc<dyn ApiTransport>) -> Self {
        let panel = Panel::mount(transport);
        Self { title, panel }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn unmount(self) -> JoinHandle<()> {
        self.panel.unmount()
    }
}
