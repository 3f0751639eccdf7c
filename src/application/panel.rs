// Panel - One mount cycle of the metrics panel
use crate::application::api_transport::ApiTransport;
use crate::application::fetch::run_fetch_sequence;
use crate::domain::panel_state::PanelState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

struct PanelInner {
    state: watch::Sender<PanelState>,
}

/// A mounted panel. Mounting starts the fetch sequence; nothing else does.
///
/// The sequence task only holds a weak reference to the state, so once the
/// panel is unmounted its late result is dropped instead of written.
pub struct Panel {
    inner: Arc<PanelInner>,
    sequence: JoinHandle<()>,
}

impl Panel {
    pub fn mount(transport: Arc<dyn ApiTransport>) -> Self {
        let (state, _) = watch::channel(PanelState::Loading);
        let inner = Arc::new(PanelInner { state });
        let weak = Arc::downgrade(&inner);

        tracing::info!("Panel mounted, starting fetch sequence");
        let sequence = tokio::spawn(async move {
            let next = run_fetch_sequence(transport.as_ref()).await;
            match weak.upgrade() {
                Some(inner) => {
                    inner.state.send_replace(next);
                }
                None => {
                    tracing::debug!("Panel unmounted before fetch settled, discarding {:?}", next);
                }
            }
        });

        Self { inner, sequence }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PanelState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PanelState> {
        self.inner.state.subscribe()
    }

    /// Wait until the fetch sequence has produced a terminal state.
    pub async fn settled(&self) -> PanelState {
        let mut rx = self.subscribe();
        let settled = rx
            .wait_for(PanelState::is_settled)
            .await
            .map(|state| state.clone());
        settled.unwrap_or_else(|_| self.state())
    }

    /// Drop the panel's state. Returns the handle of the fetch sequence,
    /// which keeps running to completion if it has not settled yet.
    pub fn unmount(self) -> JoinHandle<()> {
        tracing::debug!("Panel unmounted");
        self.sequence
    }
}
