// In-memory transport with scripted replies
use crate::application::api_transport::{ApiResponse, ApiTransport};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

struct Scripted {
    reply: Result<ApiResponse, String>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Each path answers once. A gated path holds its reply until released.
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, Scripted>>,
    calls: AtomicUsize,
    finished: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
        }
    }

    pub fn reply(self, path: &str, status: u16, body: &str) -> Self {
        self.script(path, Ok(ApiResponse::new(status, body)))
    }

    pub fn reject(self, path: &str, message: &str) -> Self {
        self.script(path, Err(message.to_string()))
    }

    /// Hold back the reply already scripted for `path`.
    pub fn gate(self, path: &str) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        if let Some(scripted) = self.routes.lock().unwrap().get_mut(path) {
            scripted.gate = Some(rx);
        }
        (self, tx)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    fn script(self, path: &str, reply: Result<ApiResponse, String>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), Scripted { reply, gate: None });
        self
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn get(&self, path: &str) -> anyhow::Result<ApiResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.routes.lock().unwrap().remove(path);
        let Some(scripted) = scripted else {
            anyhow::bail!("no scripted reply for {}", path);
        };

        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        self.finished.fetch_add(1, Ordering::SeqCst);
        scripted.reply.map_err(|message| anyhow::anyhow!(message))
    }
}

/// Yield to the scheduler until `done` holds or the attempts run out.
pub async fn settle_until(mut done: impl FnMut() -> bool) {
    for _ in 0..100 {
        if done() {
            return;
        }
        tokio::task::yield_now().await;
    }
}
