// Fetch sequence - Concurrent fan-out over the three metrics endpoints
use crate::application::api_transport::{
    ApiResponse, ApiTransport, DOMAINS_PATH, FINANCE_PATH, KPIS_PATH,
};
use crate::domain::metrics::{DomainList, FinanceSummary, MetricsSummary};
use crate::domain::panel_state::PanelState;
use serde::de::DeserializeOwned;
use thiserror::Error;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Why a fetch sequence failed. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    /// The failing endpoint is kept for logs only.
    #[error("API request failed")]
    Status { path: &'static str, status: u16 },
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelData {
    pub metrics: MetricsSummary,
    pub finance: FinanceSummary,
    pub domains: DomainList,
}

impl From<PanelData> for PanelState {
    fn from(data: PanelData) -> Self {
        PanelState::Ready(data.metrics, data.finance, data.domains)
    }
}

/// Run the three requests concurrently and wait for all of them.
///
/// Failures are checked only once every request has settled: transport
/// errors first, then statuses, then bodies.
pub async fn fetch_panel_data(transport: &dyn ApiTransport) -> Result<PanelData, FetchError> {
    let (kpis, finance, domains) = futures::join!(
        transport.get(KPIS_PATH),
        transport.get(FINANCE_PATH),
        transport.get(DOMAINS_PATH),
    );

    let kpis = kpis.map_err(transport_error)?;
    let finance = finance.map_err(transport_error)?;
    let domains = domains.map_err(transport_error)?;

    for (path, response) in [
        (KPIS_PATH, &kpis),
        (FINANCE_PATH, &finance),
        (DOMAINS_PATH, &domains),
    ] {
        if !response.is_success() {
            return Err(FetchError::Status {
                path,
                status: response.status,
            });
        }
    }

    Ok(PanelData {
        metrics: parse(KPIS_PATH, &kpis)?,
        finance: parse(FINANCE_PATH, &finance)?,
        domains: parse(DOMAINS_PATH, &domains)?,
    })
}

/// Run the sequence and fold the outcome into a terminal panel state.
pub async fn run_fetch_sequence(transport: &dyn ApiTransport) -> PanelState {
    match fetch_panel_data(transport).await {
        Ok(data) => {
            tracing::info!(
                "Panel data ready: {} domains listed",
                data.domains.len()
            );
            data.into()
        }
        Err(e) => {
            if let FetchError::Status { path, status } = &e {
                tracing::warn!("Request to {} returned status {}", path, status);
            }
            tracing::warn!("Panel fetch sequence failed: {}", e);
            PanelState::Failed(e.user_message())
        }
    }
}

fn transport_error(err: anyhow::Error) -> FetchError {
    FetchError::Transport(format!("{:#}", err))
}

fn parse<T: DeserializeOwned>(path: &str, response: &ApiResponse) -> Result<T, FetchError> {
    tracing::debug!("Parsing {} byte body from {}", response.body.len(), path);
    Ok(serde_json::from_str(&response.body)?)
}
