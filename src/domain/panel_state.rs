// Panel state machine
use super::metrics::{DomainList, FinanceSummary, MetricsSummary};

/// State of one mounted panel. `Failed` and `Ready` are terminal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    #[default]
    Loading,
    Failed(String),
    Ready(MetricsSummary, FinanceSummary, DomainList),
}

impl PanelState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, PanelState::Loading)
    }
}
