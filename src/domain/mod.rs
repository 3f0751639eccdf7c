// Domain layer - Value objects owned by the panel
pub mod metrics;
pub mod panel_state;
