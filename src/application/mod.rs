// Application layer - Panel lifecycle and the fetch sequence
pub mod api_transport;
pub mod fetch;
pub mod panel;
pub mod shell;

#[cfg(test)]
pub mod testing;
