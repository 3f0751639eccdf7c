// Transport trait for backend access
use async_trait::async_trait;

pub const KPIS_PATH: &str = "/api/kpis";
pub const FINANCE_PATH: &str = "/api/finance";
pub const DOMAINS_PATH: &str = "/api/domains";

/// A completed response; the status has not been checked yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Issue a GET for `path` on the backend.
    /// An `Err` means the request never produced a response.
    async fn get(&self, path: &str) -> anyhow::Result<ApiResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(199, "").is_success());
        assert!(!ApiResponse::new(304, "").is_success());
        assert!(!ApiResponse::new(500, "").is_success());
    }
}
