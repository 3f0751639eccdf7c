// Metrics domain models
use serde::{Deserialize, Deserializer, de};

/// Summary KPIs served by `/api/kpis`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsSummary {
    #[serde(rename = "domains")]
    pub domain_count: u64,
    pub revenue: f64,
}

#[cfg(test)]
impl MetricsSummary {
    pub fn new(domain_count: u64, revenue: f64) -> Self {
        Self {
            domain_count,
            revenue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FinanceSummary {
    pub profit: f64,
}

#[cfg(test)]
impl FinanceSummary {
    pub fn new(profit: f64) -> Self {
        Self { profit }
    }
}

/// Managed domain names in server order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainList(Vec<String>);

impl DomainList {
    #[cfg(test)]
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for DomainList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        if let Some(index) = names.iter().position(|n| n.is_empty()) {
            return Err(de::Error::custom(format!(
                "empty domain name at index {}",
                index
            )));
        }
        Ok(Self(names))
    }
}
