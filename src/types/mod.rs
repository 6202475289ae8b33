// src/types/mod.rs
//! Data contract exchanged with the analysis service

pub mod contract;
pub mod profile;
pub mod request;
pub mod response;

pub use contract::{parse_response, ContractReport, ContractViolation};
pub use profile::{
    BusinessGrowth, CompanyInfo, CustomerSentiment, MarketPosition, MarketingStrategy,
    OnlinePresence, ProductService, TechStack,
};
pub use request::{SearchRequest, DEFAULT_NUM_RESULTS};
pub use response::{
    CompetitorAnalysis, ComparisonResult, DataSourceInfo, SearchResponse, SearchResult,
    SwotAnalysis,
};

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like an absent field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional timestamps on the wire, see `utils::parse_timestamp` for accepted forms
pub(crate) mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(ts: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match ts {
            Some(t) => serializer.serialize_str(&t.format(WIRE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => crate::utils::parse_timestamp(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw))),
        }
    }
}
