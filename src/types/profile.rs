// src/types/profile.rs
//! Extended competitor profile produced by the deep research pipeline.
//!
//! Every field is optional. Lists default to empty, and scalars that the
//! service sends either as numbers or text are kept as raw JSON values.
//! Mapping fields keep the key order they arrived in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub founded_year: Option<Value>,
    pub location: Option<String>,
    pub founders: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketPosition {
    #[serde(deserialize_with = "null_as_default")]
    pub target_audience: Vec<String>,
    pub brand_reputation: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub value_propositions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductService {
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    /// plan name -> price
    #[serde(deserialize_with = "null_as_default")]
    pub pricing: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub differentiators: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnlinePresence {
    pub website_traffic: Option<Value>,
    pub domain_authority: Option<Value>,
    /// platform -> metric
    #[serde(deserialize_with = "null_as_default")]
    pub social_media: Map<String, Value>,
    pub content_strategy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerSentiment {
    #[serde(deserialize_with = "null_as_default")]
    pub positive_feedback: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub negative_feedback: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub common_pain_points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessGrowth {
    pub funding_rounds: Option<Vec<Map<String, Value>>>,
    pub revenue_estimates: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub partnerships: Vec<String>,
    pub market_growth: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStack {
    #[serde(deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
    pub ai_ml_usage: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub frameworks: Vec<String>,
    pub platform_details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingStrategy {
    #[serde(deserialize_with = "null_as_default")]
    pub campaigns: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub channels: Vec<String>,
    pub positioning: Option<String>,
    pub engagement_metrics: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pricing_keeps_arrival_order() {
        let product: ProductService = serde_json::from_value(json!({
            "features": ["Boards"],
            "pricing": {"Pro": "$20", "Basic": "$5", "Enterprise": "Contact sales"}
        }))
        .unwrap();

        let plans: Vec<_> = product.pricing.keys().map(String::as_str).collect();
        assert_eq!(plans, ["Pro", "Basic", "Enterprise"]);
        assert!(product.differentiators.is_empty());
    }

    #[test]
    fn test_numeric_or_text_scalars() {
        let info: CompanyInfo =
            serde_json::from_value(json!({"name": "Acme", "founded_year": 2011})).unwrap();
        assert_eq!(info.founded_year, Some(json!(2011)));

        let info: CompanyInfo =
            serde_json::from_value(json!({"founded_year": "circa 2011"})).unwrap();
        assert_eq!(info.founded_year, Some(json!("circa 2011")));
        assert!(info.founders.is_none());
    }

    #[test]
    fn test_null_mapping_defaults_to_empty() {
        let presence: OnlinePresence =
            serde_json::from_value(json!({"social_media": null, "domain_authority": 54}))
                .unwrap();
        assert!(presence.social_media.is_empty());
        assert_eq!(presence.domain_authority, Some(json!(54)));
    }
}
