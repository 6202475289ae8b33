// src/types/response.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::profile::{
    BusinessGrowth, CompanyInfo, CustomerSentiment, MarketPosition, MarketingStrategy,
    OnlinePresence, ProductService, TechStack,
};

// ===== Analysis Service Response Types =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub snippet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub analysis: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data_source: String, // "new" or "cached"
    #[serde(with = "super::timestamp")]
    pub last_updated: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwotAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub opportunities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub threats: Vec<String>,
}

impl SwotAnalysis {
    /// The four categories in their fixed display order
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Strengths", self.strengths.as_slice()),
            ("Weaknesses", self.weaknesses.as_slice()),
            ("Opportunities", self.opportunities.as_slice()),
            ("Threats", self.threats.as_slice()),
        ]
    }
}

/// One competitor as returned by the service. The flat fields are always
/// sent; the profile sub-objects only by the richer research pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key_features: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub target_market: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pricing_model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unique_selling_points: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub data_source: String,
    #[serde(with = "super::timestamp")]
    pub last_updated: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_position: Option<MarketPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_service: Option<ProductService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_presence: Option<OnlinePresence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_sentiment: Option<CustomerSentiment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_growth: Option<BusinessGrowth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<TechStack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_strategy: Option<MarketingStrategy>,
}

impl CompetitorAnalysis {
    pub fn has_extended_profile(&self) -> bool {
        self.company_info.is_some()
            || self.market_position.is_some()
            || self.product_service.is_some()
            || self.online_presence.is_some()
            || self.customer_sentiment.is_some()
            || self.business_growth.is_some()
            || self.tech_stack.is_some()
            || self.marketing_strategy.is_some()
    }

    /// Profile name if the service researched one, else the flat name, else the website
    pub fn display_name(&self) -> &str {
        let profile_name = self
            .company_info
            .as_ref()
            .and_then(|info| info.name.as_deref())
            .filter(|name| !name.trim().is_empty());

        match profile_name {
            Some(name) => name,
            None if !self.name.trim().is_empty() => self.name.as_str(),
            None => self.website.as_str(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonResult {
    pub main_product: Option<CompetitorAnalysis>,
    #[serde(deserialize_with = "null_as_default")]
    pub competitors: Vec<CompetitorAnalysis>,
    #[serde(deserialize_with = "null_as_default")]
    pub competitive_advantages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub competitive_disadvantages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub search_results_from_cache: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub competitors_from_cache: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub fresh_competitors: Vec<String>,
    #[serde(with = "super::timestamp")]
    pub last_cache_update: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub swot_analysis: SwotAnalysis,
    pub comparison: Option<ComparisonResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub data_source_info: DataSourceInfo,
}
