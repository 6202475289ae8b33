// src/view/mod.rs
//! Results view: a pure mapping from a `SearchResponse` to a `Document`

pub mod document;
pub mod markdown;
pub mod text;

pub use document::{Block, Document, Section, SectionKind, Subsection};
pub use markdown::render_markdown;
pub use text::render_text;

use serde_json::{Map, Value};

use crate::types::{
    CompetitorAnalysis, ComparisonResult, DataSourceInfo, SearchResponse, SearchResult,
    SwotAnalysis,
};
use crate::utils::{
    display_opt_scalar, display_scalar, format_timestamp, join_or_na, opt_or_na, or_na,
};

pub const PROFILE_SUBSECTIONS: [&str; 8] = [
    "Overview",
    "Market Positioning",
    "Product & Service",
    "Online Presence",
    "Customer Sentiment",
    "Business Growth",
    "Technology Stack",
    "Marketing Strategy",
];

pub fn render(response: &SearchResponse) -> Document {
    let mut sections = vec![swot_section(&response.swot_analysis)];

    if let Some(comparison) = &response.comparison {
        sections.push(comparison_section(comparison));
        sections.extend(comparison.competitors.iter().map(profile_section));
    }

    sections.push(search_results_section(&response.results));
    sections.push(freshness_section(&response.data_source_info));

    Document { sections }
}

fn swot_section(swot: &SwotAnalysis) -> Section {
    let subsections = swot
        .categories()
        .iter()
        .map(|(name, items)| {
            Subsection::titled(
                name,
                vec![Block::List {
                    label: None,
                    items: items.to_vec(),
                }],
            )
        })
        .collect();

    Section {
        kind: SectionKind::Swot,
        title: "SWOT Analysis".to_string(),
        subsections,
    }
}

fn comparison_section(comparison: &ComparisonResult) -> Section {
    let mut subsections = Vec::new();

    if let Some(main) = &comparison.main_product {
        subsections.push(Subsection::titled(
            "Main Product",
            vec![
                Block::field("Name", main.display_name()),
                Block::field("Website", or_na(&main.website)),
                Block::field("Target Market", or_na(&main.target_market)),
                Block::field("Pricing Model", or_na(&main.pricing_model)),
                Block::list("Key Features", main.key_features.clone()),
                Block::list("Unique Selling Points", main.unique_selling_points.clone()),
            ],
        ));
    }

    let names: Vec<String> = comparison
        .competitors
        .iter()
        .map(|c| c.display_name().to_string())
        .collect();
    subsections.push(Subsection::untitled(vec![Block::field(
        "Competitors Analyzed",
        join_or_na(&names, ", "),
    )]));

    subsections.push(Subsection::titled(
        "Competitive Advantages",
        vec![Block::List {
            label: None,
            items: comparison.competitive_advantages.clone(),
        }],
    ));
    subsections.push(Subsection::titled(
        "Competitive Disadvantages",
        vec![Block::List {
            label: None,
            items: comparison.competitive_disadvantages.clone(),
        }],
    ));

    Section {
        kind: SectionKind::Comparison,
        title: "Competitor Comparison".to_string(),
        subsections,
    }
}

fn profile_section(competitor: &CompetitorAnalysis) -> Section {
    let subsections = if competitor.has_extended_profile() {
        detailed_profile(competitor)
    } else {
        basic_profile(competitor)
    };

    Section {
        kind: SectionKind::CompetitorProfile,
        title: format!("{} - Competitor Analysis", competitor.display_name()),
        subsections,
    }
}

fn basic_profile(c: &CompetitorAnalysis) -> Vec<Subsection> {
    vec![Subsection::titled(
        "Overview",
        vec![
            Block::field("Website", or_na(&c.website)),
            Block::field("Target Market", or_na(&c.target_market)),
            Block::field("Pricing Model", or_na(&c.pricing_model)),
            Block::list("Key Features", c.key_features.clone()),
            Block::list("Unique Selling Points", c.unique_selling_points.clone()),
            Block::field("Source", or_na(&c.data_source)),
            Block::field("Last Updated", format_timestamp(c.last_updated.as_ref())),
        ],
    )]
}

fn detailed_profile(c: &CompetitorAnalysis) -> Vec<Subsection> {
    let info = c.company_info.clone().unwrap_or_default();
    let market = c.market_position.clone().unwrap_or_default();
    let product = c.product_service.clone().unwrap_or_default();
    let online = c.online_presence.clone().unwrap_or_default();
    let sentiment = c.customer_sentiment.clone().unwrap_or_default();
    let growth = c.business_growth.clone().unwrap_or_default();
    let tech = c.tech_stack.clone().unwrap_or_default();
    let marketing = c.marketing_strategy.clone().unwrap_or_default();

    let mut overview = vec![
        Block::field("Industry", opt_or_na(info.industry.as_deref())),
        Block::field("Founded", display_opt_scalar(info.founded_year.as_ref())),
        Block::field("Location", opt_or_na(info.location.as_deref())),
    ];
    if let Some(founders) = &info.founders {
        overview.push(Block::field("Founders", join_or_na(founders, ", ")));
    }
    overview.push(Block::field("Website", or_na(&c.website)));

    // Flat fields stand in when the research pipeline left these empty
    let features = fallback(&product.features, &c.key_features);
    let differentiators = fallback(&product.differentiators, &c.unique_selling_points);

    let mut product_blocks = vec![
        Block::list("Key Features", features),
        Block::list("Pricing", entries(&product.pricing)),
        Block::list("Differentiators", differentiators),
    ];
    if product.pricing.is_empty() && !c.pricing_model.trim().is_empty() {
        product_blocks.insert(2, Block::field("Pricing Model", c.pricing_model.clone()));
    }

    let mut growth_blocks = Vec::new();
    if let Some(rounds) = &growth.funding_rounds {
        growth_blocks.push(Block::list(
            "Funding Rounds",
            rounds.iter().map(|round| entries(round).join(", ")).collect(),
        ));
    }
    growth_blocks.extend([
        Block::field(
            "Revenue Estimates",
            display_opt_scalar(growth.revenue_estimates.as_ref()),
        ),
        Block::list("Partnerships", growth.partnerships.clone()),
        Block::field("Market Growth", opt_or_na(growth.market_growth.as_deref())),
    ]);

    let mut tech_blocks = vec![Block::list("Tools", tech.tools.clone())];
    if let Some(usage) = &tech.ai_ml_usage {
        tech_blocks.push(Block::field("AI/ML Usage", or_na(usage)));
    }
    tech_blocks.extend([
        Block::list("Frameworks", tech.frameworks.clone()),
        Block::field(
            "Platform Details",
            opt_or_na(tech.platform_details.as_deref()),
        ),
    ]);

    let mut marketing_blocks = vec![
        Block::list("Campaigns", marketing.campaigns.clone()),
        Block::list("Marketing Channels", marketing.channels.clone()),
        Block::field(
            "Brand Positioning",
            opt_or_na(marketing.positioning.as_deref()),
        ),
    ];
    if let Some(metrics) = &marketing.engagement_metrics {
        marketing_blocks.push(Block::list("Engagement Metrics", entries(metrics)));
    }

    let bodies = [
        overview,
        vec![
            Block::field(
                "Target Audience",
                join_or_na(&market.target_audience, ", "),
            ),
            Block::field(
                "Brand Reputation",
                opt_or_na(market.brand_reputation.as_deref()),
            ),
            Block::list("Value Propositions", market.value_propositions.clone()),
        ],
        product_blocks,
        vec![
            Block::field(
                "Website Traffic",
                display_opt_scalar(online.website_traffic.as_ref()),
            ),
            Block::field(
                "Domain Authority",
                display_opt_scalar(online.domain_authority.as_ref()),
            ),
            Block::list("Social Media Presence", entries(&online.social_media)),
            Block::field(
                "Content Strategy",
                opt_or_na(online.content_strategy.as_deref()),
            ),
        ],
        vec![
            Block::list("Positive Feedback", sentiment.positive_feedback.clone()),
            Block::list("Negative Feedback", sentiment.negative_feedback.clone()),
            Block::list("Common Pain Points", sentiment.common_pain_points.clone()),
        ],
        growth_blocks,
        tech_blocks,
        marketing_blocks,
    ];

    PROFILE_SUBSECTIONS
        .iter()
        .zip(bodies)
        .map(|(title, blocks)| Subsection::titled(title, blocks))
        .collect()
}

fn search_results_section(results: &[SearchResult]) -> Section {
    let subsections = results
        .iter()
        .map(|result| {
            let link_text = if result.title.trim().is_empty() {
                or_na(&result.url)
            } else {
                result.title.clone()
            };
            Subsection::untitled(vec![
                Block::Link {
                    text: link_text,
                    url: result.url.clone(),
                },
                Block::Text(result.snippet.clone()),
                Block::Text(result.analysis.clone()),
                Block::Text(format!(
                    "Source: {} | Last Updated: {}",
                    or_na(&result.data_source),
                    format_timestamp(result.last_updated.as_ref())
                )),
            ])
        })
        .collect();

    Section {
        kind: SectionKind::SearchResults,
        title: "Search Results".to_string(),
        subsections,
    }
}

fn freshness_section(info: &DataSourceInfo) -> Section {
    let from_cache = if info.search_results_from_cache {
        "Yes"
    } else {
        "No"
    };

    Section {
        kind: SectionKind::DataFreshness,
        title: "Data Freshness".to_string(),
        subsections: vec![Subsection::untitled(vec![
            Block::field("Search Results From Cache", from_cache),
            Block::field(
                "Competitors From Cache",
                join_or_na(&info.competitors_from_cache, ", "),
            ),
            Block::field(
                "Fresh Competitors",
                join_or_na(&info.fresh_competitors, ", "),
            ),
            Block::field(
                "Last Cache Update",
                format_timestamp(info.last_cache_update.as_ref()),
            ),
        ])],
    }
}

/// `key: value` lines in arrival order
fn entries(map: &Map<String, Value>) -> Vec<String> {
    map.iter()
        .map(|(key, value)| format!("{}: {}", key, display_scalar(value)))
        .collect()
}

fn fallback(primary: &[String], secondary: &[String]) -> Vec<String> {
    if primary.is_empty() {
        secondary.to_vec()
    } else {
        primary.to_vec()
    }
}
