//! Client for a competitor analysis service: collects a query and competitor
//! list, submits it, and renders the returned SWOT analysis, competitor
//! profiles and search results.

pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod form;
pub mod interactive;
pub mod types;
pub mod utils;
pub mod view;

pub use app::{App, SubmitStatus};
pub use crate::core::{AnalysisClient, AnalysisService, ConfigManager};
pub use error::{FormError, SubmitError};
pub use form::{CompetitorList, QueryForm};
pub use types::{SearchRequest, SearchResponse};
