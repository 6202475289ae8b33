// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

use crate::app::App;
use crate::core::{AnalysisClient, ConfigManager};
use crate::error::SubmitError;
use crate::form::QueryForm;
use crate::interactive;
use crate::types::{parse_response, SearchResponse};
use crate::view;

#[derive(Parser, Debug)]
#[command(name = "competitor-analysis")]
#[command(about = "Research competitors through the analysis service and render SWOT reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// YAML config file with `local` and `production` sections
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service, overrides config and environment
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Where JSON logs are written
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit one query and print the analysis
    Analyze {
        #[arg(short, long)]
        query: String,
        /// Competitor name or URL, repeatable
        #[arg(short, long = "competitor")]
        competitors: Vec<String>,
        /// Search query index
        #[arg(long)]
        index: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Edit the query form line by line and submit from a prompt
    Interactive {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Validate and render a saved response body
    Render {
        #[arg(long)]
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check that the analysis service is up
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

pub fn format_response(response: &SearchResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(view::render_text(&view::render(response))),
        OutputFormat::Markdown => Ok(view::render_markdown(&view::render(response))),
        OutputFormat::Json => {
            serde_json::to_string_pretty(response).context("Failed to serialize response")
        }
    }
}

fn client_from(cli: &Cli) -> Result<AnalysisClient> {
    let config = ConfigManager::load(cli.config.as_deref(), cli.service_url.as_deref())?;
    AnalysisClient::new(&config.service.service_url, config.service.timeout())
}

pub async fn handle_command(cli: Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Analyze {
            query,
            competitors,
            index,
            format,
        } => {
            let client = client_from(&cli)?;
            let form = QueryForm::new()
                .with_query(query.clone())
                .with_competitors(competitors.iter().cloned())
                .with_search_index(index.clone().unwrap_or_default());
            let mut app = App::new(form);

            match app.submit(&client).await {
                Ok(()) => {
                    if let Some(response) = app.results() {
                        println!("{}", format_response(response, *format)?);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(SubmitError::EmptyQuery) => {
                    eprintln!("❌ {}", SubmitError::EmptyQuery);
                    Ok(ExitCode::from(2))
                }
                Err(err) => {
                    eprintln!("❌ {}", err.notice());
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Command::Interactive { format } => {
            let client = client_from(&cli)?;
            let mut app = App::default();
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            interactive::run(&mut app, &client, stdin, &mut stdout, *format).await?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Render { file, format } => {
            let body = tokio::fs::read_to_string(file)
                .await
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let report = parse_response(&body)
                .with_context(|| format!("Cannot render {}", file.display()))?;

            for violation in &report.violations {
                eprintln!("⚠️  {}", violation);
            }
            info!("Rendering saved response from {}", file.display());
            println!("{}", format_response(&report.response, *format)?);
            Ok(ExitCode::SUCCESS)
        }

        Command::Health => {
            let client = client_from(&cli)?;
            match client.health().await {
                Ok(health) => {
                    println!("✅ {}: {}", client.base_url(), health.status);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    warn!("Health check failed: {:#}", e);
                    eprintln!("❌ {} is unreachable: {:#}", client.base_url(), e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
