use std::sync::Mutex;

use async_trait::async_trait;
use competitor_analyzer::cli::OutputFormat;
use competitor_analyzer::core::AnalysisService;
use competitor_analyzer::interactive;
use competitor_analyzer::types::{ContractReport, SearchRequest, SearchResponse, SwotAnalysis};
use competitor_analyzer::{App, SubmitError};

/// Succeeds once, then fails every time
struct FlakyService {
    calls: Mutex<Vec<SearchRequest>>,
}

impl FlakyService {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AnalysisService for FlakyService {
    async fn search(&self, request: &SearchRequest) -> Result<ContractReport, SubmitError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(request.clone());
        if calls.len() > 1 {
            return Err(SubmitError::Transport("connection reset".into()));
        }
        Ok(ContractReport {
            response: SearchResponse {
                query: request.query.clone(),
                swot_analysis: SwotAnalysis {
                    strengths: vec!["Strong brand".into()],
                    ..Default::default()
                },
                ..Default::default()
            },
            violations: vec![],
        })
    }
}

async fn run_session(script: &str, service: &FlakyService) -> (App, String) {
    let mut app = App::default();
    let mut out = Vec::new();
    interactive::run(
        &mut app,
        service,
        script.as_bytes(),
        &mut out,
        OutputFormat::Text,
    )
    .await
    .expect("session runs");
    (app, String::from_utf8(out).expect("utf8 output"))
}

#[tokio::test]
async fn edit_form_and_submit() {
    let service = FlakyService::new();
    let script = "\
query project tools
set 1 asana.com
add
add
set 3 Acme
remove 2
submit
quit
";
    let (app, out) = run_session(script, &service).await;

    let calls = service.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query, "project tools");
    assert_eq!(calls[0].competitors, ["asana.com", "Acme"]);
    assert_eq!(calls[0].num_results, 10);

    assert_eq!(app.form().competitors.rows(), ["asana.com", "Acme"]);
    assert!(out.contains("[Analyzing...]"));
    assert!(out.contains("== SWOT Analysis =="));
    assert!(out.contains("  - Strong brand"));
}

#[tokio::test]
async fn anchor_row_and_blank_query_are_refused() {
    let service = FlakyService::new();
    let script = "\
remove 1
submit
";
    let (app, out) = run_session(script, &service).await;

    assert!(out.contains("the first competitor row cannot be removed"));
    assert!(out.contains("Please enter a search query first."));
    assert!(service.calls.lock().unwrap().is_empty());
    assert_eq!(app.form().competitors.rows(), [""]);
}

#[tokio::test]
async fn failure_shows_notice_and_keeps_results() {
    let service = FlakyService::new();
    let script = "\
query crm
submit
query crm v2
submit
results
";
    let (app, out) = run_session(script, &service).await;

    assert!(out.contains("⚠️  An error occurred. Please try again."));
    assert_eq!(app.results().unwrap().query, "crm");
    assert_eq!(app.notice(), Some("An error occurred. Please try again."));
    assert!(app.trigger_enabled());
}
