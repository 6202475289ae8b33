// src/app.rs
//! Composition root: owns the draft form, the submission status and the one
//! stored analysis response.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::core::AnalysisService;
use crate::error::SubmitError;
use crate::form::QueryForm;
use crate::types::{ContractReport, SearchRequest, SearchResponse};

pub const TRIGGER_LABEL: &str = "Analyze";
pub const BUSY_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Pending { id: Uuid },
    Failed { notice: String },
}

/// Ticket for the one request in flight
#[derive(Debug)]
pub struct PendingSubmission {
    id: Uuid,
    request: SearchRequest,
}

impl PendingSubmission {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }
}

#[derive(Debug)]
pub struct App {
    form: QueryForm,
    results: Option<SearchResponse>,
    status: SubmitStatus,
}

impl Default for App {
    fn default() -> Self {
        Self::new(QueryForm::new())
    }
}

impl App {
    pub fn new(form: QueryForm) -> Self {
        Self {
            form,
            results: None,
            status: SubmitStatus::Idle,
        }
    }

    pub fn form(&self) -> &QueryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QueryForm {
        &mut self.form
    }

    pub fn results(&self) -> Option<&SearchResponse> {
        self.results.as_ref()
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.status, SubmitStatus::Pending { .. })
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.is_busy() {
            BUSY_LABEL
        } else {
            TRIGGER_LABEL
        }
    }

    /// The error notice of the last failed submission, if any
    pub fn notice(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed { notice } => Some(notice.as_str()),
            _ => None,
        }
    }

    /// Validate the form and mark a request as in flight.
    ///
    /// A blank query is rejected without touching the status.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_busy() {
            warn!("Submission rejected: a search is already in progress");
            return Err(SubmitError::Busy);
        }

        let request = self.form.build_request()?;
        let id = Uuid::new_v4();
        self.status = SubmitStatus::Pending { id };

        info!(
            "Submission {} started (query: {:?}, competitors: {:?}, index: {:?})",
            id, request.query, request.competitors, self.form.search_index
        );
        Ok(PendingSubmission { id, request })
    }

    /// Record the outcome of a pending submission.
    ///
    /// Success replaces the stored response wholesale. Failure keeps the
    /// previous response and sets the generic notice. Returns `Ok(false)`
    /// when the ticket is not the one in flight and was ignored.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<ContractReport, SubmitError>,
    ) -> Result<bool, SubmitError> {
        if self.status != (SubmitStatus::Pending { id: pending.id }) {
            warn!("Ignoring outcome of stale submission {}", pending.id);
            return Ok(false);
        }

        match outcome {
            Ok(report) => {
                info!(
                    "Submission {} completed: {} results, {} contract violations",
                    pending.id,
                    report.response.results.len(),
                    report.violations.len()
                );
                self.results = Some(report.response);
                self.status = SubmitStatus::Idle;
                Ok(true)
            }
            Err(err) => {
                error!("Submission {} failed: {}", pending.id, err);
                self.status = SubmitStatus::Failed {
                    notice: err.notice(),
                };
                Err(err)
            }
        }
    }

    /// One attempt: begin, call the service, record the outcome
    pub async fn submit<S>(&mut self, service: &S) -> Result<(), SubmitError>
    where
        S: AnalysisService + ?Sized,
    {
        let pending = self.begin_submit()?;
        let outcome = service.search(pending.request()).await;
        self.finish_submit(pending, outcome).map(|_| ())
    }
}
