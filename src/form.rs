// src/form.rs
//! Draft input for one search: query, competitor rows and search index

use crate::error::{FormError, SubmitError};
use crate::types::SearchRequest;

/// Ordered competitor rows. Row 0 is the anchor row and always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorList {
    rows: Vec<String>,
}

impl Default for CompetitorList {
    fn default() -> Self {
        Self::new()
    }
}

impl CompetitorList {
    pub fn new() -> Self {
        Self {
            rows: vec![String::new()],
        }
    }

    /// Seed rows from existing values, keeping the anchor row when empty
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = values.into_iter().map(Into::into).collect();
        if rows.is_empty() {
            Self::new()
        } else {
            Self { rows }
        }
    }

    /// Adds one empty row and returns its index
    pub fn append(&mut self) -> usize {
        self.rows.push(String::new());
        self.rows.len() - 1
    }

    pub fn update(&mut self, index: usize, value: impl Into<String>) -> Result<(), FormError> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(FormError::IndexOutOfRange { index, len })?;
        *row = value.into();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<String, FormError> {
        if index == 0 {
            return Err(FormError::AnchorRow);
        }
        if index >= self.rows.len() {
            return Err(FormError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    pub fn can_remove(&self, index: usize) -> bool {
        index > 0 && index < self.rows.len()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Non-blank rows as typed, in row order
    pub fn filled(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| !row.trim().is_empty())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryForm {
    pub query: String,
    pub competitors: CompetitorList,
    /// Held for display only; the search endpoint does not accept it.
    pub search_index: String,
}

impl QueryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_competitors<I, S>(mut self, competitors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.competitors = CompetitorList::from_values(competitors);
        self
    }

    pub fn with_search_index(mut self, index: impl Into<String>) -> Self {
        self.search_index = index.into();
        self
    }

    /// Build the outbound request, blocking submission when the query is blank
    pub fn build_request(&self) -> Result<SearchRequest, SubmitError> {
        let request = SearchRequest::new(self.query.clone(), self.competitors.filled());
        request.validate()?;
        Ok(request)
    }
}
